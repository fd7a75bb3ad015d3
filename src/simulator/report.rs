//! Simulation report generation.

use crate::loot::Rarity;
use serde::Serialize;

/// Statistics for one simulated dungeon run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub completed: bool,
    pub defeated: bool,
    pub floors_cleared: u32,
    pub victories: u32,
    pub total_turns: u64,
    pub gold_earned: u64,
    pub xp_earned: u64,
    pub final_hp: u32,
    pub events_triggered: u32,
    /// Drop counts indexed Common..Epic
    pub drops_by_rarity: [u32; 4],
}

impl RunStats {
    pub fn record_drop(&mut self, rarity: Rarity) {
        let idx = match rarity {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
        };
        self.drops_by_rarity[idx] += 1;
    }

    pub fn total_drops(&self) -> u32 {
        self.drops_by_rarity.iter().sum()
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_defeated: u32,

    pub avg_floors_cleared: f64,
    pub avg_turns_per_run: f64,
    pub avg_gold_earned: f64,
    pub avg_xp_earned: f64,
    pub avg_events_per_run: f64,
    pub avg_final_hp: f64,

    /// Observed drop rate: drops per encounter victory
    pub drop_rate: f64,
    pub drops_by_rarity: [u64; 4],

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;

        let runs_completed = runs.iter().filter(|r| r.completed).count() as u32;
        let runs_defeated = runs.iter().filter(|r| r.defeated).count() as u32;

        let avg_floors_cleared =
            runs.iter().map(|r| r.floors_cleared as f64).sum::<f64>() / denom;
        let avg_turns_per_run = runs.iter().map(|r| r.total_turns as f64).sum::<f64>() / denom;
        let avg_gold_earned = runs.iter().map(|r| r.gold_earned as f64).sum::<f64>() / denom;
        let avg_xp_earned = runs.iter().map(|r| r.xp_earned as f64).sum::<f64>() / denom;
        let avg_events_per_run =
            runs.iter().map(|r| r.events_triggered as f64).sum::<f64>() / denom;
        let avg_final_hp = runs.iter().map(|r| r.final_hp as f64).sum::<f64>() / denom;

        let total_victories: u64 = runs.iter().map(|r| r.victories as u64).sum();
        let total_drops: u64 = runs.iter().map(|r| r.total_drops() as u64).sum();
        let drop_rate = total_drops as f64 / total_victories.max(1) as f64;

        let mut drops_by_rarity = [0u64; 4];
        for run in &runs {
            for (total, count) in drops_by_rarity.iter_mut().zip(run.drops_by_rarity) {
                *total += count as u64;
            }
        }

        Self {
            num_runs,
            runs_completed,
            runs_defeated,
            avg_floors_cleared,
            avg_turns_per_run,
            avg_gold_earned,
            avg_xp_earned,
            avg_events_per_run,
            avg_final_hp,
            drop_rate,
            drops_by_rarity,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    DUNGEON SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        let completion_rate = self.runs_completed as f64 / self.num_runs.max(1) as f64 * 100.0;
        report.push_str(&format!(
            "Runs: {} total, {} completed ({:.1}%), {} defeated\n\n",
            self.num_runs, self.runs_completed, completion_rate, self.runs_defeated
        ));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Floors Cleared:  {:.2}\n",
            self.avg_floors_cleared
        ));
        report.push_str(&format!(
            "  Avg Turns per Run:   {:.1}\n",
            self.avg_turns_per_run
        ));
        report.push_str(&format!(
            "  Avg Events per Run:  {:.2}\n",
            self.avg_events_per_run
        ));
        report.push_str(&format!("  Avg Final HP:        {:.1}\n\n", self.avg_final_hp));

        report.push_str("── REWARDS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Gold:            {:.0}\n", self.avg_gold_earned));
        report.push_str(&format!("  Avg XP:              {:.0}\n\n", self.avg_xp_earned));

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Drop Rate:           {:.1}% per victory\n",
            self.drop_rate * 100.0
        ));
        let labels = ["Common", "Uncommon", "Rare", "Epic"];
        let total_drops: u64 = self.drops_by_rarity.iter().sum();
        for (label, count) in labels.iter().zip(self.drops_by_rarity) {
            let pct = count as f64 / total_drops.max(1) as f64 * 100.0;
            let bar_len = (pct / 5.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!("  {:9} {:>5.1}% {}\n", label, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if completion_rate > 90.0 {
            "TOO EASY - Nearly every run completes"
        } else if completion_rate > 55.0 {
            "GOOD - Most runs complete with some risk"
        } else if completion_rate > 25.0 {
            "HARD - Completion takes strong recall"
        } else {
            "TOO HARD - Runs rarely finish"
        };
        report.push_str(&format!("  Completion Rate: {:.1}%\n", completion_rate));
        report.push_str(&format!("  Rating:          {}\n", rating));

        report
    }

    /// Serialize the full report to pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
