//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of dungeon runs to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Use the 8-floor extended dungeon instead of 5
    pub extended_dungeon: bool,

    /// Answer quality rates; the remainder up to 1.0 is Timeout
    pub perfect_rate: f64,
    pub correct_rate: f64,
    pub partial_rate: f64,
    pub wrong_rate: f64,

    /// Simulated player statline
    pub player_hp: u32,
    pub player_attack: u32,
    pub player_defense: u32,
    pub player_crit_chance: u32,
    pub player_level: u32,
    pub evolution_tier: u8,

    /// Safety cap on turns per run before giving up
    pub max_turns_per_run: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            extended_dungeon: false,
            perfect_rate: 0.25,
            correct_rate: 0.45,
            partial_rate: 0.15,
            wrong_rate: 0.10,
            player_hp: 100,
            player_attack: 10,
            player_defense: 3,
            player_crit_chance: 15,
            player_level: 5,
            evolution_tier: 1,
            max_turns_per_run: 10_000,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a struggling learner (low accuracy).
    pub fn struggling_learner(num_runs: u32) -> Self {
        Self {
            num_runs,
            perfect_rate: 0.05,
            correct_rate: 0.30,
            partial_rate: 0.25,
            wrong_rate: 0.30,
            ..Default::default()
        }
    }

    /// Quick config for a mastery-level learner.
    pub fn mastery_learner(num_runs: u32) -> Self {
        Self {
            num_runs,
            perfect_rate: 0.55,
            correct_rate: 0.35,
            partial_rate: 0.07,
            wrong_rate: 0.03,
            evolution_tier: 3,
            ..Default::default()
        }
    }
}
