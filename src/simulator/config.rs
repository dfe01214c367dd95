//! Simulation configuration.

use crate::config::EngineConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Battle ticks per run
    pub max_ticks_per_run: u64,

    /// Buy the cheapest affordable upgrade before every tick
    pub auto_upgrade: bool,

    /// Equip strictly stronger gear as it drops
    pub auto_equip: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    pub engine: EngineConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 10,
            seed: None,
            max_ticks_per_run: 36_000,
            auto_upgrade: true,
            auto_equip: true,
            verbosity: 1,
            engine: EngineConfig::default(),
        }
    }
}

impl SimConfig {
    /// Quick config for loot analysis: no spending, so runs stay on early floors
    pub fn loot_analysis(num_runs: u32) -> Self {
        Self {
            num_runs,
            auto_upgrade: false,
            ..Default::default()
        }
    }
}
