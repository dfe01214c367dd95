//! Headless balance simulator for Monte Carlo analysis.
//!
//! Runs many seeded sessions through the real battle tick with a greedy
//! auto-player, to answer questions like:
//! - How far does a run get in N ticks?
//! - How often do bosses stop progress?
//! - How many drops of each rarity does a run see?

mod autoplayer;
mod config;
mod loot_sim;
mod report;
mod runner;

pub use autoplayer::AutoPlayer;
pub use config::SimConfig;
pub use loot_sim::LootStats;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
