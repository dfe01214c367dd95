//! Main simulation runner driving real sessions.
//!
//! Every run plays a fresh `SessionState` through `battle_tick`, so results
//! match real gameplay. Statistics are collected from the `BattleResult`s.

use super::autoplayer::AutoPlayer;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::battle::{BattleResult, BattleStatus};
use crate::core::session::SessionState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let r = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Floor {} (best {}), Victories {}, Boss Victories {}, Defeats {}, Drops {}",
                run_idx + 1,
                config.num_runs,
                r.final_floor,
                r.best_floor,
                r.victories,
                r.boss_victories,
                r.defeats,
                r.loot.total_drops
            );
        }
        all_runs.push(r);
    }

    info!(runs = config.num_runs, "simulation complete");
    SimReport::from_runs(all_runs, config.max_ticks_per_run)
}

/// Plays one session for `max_ticks_per_run` ticks.
pub fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut state = SessionState::new(config.engine.clone());
    let player = AutoPlayer::new(config.auto_upgrade, config.auto_equip);
    let mut stats = RunStats::default();

    for _ in 0..config.max_ticks_per_run {
        if let Some(receipt) = player.buy_cheapest(&mut state) {
            stats.gold_spent += receipt.spent_cost;
        }

        let result = state.battle_tick(rng);
        record_tick(&mut stats, &result);

        if !result.drops.is_empty() {
            stats.items_equipped += player.equip_upgrades(&mut state) as u64;
        }
        stats.total_ticks += 1;
    }

    stats.final_floor = state.player.floor;
    stats.best_floor = state.player.best_floor;
    stats
}

fn record_tick(stats: &mut RunStats, result: &BattleResult) {
    match result.status {
        BattleStatus::Victory => {
            stats.victories += 1;
            if result.was_boss {
                stats.boss_victories += 1;
            }
            stats.gold_earned += result.gold_earned;
            stats.loot.record_attempt();
            for item in &result.drops {
                stats.loot.record_drop(item);
            }
        }
        BattleStatus::Defeat => stats.defeats += 1,
        BattleStatus::Ongoing => {}
    }
}
