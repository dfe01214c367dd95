//! Integration test: Battle Tick State Machine
//!
//! Drives `SessionState::battle_tick` through victory, defeat, and ongoing
//! combat, and checks the progression invariants over long random runs.

use climber::config::EngineConfig;
use climber::core::scaling::monster_stats;
use climber::core::{BattleStatus, SessionState, UpgradeStat};
use climber::items::drops::DropChances;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn session_without_loot() -> SessionState {
    SessionState::new(EngineConfig {
        drops: DropChances {
            normal_chance: 0.0,
            boss_chance: 0.0,
            shard_chance_override: Some(0.0),
        },
        ..EngineConfig::default()
    })
}

// =========================================================================
// Fixed scenarios
// =========================================================================

#[test]
fn test_fresh_session_first_tick_wins_floor_one() {
    let mut state = SessionState::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let result = state.battle_tick(&mut rng);

    assert_eq!(result.status, BattleStatus::Victory);
    assert_eq!(result.gold_earned, 1);
    assert_eq!(result.new_floor, 2);
    assert_eq!(result.best_floor, 2);
    assert_eq!(result.user_health, 100);
    assert_eq!(state.player.gold, 1);
}

#[test]
fn test_one_hp_on_unwinnable_floor_is_defeat() {
    let mut state = session_without_loot();
    state.player.floor = 1000;
    state.player.best_floor = 1000;
    state.player.gold = 77;
    state.player.current_health = 1;
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let result = state.battle_tick(&mut rng);

    assert_eq!(result.status, BattleStatus::Defeat);
    assert_eq!(result.gold_earned, 0);
    assert_eq!(result.new_floor, 1);
    assert_eq!(result.user_health, 100, "defeat heals to full");
    assert_eq!(result.best_floor, 1000, "best floor survives defeat");
    assert_eq!(state.player.gold, 77, "gold survives defeat");
    assert!(result.drops.is_empty());
    assert_eq!(state.current_monster().current_health, 1.0);
}

#[test]
fn test_damage_floor_of_one_wears_down_monster() {
    let mut state = session_without_loot();
    state.player.floor = 999;
    state.player.max_health = 1_000_000;
    state.player.current_health = 1_000_000;
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let result = state.battle_tick(&mut rng);

    // 100 attack against 499.5 defense
    assert!(!result.was_boss);
    assert_eq!(result.status, BattleStatus::Ongoing);
    assert_eq!(result.damage_dealt, 1.0);
    assert_eq!(result.monster_health, 998.0);
    assert_eq!(result.damage_taken, 999);
    assert_eq!(result.user_health, 999_001);
}

#[test]
fn test_boss_floor_uses_previous_floor_times_ten() {
    let mut state = session_without_loot();
    state.player.floor = 1000;
    state.player.max_health = 1_000_000;
    state.player.current_health = 1_000_000;
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let result = state.battle_tick(&mut rng);

    assert!(result.was_boss);
    assert_eq!(result.status, BattleStatus::Ongoing);
    assert_eq!(result.damage_dealt, 1.0);
    assert_eq!(result.monster_health, 9_989.0);
    assert_eq!(result.damage_taken, 9_990);
}

#[test]
fn test_boss_needs_more_than_starting_stats() {
    let mut state = session_without_loot();
    state.player.floor = 100;
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let result = state.battle_tick(&mut rng);

    // 990 attack against 100 health and no defense
    assert!(result.was_boss);
    assert_eq!(result.status, BattleStatus::Defeat);
    assert_eq!(result.damage_taken, 990);
}

#[test]
fn test_monster_health_carries_over_between_ticks() {
    let mut state = session_without_loot();
    state.player.floor = 899;
    state.player.attack = 460; // 10.5 damage per hit against 449.5 defense
    state.player.max_health = 100_000;
    state.player.current_health = 100_000;
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for expected in [888.5, 878.0, 867.5] {
        let result = state.battle_tick(&mut rng);
        assert_eq!(result.status, BattleStatus::Ongoing);
        assert_eq!(result.monster_health, expected);
    }
    assert_eq!(state.get_state().monster.current_health, 867.5);
}

#[test]
fn test_floor_change_outside_battle_resyncs_monster() {
    let mut state = session_without_loot();
    state.player.floor = 899;
    state.player.attack = 460;
    state.player.max_health = 100_000;
    state.player.current_health = 100_000;
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    state.battle_tick(&mut rng);

    state.player.floor = 799;
    let result = state.battle_tick(&mut rng);
    assert!(!result.was_boss);
    assert_eq!(
        result.monster_health,
        monster_stats(799).max_health - result.damage_dealt,
        "a new floor starts from a full-health monster"
    );
}

// =========================================================================
// Long-run invariants
// =========================================================================

#[test]
fn test_progression_invariants_hold_over_random_play() {
    let mut state = SessionState::new(EngineConfig {
        drops: DropChances {
            normal_chance: 0.5,
            boss_chance: 1.0,
            shard_chance_override: Some(0.1),
        },
        ..EngineConfig::default()
    });
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut last_best = state.player.best_floor;

    for tick in 0..5_000 {
        if rng.gen_bool(0.3) {
            let stat = UpgradeStat::all()[rng.gen_range(0..3)];
            let _ = state.upgrade(stat, rng.gen_range(1..5));
        }
        if let Some(id) = state.inventory.bag.last().map(|item| item.id) {
            state.equip(id);
        }

        let gold_before = state.player.gold;
        let floor_before = state.player.floor;
        let result = state.battle_tick(&mut rng);

        assert!(state.player.floor >= 1, "tick {tick}: floor fell below 1");
        assert!(state.player.best_floor >= state.player.floor);
        assert!(state.player.best_floor >= last_best, "tick {tick}: best floor dropped");
        assert!(state.player.current_health <= state.player.max_health);
        last_best = state.player.best_floor;

        match result.status {
            BattleStatus::Victory => {
                assert_eq!(result.gold_earned, floor_before);
                assert_eq!(state.player.gold, gold_before + floor_before);
                assert_eq!(state.player.floor, floor_before + 1);
                assert_eq!(state.player.current_health, state.player.max_health);
                assert!(result.drops.len() <= 2);
            }
            BattleStatus::Defeat => {
                assert_eq!(result.gold_earned, 0);
                assert_eq!(state.player.gold, gold_before);
                assert_eq!(state.player.floor, 1);
                assert!(result.drops.is_empty());
            }
            BattleStatus::Ongoing => {
                assert_eq!(result.gold_earned, 0);
                assert_eq!(state.player.floor, floor_before);
                assert!(result.monster_health > 0.0);
            }
        }
    }
}
