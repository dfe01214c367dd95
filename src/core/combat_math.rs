//! Damage math used by the battle tick.
//!
//! These pure functions calculate combat numbers without side effects.

use super::constants::MIN_DAMAGE;

/// Damage of one hit after defense. Never less than `MIN_DAMAGE`.
///
/// # Arguments
/// * `attack` - Attacker's effective attack
/// * `defense` - Defender's effective defense
pub fn damage_after_defense(attack: f64, defense: f64) -> f64 {
    (attack - defense).max(MIN_DAMAGE)
}

/// Monster damage applied to the integer player health pool.
///
/// Rounded up so fractional monster attack still costs a whole point.
pub fn monster_hit_on_player(monster_attack: f64, player_defense: u64) -> u64 {
    damage_after_defense(monster_attack, player_defense as f64).ceil() as u64
}

/// Player damage applied to the monster's health.
pub fn player_hit_on_monster(player_attack: u64, monster_defense: f64) -> f64 {
    damage_after_defense(player_attack as f64, monster_defense)
}

/// Check if an entity is still standing.
pub fn is_alive(current_health: f64) -> bool {
    current_health > 0.0
}
