//! Floor scaling: monster stats and zone lookup.
//!
//! Pure functions of the floor number. Nothing here touches session state.

use super::constants::{
    BOSS_FLOOR_INTERVAL, BOSS_STAT_MULTIPLIER, EXPONENT_SEGMENT_FLOORS, EXPONENT_STEP,
    MONSTER_DEFENSE_RATIO, ZONE_COUNT, ZONE_FLOOR_LIMITS,
};
use serde::Serialize;

/// Base monster stats for a floor, before boss scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    pub attack: f64,
    pub max_health: f64,
    pub defense: f64,
}

impl BaseStats {
    fn scaled(self, factor: f64) -> Self {
        Self {
            attack: self.attack * factor,
            max_health: self.max_health * factor,
            defense: self.defense * factor,
        }
    }
}

/// Snapshot of the monster guarding a floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterStats {
    pub max_health: f64,
    pub current_health: f64,
    pub attack: f64,
    pub defense: f64,
}

/// Power-curve exponent: +0.05 every 100k floors, forever.
pub fn exponent(floor: u64) -> f64 {
    let floor = floor.max(1);
    let segment = (floor - 1) / EXPONENT_SEGMENT_FLOORS;
    1.0 + EXPONENT_STEP * segment as f64
}

pub fn base_stats(floor: u64) -> BaseStats {
    let floor = floor.max(1);
    let base = (floor as f64).powf(exponent(floor));
    BaseStats {
        attack: base,
        max_health: base,
        defense: base * MONSTER_DEFENSE_RATIO,
    }
}

pub fn is_boss_floor(floor: u64) -> bool {
    floor > 0 && floor % BOSS_FLOOR_INTERVAL == 0
}

/// Full-health monster for `floor`.
///
/// Bosses use the *previous* floor's base stats ×10, not their own.
pub fn monster_stats(floor: u64) -> MonsterStats {
    let stats = if is_boss_floor(floor) {
        base_stats(floor.saturating_sub(1).max(1)).scaled(BOSS_STAT_MULTIPLIER)
    } else {
        base_stats(floor)
    };
    MonsterStats {
        max_health: stats.max_health,
        current_health: stats.max_health,
        attack: stats.attack,
        defense: stats.defense,
    }
}

/// Loot zone for a floor. Limits are inclusive at the upper edge.
pub fn zone_for_floor(floor: u64) -> u8 {
    ZONE_FLOOR_LIMITS
        .iter()
        .position(|&limit| floor <= limit)
        .map(|idx| idx as u8 + 1)
        .unwrap_or(ZONE_COUNT)
}
