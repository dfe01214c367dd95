//! Balance constants shared by the engine, the terminal client, and the simulator.
//!
//! All core balance numbers live here. Change once, test everywhere.

// =============================================================================
// STARTING PLAYER STATS
// =============================================================================

pub const STARTING_MAX_HEALTH: u64 = 100;
pub const STARTING_ATTACK: u64 = 100;
pub const STARTING_DEFENSE: u64 = 0;
pub const STARTING_FLOOR: u64 = 1;

// =============================================================================
// MONSTER SCALING
// =============================================================================

/// Floors per exponent segment. Every segment adds `EXPONENT_STEP` to the power curve.
pub const EXPONENT_SEGMENT_FLOORS: u64 = 100_000;

/// Exponent added per segment.
pub const EXPONENT_STEP: f64 = 0.05;

/// Monster defense as a fraction of the base stat.
pub const MONSTER_DEFENSE_RATIO: f64 = 0.5;

/// Every Nth floor hosts a boss.
pub const BOSS_FLOOR_INTERVAL: u64 = 100;

/// Boss stats = previous floor's base stats × this.
pub const BOSS_STAT_MULTIPLIER: f64 = 10.0;

/// Minimum damage of any hit, so over-defense never stalls a fight.
pub const MIN_DAMAGE: f64 = 1.0;

// =============================================================================
// ZONES
// =============================================================================

/// Inclusive upper floor of zones 1..=5. Anything above the last is zone 6.
pub const ZONE_FLOOR_LIMITS: [u64; 5] = [500, 3_000, 15_000, 500_000, 1_000_000];

pub const ZONE_COUNT: u8 = 6;

// =============================================================================
// LOOT
// =============================================================================

pub const ITEM_DROP_CHANCE: f64 = 0.02;
pub const BOSS_ITEM_DROP_CHANCE: f64 = 0.10;

pub const SHARD_ITEM_NAME: &str = "Rift Shard";

// =============================================================================
// CLIENTS
// =============================================================================

/// Auto-battle cadence of the terminal client.
pub const AUTO_BATTLE_INTERVAL_MS: u64 = 1_000;

/// Input poll timeout of the terminal client.
pub const INPUT_POLL_MS: u64 = 50;

pub const DEFAULT_SERVE_PORT: u16 = 3000;

/// Batch sizes offered by the upgrade panel.
pub const UPGRADE_BATCH_SIZES: [u64; 3] = [1, 10, 100];

/// Battle log entries kept by the terminal client.
pub const BATTLE_LOG_CAPACITY: usize = 200;
