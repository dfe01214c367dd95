//! Core engine: scaling, combat math, economy, and the session state machine.

pub mod battle;
pub mod combat_math;
pub mod constants;
pub mod economy;
pub mod scaling;
pub mod session;

pub use battle::{BattleResult, BattleStatus};
pub use economy::{normalize_amount, UpgradeCosts, UpgradeCounters, UpgradeStat};
pub use scaling::{is_boss_floor, monster_stats, zone_for_floor, MonsterStats};
pub use session::{
    EquipOutcome, GameStateView, PlayerStats, SessionState, UpgradeOutcome, UpgradeReceipt,
};
