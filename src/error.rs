//! Error types.
//!
//! Every engine failure is recoverable and leaves the session untouched.

use crate::items::types::ItemId;
use thiserror::Error;

/// Expected, non-fatal failures of a session operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The upgrade costs more gold than the player has.
    #[error("Not enough gold: need {cost}, have {gold}.")]
    InsufficientFunds { cost: u64, gold: u64 },

    /// No item with this id in the bag, materials, or equipment.
    #[error("Item {0} not found.")]
    ItemNotFound(ItemId),

    /// Materials cannot be worn.
    #[error("{name} is a material and cannot be equipped.")]
    InvalidSlotForEquip { name: String },
}

/// Failures while loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
