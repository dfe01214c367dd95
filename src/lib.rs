//! Climber - incremental floor-climbing battle engine.
//!
//! The engine lives in [`core`] and [`items`]; the terminal client, the
//! simulator, and the websocket host are thin shells around
//! [`core::SessionState`].

pub mod build_info;
pub mod config;
pub mod core;
pub mod error;
pub mod items;
pub mod simulator;
pub mod web;

pub use crate::config::EngineConfig;
pub use crate::core::{BattleResult, BattleStatus, SessionState};
pub use crate::error::{ConfigError, EngineError};
