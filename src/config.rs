//! Engine configuration.
//!
//! Defaults come from `core::constants`; a JSON file may override any subset.

use crate::core::constants::{
    AUTO_BATTLE_INTERVAL_MS, DEFAULT_SERVE_PORT, STARTING_ATTACK, STARTING_DEFENSE,
    STARTING_MAX_HEALTH,
};
use crate::error::ConfigError;
use crate::items::drops::DropChances;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base stats a fresh (or reset) session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartingStats {
    pub max_health: u64,
    pub attack: u64,
    pub defense: u64,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            max_health: STARTING_MAX_HEALTH,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
        }
    }
}

/// Configuration for a session and the clients hosting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub starting_stats: StartingStats,
    pub drops: DropChances,
    /// Auto-battle cadence of the terminal client.
    pub auto_battle_interval_ms: u64,
    /// Port of the websocket host.
    pub serve_port: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_stats: StartingStats::default(),
            drops: DropChances::default(),
            auto_battle_interval_ms: AUTO_BATTLE_INTERVAL_MS,
            serve_port: DEFAULT_SERVE_PORT,
        }
    }
}

impl EngineConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("drops.normalChance", self.drops.normal_chance)?;
        check_probability("drops.bossChance", self.drops.boss_chance)?;
        if let Some(shard) = self.drops.shard_chance_override {
            check_probability("drops.shardChanceOverride", shard)?;
        }
        if self.starting_stats.max_health == 0 {
            return Err(ConfigError::Invalid {
                field: "startingStats.maxHealth",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.auto_battle_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "autoBattleIntervalMs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is not a probability in [0, 1]"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.starting_stats.max_health, 100);
        assert_eq!(config.starting_stats.attack, 100);
        assert_eq!(config.starting_stats.defense, 0);
        assert_eq!(config.drops.normal_chance, 0.02);
        assert_eq!(config.drops.boss_chance, 0.10);
        assert!(config.drops.shard_chance_override.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{"startingStats": {"attack": 5}}"#).unwrap();
        assert_eq!(config.starting_stats.attack, 5);
        assert_eq!(config.starting_stats.max_health, 100);
        assert_eq!(config.serve_port, DEFAULT_SERVE_PORT);
    }

    #[test]
    fn test_drop_overrides_parse() {
        let config = EngineConfig::from_json(
            r#"{"drops": {"normalChance": 1.0, "shardChanceOverride": 0.0}}"#,
        )
        .unwrap();
        assert_eq!(config.drops.normal_chance, 1.0);
        assert_eq!(config.drops.boss_chance, 0.10);
        assert_eq!(config.drops.shard_chance_override, Some(0.0));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = EngineConfig::from_json(r#"{"drops": {"bossChance": 1.5}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "drops.bossChance",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_health() {
        let err = EngineConfig::from_json(r#"{"startingStats": {"maxHealth": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            EngineConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load("/definitely/not/here/climber.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
