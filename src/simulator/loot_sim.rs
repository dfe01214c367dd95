//! Loot statistics collected from battle results.

use crate::items::types::{Item, Rarity};
use serde::Serialize;

/// Statistics about loot drops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LootStats {
    pub total_drops: u64,
    pub common_drops: u64,
    pub rare_drops: u64,
    pub legendary_drops: u64,
    pub epic_drops: u64,
    pub mystic_drops: u64,
    pub primal_drops: u64,
    pub shard_drops: u64,
    /// Victories, each of which rolls for loot once.
    pub total_drop_attempts: u64,
}

impl LootStats {
    pub fn record_drop(&mut self, item: &Item) {
        self.total_drops += 1;
        match item.rarity {
            Rarity::Common => self.common_drops += 1,
            Rarity::Rare => self.rare_drops += 1,
            Rarity::Legendary => self.legendary_drops += 1,
            Rarity::Epic => self.epic_drops += 1,
            Rarity::Mystic => self.mystic_drops += 1,
            Rarity::Primal => self.primal_drops += 1,
            Rarity::Special => self.shard_drops += 1,
        }
    }

    pub fn record_attempt(&mut self) {
        self.total_drop_attempts += 1;
    }

    pub fn drops_of(&self, rarity: Rarity) -> u64 {
        match rarity {
            Rarity::Common => self.common_drops,
            Rarity::Rare => self.rare_drops,
            Rarity::Legendary => self.legendary_drops,
            Rarity::Epic => self.epic_drops,
            Rarity::Mystic => self.mystic_drops,
            Rarity::Primal => self.primal_drops,
            Rarity::Special => self.shard_drops,
        }
    }

    /// Drops per victory. Can exceed the eligibility chance since one roll may
    /// yield both an item and a shard.
    pub fn drop_rate(&self) -> f64 {
        if self.total_drop_attempts == 0 {
            0.0
        } else {
            self.total_drops as f64 / self.total_drop_attempts as f64
        }
    }
}
