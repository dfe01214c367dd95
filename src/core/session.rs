//! The single in-memory game session and its non-battle operations.
//!
//! `SessionState` owns the player, the tracked monster, the upgrade counters,
//! and the inventory. Every operation takes `&mut self`, so a host that shares
//! a session across threads must wrap it in a mutex.

use super::economy::{UpgradeCosts, UpgradeCounters, UpgradeStat};
use super::scaling::{monster_stats, MonsterStats};
use crate::config::{EngineConfig, StartingStats};
use crate::core::constants::STARTING_FLOOR;
use crate::error::EngineError;
use crate::items::inventory::Inventory;
use crate::items::types::{Item, ItemId, ItemIdAllocator};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub max_health: u64,
    pub current_health: u64,
    pub attack: u64,
    pub defense: u64,
    pub gold: u64,
    pub floor: u64,
    /// Highest floor ever reached. Survives defeats.
    pub best_floor: u64,
}

impl PlayerStats {
    pub fn new(start: &StartingStats) -> Self {
        Self {
            max_health: start.max_health,
            current_health: start.max_health,
            attack: start.attack,
            defense: start.defense,
            gold: 0,
            floor: STARTING_FLOOR,
            best_floor: STARTING_FLOOR,
        }
    }

    pub fn heal_full(&mut self) {
        self.current_health = self.max_health;
    }
}

/// Health of the monster currently being fought, remembered per floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MonsterTracker {
    pub(crate) floor: u64,
    pub(crate) health: f64,
}

impl MonsterTracker {
    pub(crate) fn fresh(floor: u64) -> Self {
        Self {
            floor,
            health: monster_stats(floor).max_health,
        }
    }

    /// Resets to full health when the floor changed or the monster is dead.
    pub(crate) fn resync(&mut self, floor: u64) {
        if self.floor != floor || self.health <= 0.0 {
            *self = Self::fresh(floor);
        }
    }

    /// Monster stats for `floor` with the tracked health when it is the same fight.
    pub(crate) fn snapshot(&self, floor: u64) -> MonsterStats {
        let mut stats = monster_stats(floor);
        if self.floor == floor {
            stats.current_health = self.health;
        }
        stats
    }
}

/// Everything a client needs to render one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    /// Player stats with equipment bonuses applied.
    pub player: PlayerStats,
    pub monster: MonsterStats,
    pub upgrade_costs: UpgradeCosts,
    pub inventory: Inventory,
}

/// A successful upgrade purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeReceipt {
    pub stat: UpgradeStat,
    pub units: u64,
    pub spent_cost: u64,
    pub next_costs: UpgradeCosts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_cost: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_costs: Option<UpgradeCosts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub player: PlayerStats,
    pub inventory: Inventory,
    pub upgrades: UpgradeCounters,
    pub(crate) monster: MonsterTracker,
    /// Not reset with the session, so ids stay unique for the process lifetime.
    pub(crate) item_ids: ItemIdAllocator,
    config: EngineConfig,
}

impl SessionState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            player: PlayerStats::new(&config.starting_stats),
            inventory: Inventory::new(),
            upgrades: UpgradeCounters::default(),
            monster: MonsterTracker::fresh(STARTING_FLOOR),
            item_ids: ItemIdAllocator::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Base stats plus equipment. The health bonus raises both max and
    /// current health, current capped at the raised max.
    pub fn effective_stats(&self) -> PlayerStats {
        let bonus = self.inventory.equipment_bonus();
        let max_health = self.player.max_health.saturating_add(bonus.health);
        let current_health = self
            .player
            .current_health
            .saturating_add(bonus.health)
            .min(max_health);
        PlayerStats {
            max_health,
            current_health,
            attack: self.player.attack.saturating_add(bonus.attack),
            defense: self.player.defense.saturating_add(bonus.defense),
            ..self.player
        }
    }

    /// Stats of the monster on the current floor, without touching the tracker.
    pub fn current_monster(&self) -> MonsterStats {
        self.monster.snapshot(self.player.floor)
    }

    pub fn upgrade_costs(&self) -> UpgradeCosts {
        self.upgrades.next_costs()
    }

    /// Full state for rendering. Re-syncs a stale monster tracker first.
    pub fn get_state(&mut self) -> GameStateView {
        self.monster.resync(self.player.floor);
        GameStateView {
            player: self.effective_stats(),
            monster: self.current_monster(),
            upgrade_costs: self.upgrade_costs(),
            inventory: self.inventory.clone(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Buys `amount` units of `stat` at their summed marginal cost, or nothing.
    pub fn try_upgrade(
        &mut self,
        stat: UpgradeStat,
        amount: u64,
    ) -> Result<UpgradeReceipt, EngineError> {
        let units = amount.max(1);
        let cost = self.upgrades.bulk_cost(stat, units);
        if self.player.gold < cost {
            return Err(EngineError::InsufficientFunds {
                cost,
                gold: self.player.gold,
            });
        }

        self.player.gold -= cost;
        self.upgrades.advance(stat, units);
        match stat {
            UpgradeStat::Health => {
                self.player.max_health = self.player.max_health.saturating_add(units);
                self.player.current_health = self.player.current_health.saturating_add(units);
            }
            UpgradeStat::Attack => {
                self.player.attack = self.player.attack.saturating_add(units);
            }
            UpgradeStat::Defense => {
                self.player.defense = self.player.defense.saturating_add(units);
            }
        }

        info!(%stat, units, cost, gold_left = self.player.gold, "upgrade purchased");
        Ok(UpgradeReceipt {
            stat,
            units,
            spent_cost: cost,
            next_costs: self.upgrade_costs(),
        })
    }

    pub fn upgrade(&mut self, stat: UpgradeStat, amount: u64) -> UpgradeOutcome {
        match self.try_upgrade(stat, amount) {
            Ok(receipt) => UpgradeOutcome {
                success: true,
                message: format!("{} increased by {}.", receipt.stat, receipt.units),
                spent_cost: Some(receipt.spent_cost),
                next_costs: Some(receipt.next_costs),
            },
            Err(err) => UpgradeOutcome {
                success: false,
                message: err.to_string(),
                spent_cost: None,
                next_costs: None,
            },
        }
    }

    pub fn try_equip(&mut self, id: ItemId) -> Result<&Item, EngineError> {
        let item = self.inventory.equip(id)?;
        info!(item = %item.id, name = %item.name, slot = item.slot.name(), "item equipped");
        Ok(item)
    }

    pub fn equip(&mut self, id: ItemId) -> EquipOutcome {
        match self.try_equip(id) {
            Ok(item) => {
                let message = format!("{} equipped.", item.name);
                EquipOutcome {
                    success: true,
                    message,
                    inventory: Some(self.inventory.clone()),
                }
            }
            Err(err) => EquipOutcome {
                success: false,
                message: err.to_string(),
                inventory: None,
            },
        }
    }

    /// Back to floor 1 with starting stats, no upgrades, and an empty inventory.
    pub fn reset_session(&mut self) {
        self.player = PlayerStats::new(&self.config.starting_stats);
        self.upgrades = UpgradeCounters::default();
        self.monster = MonsterTracker::fresh(STARTING_FLOOR);
        self.inventory = Inventory::new();
        info!("session reset");
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::{ItemSlot, ItemStats, Rarity};

    fn gear(id: u64, slot: ItemSlot, stats: ItemStats) -> Item {
        Item {
            id: ItemId(id),
            name: format!("Gear {id}"),
            slot,
            rarity: Rarity::Rare,
            stats,
            zone: 1,
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let state = SessionState::default();
        assert_eq!(state.player.max_health, 100);
        assert_eq!(state.player.current_health, 100);
        assert_eq!(state.player.attack, 100);
        assert_eq!(state.player.defense, 0);
        assert_eq!(state.player.gold, 0);
        assert_eq!(state.player.floor, 1);
        assert_eq!(state.player.best_floor, 1);
        assert_eq!(state.monster.floor, 1);
        assert_eq!(state.monster.health, 1.0);
    }

    #[test]
    fn test_effective_stats_add_equipment() {
        let mut state = SessionState::default();
        state.inventory.weapon = Some(gear(
            1,
            ItemSlot::Weapon,
            ItemStats {
                attack: 25,
                defense: 0,
                health: 10,
            },
        ));
        state.inventory.armor = Some(gear(2, ItemSlot::Armor, ItemStats::defense(5)));
        let eff = state.effective_stats();
        assert_eq!(eff.attack, 125);
        assert_eq!(eff.defense, 5);
        assert_eq!(eff.max_health, 110);
        assert_eq!(eff.current_health, 110);
        // Base stats stay untouched
        assert_eq!(state.player.attack, 100);
        assert_eq!(state.player.max_health, 100);
    }

    #[test]
    fn test_effective_current_health_capped_at_raised_max() {
        let mut state = SessionState::default();
        state.player.current_health = 150;
        state.inventory.weapon = Some(gear(
            1,
            ItemSlot::Weapon,
            ItemStats {
                attack: 0,
                defense: 0,
                health: 20,
            },
        ));
        assert_eq!(state.effective_stats().current_health, 120);
    }

    #[test]
    fn test_get_state_resyncs_stale_monster() {
        let mut state = SessionState::default();
        state.player.floor = 42;
        let view = state.get_state();
        assert_eq!(view.monster.max_health, 42.0);
        assert_eq!(view.monster.current_health, 42.0);
        assert_eq!(state.monster.floor, 42);
    }

    #[test]
    fn test_get_state_keeps_same_floor_health() {
        let mut state = SessionState::default();
        state.player.floor = 50;
        state.monster = MonsterTracker {
            floor: 50,
            health: 12.5,
        };
        assert_eq!(state.get_state().monster.current_health, 12.5);
    }

    #[test]
    fn test_upgrade_attack_spends_gold() {
        let mut state = SessionState::default();
        state.player.gold = 10;
        let outcome = state.upgrade(UpgradeStat::Attack, 3);
        assert!(outcome.success, "{}", outcome.message);
        assert_eq!(outcome.spent_cost, Some(6));
        assert_eq!(outcome.next_costs.map(|c| c.attack), Some(4));
        assert_eq!(state.player.gold, 4);
        assert_eq!(state.player.attack, 103);
        assert_eq!(state.upgrades.attack, 3);
    }

    #[test]
    fn test_upgrade_insufficient_funds_mutates_nothing() {
        let mut state = SessionState::default();
        state.player.gold = 54;
        let before = (state.player, state.upgrades);
        let outcome = state.upgrade(UpgradeStat::Health, 10);
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Not enough gold: need 55, have 54.");
        assert!(outcome.spent_cost.is_none());
        assert_eq!((state.player, state.upgrades), before);
    }

    #[test]
    fn test_upgrade_zero_amount_buys_one() {
        let mut state = SessionState::default();
        state.player.gold = 1;
        let receipt = state.try_upgrade(UpgradeStat::Defense, 0).unwrap();
        assert_eq!(receipt.units, 1);
        assert_eq!(receipt.spent_cost, 1);
        assert_eq!(state.player.defense, 1);
    }

    #[test]
    fn test_upgrade_keeps_equipment_separate() {
        let mut state = SessionState::default();
        state.player.gold = 1;
        state.inventory.weapon = Some(gear(1, ItemSlot::Weapon, ItemStats::attack(25)));
        state.try_upgrade(UpgradeStat::Attack, 1).unwrap();
        assert_eq!(state.player.attack, 101);
        assert_eq!(state.effective_stats().attack, 126);
    }

    #[test]
    fn test_equip_outcome_messages() {
        let mut state = SessionState::default();
        state.inventory.file(gear(3, ItemSlot::Weapon, ItemStats::attack(2)));
        state.inventory.file(gear(4, ItemSlot::Material, ItemStats::NONE));

        let ok = state.equip(ItemId(3));
        assert!(ok.success);
        assert_eq!(ok.message, "Gear 3 equipped.");
        assert!(ok.inventory.is_some());

        let material = state.equip(ItemId(4));
        assert!(!material.success);
        assert!(material.inventory.is_none());

        let missing = state.equip(ItemId(99));
        assert!(!missing.success);
        assert_eq!(missing.message, "Item it-99 not found.");
    }

    #[test]
    fn test_reset_restores_defaults_but_keeps_id_sequence() {
        let mut state = SessionState::default();
        state.player.gold = 500;
        state.player.floor = 77;
        state.player.best_floor = 80;
        state.try_upgrade(UpgradeStat::Attack, 5).unwrap();
        let used = state.item_ids.allocate();
        state.inventory.file(gear(used.0, ItemSlot::Weapon, ItemStats::attack(2)));

        state.reset_session();

        assert_eq!(state.player, PlayerStats::new(&StartingStats::default()));
        assert_eq!(state.upgrades, UpgradeCounters::default());
        assert_eq!(state.inventory, Inventory::new());
        assert_eq!(state.monster, MonsterTracker::fresh(1));
        assert!(state.item_ids.allocate() > used);
    }

    #[test]
    fn test_outcome_json_omits_missing_fields() {
        let mut state = SessionState::default();
        let json = serde_json::to_value(state.upgrade(UpgradeStat::Attack, 1)).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("spentCost").is_none());
        assert!(json.get("nextCosts").is_none());
    }
}
