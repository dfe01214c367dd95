//! The battle tick: one exchange of blows against the current floor's monster.

use super::combat_math::{is_alive, monster_hit_on_player, player_hit_on_monster};
use super::scaling::{is_boss_floor, monster_stats, zone_for_floor};
use super::session::{MonsterTracker, SessionState};
use crate::core::constants::STARTING_FLOOR;
use crate::items::drops::roll_drops;
use crate::items::tables::zone_table;
use crate::items::types::Item;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleStatus {
    Victory,
    Defeat,
    Ongoing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub status: BattleStatus,
    /// Gold awarded this tick. Zero unless the monster died.
    pub gold_earned: u64,
    pub new_floor: u64,
    pub best_floor: u64,
    /// Stored (base) current health after the tick.
    pub user_health: u64,
    pub monster_health: f64,
    pub drops: Vec<Item>,
    /// Floor the fight took place on.
    pub fought_floor: u64,
    pub was_boss: bool,
    pub damage_dealt: f64,
    /// Zero when the monster died before it could strike back.
    pub damage_taken: u64,
}

impl SessionState {
    /// Runs one battle tick.
    ///
    /// The player always strikes first. A killed monster never counterattacks;
    /// otherwise the monster hits back and the tick ends in defeat or
    /// ongoing combat.
    pub fn battle_tick(&mut self, rng: &mut impl Rng) -> BattleResult {
        let floor = self.player.floor;
        let monster = monster_stats(floor);
        let effective = self.effective_stats();
        let bonus_health = self.inventory.equipment_bonus().health;

        self.monster.resync(floor);

        let damage_dealt = player_hit_on_monster(effective.attack, monster.defense);
        let monster_health = self.monster.health - damage_dealt;

        if !is_alive(monster_health) {
            return self.resolve_victory(floor, damage_dealt, rng);
        }

        let damage_taken = monster_hit_on_player(monster.attack, effective.defense);
        let remaining = effective.current_health.saturating_sub(damage_taken);
        self.player.current_health = remaining.saturating_sub(bonus_health);

        if remaining == 0 {
            return self.resolve_defeat(floor, damage_dealt, damage_taken);
        }

        self.monster.health = monster_health;
        debug!(
            floor,
            monster_health,
            user_health = self.player.current_health,
            "battle ongoing"
        );
        BattleResult {
            status: BattleStatus::Ongoing,
            gold_earned: 0,
            new_floor: floor,
            best_floor: self.player.best_floor,
            user_health: self.player.current_health,
            monster_health,
            drops: Vec::new(),
            fought_floor: floor,
            was_boss: is_boss_floor(floor),
            damage_dealt,
            damage_taken,
        }
    }

    fn resolve_victory(
        &mut self,
        floor: u64,
        damage_dealt: f64,
        rng: &mut impl Rng,
    ) -> BattleResult {
        let gold_earned = floor;
        let was_boss = is_boss_floor(floor);

        self.player.gold = self.player.gold.saturating_add(gold_earned);
        self.player.floor = floor.saturating_add(1);
        self.player.best_floor = self.player.best_floor.max(self.player.floor);
        self.player.heal_full();
        self.monster = MonsterTracker::fresh(self.player.floor);

        let chances = self.config().drops;
        let table = zone_table(zone_for_floor(floor));
        let drops = roll_drops(table, was_boss, &chances, &mut self.item_ids, rng);
        self.inventory.file_drops(drops.iter().cloned());

        if was_boss {
            info!(floor, gold_earned, "boss defeated");
        } else {
            debug!(floor, gold_earned, "monster defeated");
        }
        for item in &drops {
            info!(
                item = %item.id,
                name = %item.name,
                rarity = item.rarity.name(),
                zone = item.zone,
                "item dropped"
            );
        }

        BattleResult {
            status: BattleStatus::Victory,
            gold_earned,
            new_floor: self.player.floor,
            best_floor: self.player.best_floor,
            user_health: self.player.current_health,
            monster_health: 0.0,
            drops,
            fought_floor: floor,
            was_boss,
            damage_dealt,
            damage_taken: 0,
        }
    }

    fn resolve_defeat(
        &mut self,
        floor: u64,
        damage_dealt: f64,
        damage_taken: u64,
    ) -> BattleResult {
        self.player.floor = STARTING_FLOOR;
        self.player.heal_full();
        self.monster = MonsterTracker::fresh(STARTING_FLOOR);

        debug!(floor, best_floor = self.player.best_floor, "player defeated");
        BattleResult {
            status: BattleStatus::Defeat,
            gold_earned: 0,
            new_floor: self.player.floor,
            best_floor: self.player.best_floor,
            user_health: self.player.current_health,
            monster_health: self.monster.health,
            drops: Vec::new(),
            fought_floor: floor,
            was_boss: is_boss_floor(floor),
            damage_dealt,
            damage_taken,
        }
    }
}
