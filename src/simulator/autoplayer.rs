//! Greedy decision making for simulated runs.

use crate::core::economy::UpgradeStat;
use crate::core::session::{SessionState, UpgradeReceipt};
use crate::items::types::{ItemId, ItemSlot};

/// Plays a session the way an idle player would: wear the strongest gear,
/// spend gold on whatever is cheapest.
#[derive(Debug, Clone, Copy)]
pub struct AutoPlayer {
    pub upgrade: bool,
    pub equip: bool,
}

impl AutoPlayer {
    pub fn new(upgrade: bool, equip: bool) -> Self {
        Self { upgrade, equip }
    }

    /// Buys one unit of the cheapest stat if affordable. Ties go to attack,
    /// then defense, then health.
    pub fn buy_cheapest(&self, state: &mut SessionState) -> Option<UpgradeReceipt> {
        if !self.upgrade {
            return None;
        }
        let costs = state.upgrade_costs();
        let stat = [UpgradeStat::Attack, UpgradeStat::Defense, UpgradeStat::Health]
            .into_iter()
            .min_by_key(|stat| costs.get(*stat))?;
        state.try_upgrade(stat, 1).ok()
    }

    /// Equips bag items that beat what is worn by total stats. Returns how
    /// many items were equipped.
    pub fn equip_upgrades(&self, state: &mut SessionState) -> u32 {
        if !self.equip {
            return 0;
        }
        let mut equipped = 0;
        for slot in [ItemSlot::Weapon, ItemSlot::Armor] {
            if let Some(id) = best_upgrade(state, slot) {
                if state.try_equip(id).is_ok() {
                    equipped += 1;
                }
            }
        }
        equipped
    }
}

fn best_upgrade(state: &SessionState, slot: ItemSlot) -> Option<ItemId> {
    let worn = state
        .inventory
        .equipped(slot)
        .map(|item| item.stats.total())
        .unwrap_or(0);
    state
        .inventory
        .bag
        .iter()
        .filter(|item| item.slot == slot && item.stats.total() > worn)
        .max_by_key(|item| item.stats.total())
        .map(|item| item.id)
}
