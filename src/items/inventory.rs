use super::types::{Item, ItemId, ItemSlot, ItemStats};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Equipped gear plus everything carried but not worn.
///
/// `bag` only ever holds weapons and armor, `materials` only materials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub materials: Vec<Item>,
    pub bag: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a drop: materials to `materials`, gear to `bag`. Never auto-equips.
    pub fn file(&mut self, item: Item) {
        match item.slot {
            ItemSlot::Material => self.materials.push(item),
            ItemSlot::Weapon | ItemSlot::Armor => self.bag.push(item),
        }
    }

    pub fn file_drops(&mut self, drops: impl IntoIterator<Item = Item>) {
        for item in drops {
            self.file(item);
        }
    }

    /// Looks an item up in bag, then materials, then the equipped weapon, then armor.
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.bag
            .iter()
            .chain(self.materials.iter())
            .chain(self.weapon.iter())
            .chain(self.armor.iter())
            .find(|item| item.id == id)
    }

    pub fn equipped(&self, slot: ItemSlot) -> Option<&Item> {
        match slot {
            ItemSlot::Weapon => self.weapon.as_ref(),
            ItemSlot::Armor => self.armor.as_ref(),
            ItemSlot::Material => None,
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }

    /// Sum of the equipped weapon's and armor's stats.
    pub fn equipment_bonus(&self) -> ItemStats {
        self.iter_equipped()
            .fold(ItemStats::NONE, |acc, item| acc.combined(item.stats))
    }

    /// Equips the item with `id` into its slot.
    ///
    /// The previously equipped item in that slot is replaced and dropped, not
    /// returned to the bag. The bag keeps its copy of the newly equipped item.
    pub fn equip(&mut self, id: ItemId) -> Result<&Item, EngineError> {
        let item = self.find(id).cloned().ok_or(EngineError::ItemNotFound(id))?;
        match item.slot {
            ItemSlot::Weapon => Ok(&*self.weapon.insert(item)),
            ItemSlot::Armor => Ok(&*self.armor.insert(item)),
            ItemSlot::Material => Err(EngineError::InvalidSlotForEquip { name: item.name }),
        }
    }

    pub fn item_count(&self) -> usize {
        self.bag.len() + self.materials.len() + self.iter_equipped().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::Rarity;

    fn item(id: u64, slot: ItemSlot, stats: ItemStats) -> Item {
        Item {
            id: ItemId(id),
            name: format!("Test {id}"),
            slot,
            rarity: Rarity::Common,
            stats,
            zone: 1,
        }
    }

    #[test]
    fn test_inventory_starts_empty() {
        let inv = Inventory::new();
        assert!(inv.weapon.is_none());
        assert!(inv.armor.is_none());
        assert_eq!(inv.item_count(), 0);
        assert_eq!(inv.equipment_bonus(), ItemStats::NONE);
    }

    #[test]
    fn test_filing_routes_by_slot() {
        let mut inv = Inventory::new();
        inv.file_drops([
            item(1, ItemSlot::Weapon, ItemStats::attack(2)),
            item(2, ItemSlot::Material, ItemStats::NONE),
            item(3, ItemSlot::Armor, ItemStats::defense(2)),
        ]);
        assert_eq!(inv.bag.len(), 2);
        assert_eq!(inv.materials.len(), 1);
        assert!(inv.weapon.is_none(), "drops must not auto-equip");
        assert!(inv.bag.iter().all(|i| i.slot != ItemSlot::Material));
    }

    #[test]
    fn test_equip_weapon_from_bag() {
        let mut inv = Inventory::new();
        inv.file(item(1, ItemSlot::Weapon, ItemStats::attack(5)));
        let equipped = inv.equip(ItemId(1)).unwrap();
        assert_eq!(equipped.id, ItemId(1));
        assert_eq!(inv.weapon.as_ref().map(|i| i.id), Some(ItemId(1)));
        assert_eq!(inv.equipment_bonus().attack, 5);
    }

    #[test]
    fn test_equip_replaces_and_discards_previous() {
        let mut inv = Inventory::new();
        inv.file(item(1, ItemSlot::Armor, ItemStats::defense(2)));
        inv.file(item(2, ItemSlot::Armor, ItemStats::defense(9)));
        inv.equip(ItemId(1)).unwrap();
        inv.equip(ItemId(2)).unwrap();
        assert_eq!(inv.armor.as_ref().map(|i| i.id), Some(ItemId(2)));
        assert_eq!(inv.equipment_bonus().defense, 9);
    }

    #[test]
    fn test_equip_same_id_twice_is_noop() {
        let mut inv = Inventory::new();
        inv.file(item(4, ItemSlot::Weapon, ItemStats::attack(3)));
        inv.equip(ItemId(4)).unwrap();
        let before = inv.clone();
        inv.equip(ItemId(4)).unwrap();
        assert_eq!(inv, before);
    }

    #[test]
    fn test_equip_finds_currently_equipped_item() {
        let mut inv = Inventory::new();
        inv.weapon = Some(item(8, ItemSlot::Weapon, ItemStats::attack(1)));
        assert!(inv.equip(ItemId(8)).is_ok());
    }

    #[test]
    fn test_equip_material_rejected_without_mutation() {
        let mut inv = Inventory::new();
        inv.file(item(5, ItemSlot::Material, ItemStats::attack(100)));
        let before = inv.clone();
        let err = inv.equip(ItemId(5)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSlotForEquip { .. }));
        assert_eq!(inv, before);
    }

    #[test]
    fn test_equip_unknown_id() {
        let mut inv = Inventory::new();
        let err = inv.equip(ItemId(42)).unwrap_err();
        assert_eq!(err, EngineError::ItemNotFound(ItemId(42)));
    }

    #[test]
    fn test_bonus_sums_weapon_and_armor() {
        let mut inv = Inventory::new();
        inv.weapon = Some(item(
            1,
            ItemSlot::Weapon,
            ItemStats {
                attack: 10,
                defense: 1,
                health: 4,
            },
        ));
        inv.armor = Some(item(
            2,
            ItemSlot::Armor,
            ItemStats {
                attack: 0,
                defense: 7,
                health: 6,
            },
        ));
        let bonus = inv.equipment_bonus();
        assert_eq!(bonus.attack, 10);
        assert_eq!(bonus.defense, 8);
        assert_eq!(bonus.health, 10);
    }
}
