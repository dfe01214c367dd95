use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSlot {
    Weapon,
    Armor,
    Material,
}

impl ItemSlot {
    pub fn name(&self) -> &'static str {
        match self {
            ItemSlot::Weapon => "Weapon",
            ItemSlot::Armor => "Armor",
            ItemSlot::Material => "Material",
        }
    }

    pub fn is_equippable(&self) -> bool {
        !matches!(self, ItemSlot::Material)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
    Epic,
    Mystic,
    Primal,
    Special,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Epic => "Epic",
            Rarity::Mystic => "Mystic",
            Rarity::Primal => "Primal",
            Rarity::Special => "Special",
        }
    }

    pub fn all() -> [Rarity; 7] {
        [
            Rarity::Common,
            Rarity::Rare,
            Rarity::Legendary,
            Rarity::Epic,
            Rarity::Mystic,
            Rarity::Primal,
            Rarity::Special,
        ]
    }
}

/// Flat stat contribution of an item. Absent fields count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStats {
    pub attack: u64,
    pub defense: u64,
    pub health: u64,
}

impl ItemStats {
    pub const NONE: ItemStats = ItemStats {
        attack: 0,
        defense: 0,
        health: 0,
    };

    pub const fn attack(attack: u64) -> Self {
        Self {
            attack,
            defense: 0,
            health: 0,
        }
    }

    pub const fn defense(defense: u64) -> Self {
        Self {
            attack: 0,
            defense,
            health: 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.attack + self.defense + self.health
    }

    pub fn combined(self, other: ItemStats) -> ItemStats {
        ItemStats {
            attack: self.attack.saturating_add(other.attack),
            defense: self.defense.saturating_add(other.defense),
            health: self.health.saturating_add(other.health),
        }
    }

    /// Short stat summary like `ATK +25 DEF +5`. Empty for stat-less items.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = [("ATK", self.attack), ("DEF", self.defense), ("HP", self.health)]
            .into_iter()
            .filter(|(_, value)| *value > 0)
            .map(|(label, value)| format!("{label} +{value}"))
            .collect();
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "it-{}", self.0)
    }
}

/// Hands out item ids, strictly increasing for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemIdAllocator {
    next: u64,
}

impl ItemIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}

impl Default for ItemIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub slot: ItemSlot,
    pub rarity: Rarity,
    pub stats: ItemStats,
    pub zone: u8,
}
