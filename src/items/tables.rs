//! Per-zone loot tables: rarity weights, item templates, shard chance.
//!
//! Static data, built at compile time. Every rarity has a pool in every zone,
//! even if it is empty, so lookups never miss.

use super::types::{ItemSlot, ItemStats, Rarity};
use crate::core::constants::ZONE_COUNT;

/// Blueprint for a droppable item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub slot: ItemSlot,
    pub stats: ItemStats,
}

const fn weapon(name: &'static str, attack: u64) -> ItemTemplate {
    ItemTemplate {
        name,
        slot: ItemSlot::Weapon,
        stats: ItemStats::attack(attack),
    }
}

const fn armor(name: &'static str, defense: u64) -> ItemTemplate {
    ItemTemplate {
        name,
        slot: ItemSlot::Armor,
        stats: ItemStats::defense(defense),
    }
}

const fn material(name: &'static str, stats: ItemStats) -> ItemTemplate {
    ItemTemplate {
        name,
        slot: ItemSlot::Material,
        stats,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityWeight {
    pub rarity: Rarity,
    pub weight: f64,
}

const fn w(rarity: Rarity, weight: f64) -> RarityWeight {
    RarityWeight { rarity, weight }
}

/// Template pools keyed by rarity.
#[derive(Debug, Clone, Copy)]
pub struct RarityPools {
    pub common: &'static [ItemTemplate],
    pub rare: &'static [ItemTemplate],
    pub legendary: &'static [ItemTemplate],
    pub epic: &'static [ItemTemplate],
    pub mystic: &'static [ItemTemplate],
    pub primal: &'static [ItemTemplate],
    pub special: &'static [ItemTemplate],
}

impl RarityPools {
    pub const EMPTY: RarityPools = RarityPools {
        common: &[],
        rare: &[],
        legendary: &[],
        epic: &[],
        mystic: &[],
        primal: &[],
        special: &[],
    };

    pub fn get(&self, rarity: Rarity) -> &'static [ItemTemplate] {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Legendary => self.legendary,
            Rarity::Epic => self.epic,
            Rarity::Mystic => self.mystic,
            Rarity::Primal => self.primal,
            Rarity::Special => self.special,
        }
    }
}

/// Loot rules for one zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneTable {
    pub zone: u8,
    pub rarity_weights: &'static [RarityWeight],
    /// Chance of the independent Rift Shard roll (0.0005 = 0.05%).
    pub shard_chance: f64,
    pub pools: RarityPools,
}

impl ZoneTable {
    pub fn total_weight(&self) -> f64 {
        self.rarity_weights.iter().map(|entry| entry.weight).sum()
    }

    pub fn templates(&self, rarity: Rarity) -> &'static [ItemTemplate] {
        self.pools.get(rarity)
    }
}

pub static ZONE_TABLES: [ZoneTable; ZONE_COUNT as usize] = [
    ZoneTable {
        zone: 1,
        rarity_weights: &[w(Rarity::Common, 97.9), w(Rarity::Rare, 2.0)],
        shard_chance: 0.0005,
        pools: RarityPools {
            common: &[
                weapon("Worn Dagger", 2),
                armor("Leather Armor", 2),
                weapon("Wooden Bow", 2),
                armor("Tattered Cloak", 2),
            ],
            rare: &[
                weapon("Steel Sword", 5),
                armor("Plate Armor", 5),
                weapon("Reinforced Bow", 5),
                armor("Leather Cloak", 5),
            ],
            ..RarityPools::EMPTY
        },
    },
    ZoneTable {
        zone: 2,
        rarity_weights: &[
            w(Rarity::Common, 89.9),
            w(Rarity::Rare, 9.0),
            w(Rarity::Legendary, 1.0),
        ],
        shard_chance: 0.001,
        pools: RarityPools {
            common: &[weapon("Sturdy Axe", 8), armor("Thick Leather Armor", 8)],
            rare: &[weapon("Fine Sword", 14), armor("Reinforced Plate", 14)],
            legendary: &[
                weapon("Dragonslayer Greatsword", 25),
                armor("Guardian's Harness", 25),
                weapon("Dragon Hunter's Bow", 25),
                armor("Knight's Cloak", 25),
            ],
            ..RarityPools::EMPTY
        },
    },
    ZoneTable {
        zone: 3,
        rarity_weights: &[
            w(Rarity::Common, 77.9),
            w(Rarity::Rare, 16.0),
            w(Rarity::Legendary, 5.5),
            w(Rarity::Epic, 0.5),
        ],
        shard_chance: 0.001,
        pools: RarityPools {
            common: &[
                weapon("Balanced Longsword", 35),
                armor("Sturdy Breastplate", 35),
            ],
            rare: &[weapon("Assassin's Blade", 45), armor("Augmented Harness", 45)],
            legendary: &[
                weapon("Magma Claymore", 65),
                armor("Frostbound Breastplate", 65),
            ],
            epic: &[
                weapon("Sovereign's Longsword", 90),
                armor("Aeon Breastplate", 90),
                weapon("Sovereign's Composite Bow", 90),
                armor("Aeon Mantle", 90),
            ],
            ..RarityPools::EMPTY
        },
    },
    ZoneTable {
        zone: 4,
        rarity_weights: &[
            w(Rarity::Common, 64.9),
            w(Rarity::Rare, 25.0),
            w(Rarity::Legendary, 9.0),
            w(Rarity::Epic, 0.98),
            w(Rarity::Mystic, 0.03),
        ],
        shard_chance: 0.001,
        pools: RarityPools {
            common: &[
                weapon("Balanced Greatsword", 120),
                armor("Steelscale Armor", 120),
            ],
            rare: &[weapon("Storm Longsword", 150), armor("Storm Harness", 150)],
            legendary: &[
                weapon("Solar Claymore", 200),
                armor("Moonlit Breastplate", 200),
            ],
            epic: &[
                weapon("Sovereign's Spear", 260),
                armor("Sovereign's Harness", 260),
            ],
            mystic: &[
                weapon("Eye of the Typhoon", 400),
                armor("Tempest Cloak", 400),
                material("Primordial Fragment", ItemStats::NONE),
                material("Heart of the World Tree", ItemStats::NONE),
            ],
            ..RarityPools::EMPTY
        },
    },
    ZoneTable {
        zone: 5,
        rarity_weights: &[
            w(Rarity::Common, 59.94995),
            w(Rarity::Rare, 28.0),
            w(Rarity::Legendary, 11.0),
            w(Rarity::Epic, 1.02995),
            w(Rarity::Mystic, 0.02),
            w(Rarity::Primal, 0.000001),
        ],
        shard_chance: 0.001,
        pools: RarityPools {
            common: &[
                weapon("Balanced Longsword+", 320),
                armor("Steelscale Armor+", 320),
            ],
            rare: &[weapon("Storm Longsword+", 380), armor("Storm Harness+", 380)],
            legendary: &[
                weapon("Solar Claymore+", 480),
                armor("Moonlit Breastplate+", 480),
            ],
            epic: &[
                weapon("Sovereign's Spear+", 600),
                armor("Sovereign's Harness+", 600),
            ],
            mystic: &[
                weapon("Eye of the Typhoon+", 900),
                armor("Tempest Cloak+", 900),
            ],
            primal: &[weapon("Primal Blade", 1500), armor("Primal Bulwark", 1500)],
            ..RarityPools::EMPTY
        },
    },
    ZoneTable {
        zone: 6,
        rarity_weights: &[
            w(Rarity::Common, 49.1995),
            w(Rarity::Rare, 30.0),
            w(Rarity::Legendary, 13.0),
            w(Rarity::Epic, 1.9),
            w(Rarity::Mystic, 0.16),
            w(Rarity::Primal, 0.00001),
        ],
        shard_chance: 0.002,
        pools: RarityPools {
            common: &[
                weapon("Balanced Longsword++", 600),
                armor("Steelscale Armor++", 600),
            ],
            rare: &[
                weapon("Storm Longsword++", 750),
                armor("Storm Harness++", 750),
            ],
            legendary: &[
                weapon("Solar Claymore++", 1000),
                armor("Moonlit Breastplate++", 1000),
            ],
            epic: &[
                weapon("Sovereign's Spear++", 1300),
                armor("Sovereign's Harness++", 1300),
            ],
            mystic: &[
                weapon("Eye of the Typhoon++", 1800),
                armor("Tempest Cloak++", 1800),
            ],
            primal: &[
                weapon("Primal Blade+", 2500),
                armor("Primal Bulwark+", 2500),
                material("Primal Accessory: Strength", ItemStats::attack(100)),
            ],
            ..RarityPools::EMPTY
        },
    },
];

/// Loot table for a zone id. Out-of-range ids clamp to the nearest zone.
pub fn zone_table(zone: u8) -> &'static ZoneTable {
    let idx = zone.clamp(1, ZONE_COUNT) as usize - 1;
    &ZONE_TABLES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_tables_are_in_order() {
        for (idx, table) in ZONE_TABLES.iter().enumerate() {
            assert_eq!(table.zone as usize, idx + 1);
            assert_eq!(zone_table(table.zone).zone, table.zone);
        }
    }

    #[test]
    fn test_zone_table_clamps() {
        assert_eq!(zone_table(0).zone, 1);
        assert_eq!(zone_table(99).zone, 6);
    }

    #[test]
    fn test_every_weighted_rarity_has_templates() {
        for table in &ZONE_TABLES {
            for entry in table.rarity_weights {
                assert!(
                    !table.templates(entry.rarity).is_empty(),
                    "zone {} rarity {:?} has no templates",
                    table.zone,
                    entry.rarity
                );
            }
        }
    }

    #[test]
    fn test_weights_are_positive_and_bounded() {
        for table in &ZONE_TABLES {
            let total = table.total_weight();
            assert!(
                total > 0.0 && total <= 100.0,
                "zone {} weights sum to {total}",
                table.zone
            );
        }
    }

    #[test]
    fn test_special_pool_is_empty_everywhere() {
        // Special items only come from the shard roll
        for table in &ZONE_TABLES {
            assert!(table.templates(Rarity::Special).is_empty());
        }
    }

    #[test]
    fn test_shard_chances() {
        assert_eq!(zone_table(1).shard_chance, 0.0005);
        assert_eq!(zone_table(3).shard_chance, 0.001);
        assert_eq!(zone_table(6).shard_chance, 0.002);
    }

    #[test]
    fn test_weapons_give_attack_and_armor_gives_defense() {
        for table in &ZONE_TABLES {
            for rarity in Rarity::all() {
                for template in table.templates(rarity) {
                    match template.slot {
                        ItemSlot::Weapon => assert!(template.stats.attack > 0, "{}", template.name),
                        ItemSlot::Armor => assert!(template.stats.defense > 0, "{}", template.name),
                        ItemSlot::Material => {}
                    }
                }
            }
        }
    }
}
