//! Loot rolling: drop eligibility, weighted rarity, template pick, shard roll.

use super::tables::{ItemTemplate, ZoneTable};
use super::types::{Item, ItemIdAllocator, ItemSlot, ItemStats, Rarity};
use crate::core::constants::{BOSS_ITEM_DROP_CHANCE, ITEM_DROP_CHANCE, SHARD_ITEM_NAME};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Drop probabilities applied after a victory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropChances {
    /// Chance that a normal monster drops anything.
    pub normal_chance: f64,
    /// Chance that a boss drops anything.
    pub boss_chance: f64,
    /// Replaces every zone's own shard chance when set.
    pub shard_chance_override: Option<f64>,
}

impl DropChances {
    pub fn eligibility(&self, is_boss: bool) -> f64 {
        if is_boss {
            self.boss_chance
        } else {
            self.normal_chance
        }
    }

    pub fn shard_chance(&self, table: &ZoneTable) -> f64 {
        self.shard_chance_override.unwrap_or(table.shard_chance)
    }
}

impl Default for DropChances {
    fn default() -> Self {
        Self {
            normal_chance: ITEM_DROP_CHANCE,
            boss_chance: BOSS_ITEM_DROP_CHANCE,
            shard_chance_override: None,
        }
    }
}

/// Walks `entries` accumulating weight and returns the first entry whose
/// cumulative weight reaches `draw`. Falls back to the last entry when the
/// draw runs past the end (float rounding), and `None` only for an empty list.
pub fn pick_by_cumulative<T>(entries: &[T], weight: impl Fn(&T) -> f64, draw: f64) -> Option<&T> {
    let mut accumulated = 0.0;
    for entry in entries {
        accumulated += weight(entry);
        if draw <= accumulated {
            return Some(entry);
        }
    }
    entries.last()
}

/// Weighted random pick: uniform draw in `[0, total)` then a cumulative scan.
pub fn weighted_pick<'a, T>(
    entries: &'a [T],
    weight: impl Fn(&T) -> f64,
    rng: &mut impl Rng,
) -> Option<&'a T> {
    let total: f64 = entries.iter().map(&weight).sum();
    let draw = if total > 0.0 {
        rng.gen::<f64>() * total
    } else {
        0.0
    };
    pick_by_cumulative(entries, weight, draw)
}

pub fn roll_rarity(table: &ZoneTable, rng: &mut impl Rng) -> Rarity {
    weighted_pick(table.rarity_weights, |entry| entry.weight, rng)
        .map(|entry| entry.rarity)
        .unwrap_or(Rarity::Common)
}

pub fn create_item(
    template: &ItemTemplate,
    rarity: Rarity,
    zone: u8,
    ids: &mut ItemIdAllocator,
) -> Item {
    Item {
        id: ids.allocate(),
        name: template.name.to_string(),
        slot: template.slot,
        rarity,
        stats: template.stats,
        zone,
    }
}

pub fn create_shard(zone: u8, ids: &mut ItemIdAllocator) -> Item {
    let template = ItemTemplate {
        name: SHARD_ITEM_NAME,
        slot: ItemSlot::Material,
        stats: ItemStats::NONE,
    };
    create_item(&template, Rarity::Special, zone, ids)
}

/// Primary roll: weighted rarity, then a uniform pick from that rarity's pool.
/// An empty pool yields nothing.
pub fn roll_primary_item(
    table: &ZoneTable,
    ids: &mut ItemIdAllocator,
    rng: &mut impl Rng,
) -> Option<Item> {
    let rarity = roll_rarity(table, rng);
    let pool = table.templates(rarity);
    if pool.is_empty() {
        return None;
    }
    let template = &pool[rng.gen_range(0..pool.len())];
    Some(create_item(template, rarity, table.zone, ids))
}

/// Rolls the loot of one victory. Yields 0, 1, or 2 items.
///
/// The shard roll is independent of the primary roll; both only happen once
/// the eligibility check passes.
pub fn roll_drops(
    table: &ZoneTable,
    is_boss: bool,
    chances: &DropChances,
    ids: &mut ItemIdAllocator,
    rng: &mut impl Rng,
) -> Vec<Item> {
    let mut drops = Vec::new();
    if rng.gen::<f64>() >= chances.eligibility(is_boss) {
        return drops;
    }

    if let Some(item) = roll_primary_item(table, ids, rng) {
        drops.push(item);
    }

    if rng.gen::<f64>() < chances.shard_chance(table) {
        drops.push(create_shard(table.zone, ids));
    }

    drops
}
