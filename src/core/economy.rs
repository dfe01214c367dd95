//! Upgrade economy: linear unit cost, arithmetic-series bulk cost.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A purchasable base stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeStat {
    Health,
    Attack,
    Defense,
}

impl UpgradeStat {
    pub fn all() -> [UpgradeStat; 3] {
        [UpgradeStat::Health, UpgradeStat::Attack, UpgradeStat::Defense]
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeStat::Health => "Health",
            UpgradeStat::Attack => "Attack",
            UpgradeStat::Defense => "Defense",
        }
    }
}

impl fmt::Display for UpgradeStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Units bought so far, per stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeCounters {
    pub health: u64,
    pub attack: u64,
    pub defense: u64,
}

impl UpgradeCounters {
    pub fn get(&self, stat: UpgradeStat) -> u64 {
        match stat {
            UpgradeStat::Health => self.health,
            UpgradeStat::Attack => self.attack,
            UpgradeStat::Defense => self.defense,
        }
    }

    pub fn advance(&mut self, stat: UpgradeStat, units: u64) {
        let counter = match stat {
            UpgradeStat::Health => &mut self.health,
            UpgradeStat::Attack => &mut self.attack,
            UpgradeStat::Defense => &mut self.defense,
        };
        *counter = counter.saturating_add(units);
    }

    /// Price of the next single unit of `stat`.
    pub fn unit_cost(&self, stat: UpgradeStat) -> u64 {
        self.get(stat).saturating_add(1)
    }

    /// Price of the next `units` units of `stat` bought together.
    pub fn bulk_cost(&self, stat: UpgradeStat, units: u64) -> u64 {
        series_sum(self.unit_cost(stat), units.max(1))
    }

    pub fn next_costs(&self) -> UpgradeCosts {
        UpgradeCosts {
            health: self.unit_cost(UpgradeStat::Health),
            attack: self.unit_cost(UpgradeStat::Attack),
            defense: self.unit_cost(UpgradeStat::Defense),
        }
    }
}

/// Next single-unit price per stat, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpgradeCosts {
    pub health: u64,
    pub attack: u64,
    pub defense: u64,
}

impl UpgradeCosts {
    pub fn get(&self, stat: UpgradeStat) -> u64 {
        match stat {
            UpgradeStat::Health => self.health,
            UpgradeStat::Attack => self.attack,
            UpgradeStat::Defense => self.defense,
        }
    }
}

/// Sum of `count` consecutive integers starting at `start`.
///
/// Saturates at `u64::MAX`, which no gold balance can afford.
pub fn series_sum(start: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    let start = start as u128;
    let count = count as u128;
    (2 * start + count - 1)
        .checked_mul(count)
        .and_then(|doubled| u64::try_from(doubled / 2).ok())
        .unwrap_or(u64::MAX)
}

/// Turns a raw requested amount into a unit count: floored, at least 1.
pub fn normalize_amount(raw: f64) -> u64 {
    if raw.is_nan() || raw < 1.0 {
        1
    } else {
        raw.floor().min(u64::MAX as f64) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cost_starts_at_one() {
        let counters = UpgradeCounters::default();
        for stat in UpgradeStat::all() {
            assert_eq!(counters.unit_cost(stat), 1);
        }
    }

    #[test]
    fn test_bulk_cost_examples() {
        let counters = UpgradeCounters::default();
        assert_eq!(counters.bulk_cost(UpgradeStat::Attack, 1), 1);
        assert_eq!(counters.bulk_cost(UpgradeStat::Attack, 10), 55);
        assert_eq!(counters.bulk_cost(UpgradeStat::Attack, 100), 5050);
    }

    #[test]
    fn test_bulk_cost_matches_unit_by_unit_sum() {
        let mut counters = UpgradeCounters::default();
        counters.advance(UpgradeStat::Defense, 17);
        for n in 1..=40 {
            let expected: u64 = (0..n).map(|i| 1 + 17 + i).sum();
            assert_eq!(counters.bulk_cost(UpgradeStat::Defense, n), expected, "n={n}");
        }
    }

    #[test]
    fn test_counters_are_per_stat() {
        let mut counters = UpgradeCounters::default();
        counters.advance(UpgradeStat::Health, 10);
        assert_eq!(counters.unit_cost(UpgradeStat::Health), 11);
        assert_eq!(counters.unit_cost(UpgradeStat::Attack), 1);
        assert_eq!(counters.unit_cost(UpgradeStat::Defense), 1);
    }

    #[test]
    fn test_zero_units_priced_as_one() {
        let counters = UpgradeCounters::default();
        assert_eq!(counters.bulk_cost(UpgradeStat::Health, 0), 1);
    }

    #[test]
    fn test_series_sum_saturates() {
        assert_eq!(series_sum(u64::MAX, u64::MAX), u64::MAX);
        assert_eq!(series_sum(11, 10), 155);
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(normalize_amount(10.0), 10);
        assert_eq!(normalize_amount(2.9), 2);
        assert_eq!(normalize_amount(0.0), 1);
        assert_eq!(normalize_amount(-5.0), 1);
        assert_eq!(normalize_amount(0.4), 1);
        assert_eq!(normalize_amount(f64::NAN), 1);
    }

    #[test]
    fn test_stat_serializes_lowercase() {
        let json = serde_json::to_string(&UpgradeStat::Defense).unwrap();
        assert_eq!(json, "\"defense\"");
        let parsed: UpgradeStat = serde_json::from_str("\"health\"").unwrap();
        assert_eq!(parsed, UpgradeStat::Health);
    }
}
