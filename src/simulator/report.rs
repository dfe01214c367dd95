//! Simulation report generation.

use super::loot_sim::LootStats;
use crate::core::scaling::zone_for_floor;
use crate::core::constants::ZONE_COUNT;
use crate::items::types::Rarity;
use serde::Serialize;

/// Outcome of one simulated run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub final_floor: u64,
    pub best_floor: u64,
    pub total_ticks: u64,
    pub victories: u64,
    pub boss_victories: u64,
    pub defeats: u64,
    pub gold_earned: u64,
    pub gold_spent: u64,
    pub items_equipped: u64,
    pub loot: LootStats,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub ticks_per_run: u64,

    pub avg_final_floor: f64,
    pub avg_best_floor: f64,
    pub max_best_floor: u64,
    pub avg_victories: f64,
    pub avg_boss_victories: f64,
    pub avg_defeats: f64,
    pub avg_gold_earned: f64,
    pub avg_gold_spent: f64,
    pub avg_items_equipped: f64,
    pub actual_drop_rate: f64,

    /// Average drops per run, in rarity order.
    pub avg_drops_by_rarity: Vec<(Rarity, f64)>,
    /// Runs whose best floor lies in each zone; index 0 is zone 1.
    pub best_zone_distribution: Vec<u32>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], value: impl Fn(&RunStats) -> u64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(|r| value(r) as f64).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, ticks_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;

        let avg_drops_by_rarity = Rarity::all()
            .into_iter()
            .map(|rarity| (rarity, average(&runs, |r| r.loot.drops_of(rarity))))
            .collect();

        let mut best_zone_distribution = vec![0; ZONE_COUNT as usize];
        for run in &runs {
            let zone = zone_for_floor(run.best_floor) as usize;
            best_zone_distribution[zone - 1] += 1;
        }

        let actual_drop_rate = if runs.is_empty() {
            0.0
        } else {
            runs.iter().map(|r| r.loot.drop_rate()).sum::<f64>() / runs.len() as f64
        };

        Self {
            num_runs,
            ticks_per_run,
            avg_final_floor: average(&runs, |r| r.final_floor),
            avg_best_floor: average(&runs, |r| r.best_floor),
            max_best_floor: runs.iter().map(|r| r.best_floor).max().unwrap_or(0),
            avg_victories: average(&runs, |r| r.victories),
            avg_boss_victories: average(&runs, |r| r.boss_victories),
            avg_defeats: average(&runs, |r| r.defeats),
            avg_gold_earned: average(&runs, |r| r.gold_earned),
            avg_gold_spent: average(&runs, |r| r.gold_spent),
            avg_items_equipped: average(&runs, |r| r.items_equipped),
            actual_drop_rate,
            avg_drops_by_rarity,
            best_zone_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, {} ticks each\n\n",
            self.num_runs, self.ticks_per_run
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Floor:     {:.1}\n", self.avg_final_floor));
        report.push_str(&format!("  Avg Best Floor:      {:.1}\n", self.avg_best_floor));
        report.push_str(&format!("  Max Best Floor:      {}\n", self.max_best_floor));
        report.push_str(&format!("  Avg Victories:       {:.0}\n", self.avg_victories));
        report.push_str(&format!("  Avg Boss Victories:  {:.1}\n", self.avg_boss_victories));
        report.push_str(&format!("  Avg Defeats:         {:.1}\n\n", self.avg_defeats));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Gold Earned:     {:.0}\n", self.avg_gold_earned));
        report.push_str(&format!("  Avg Gold Spent:      {:.0}\n\n", self.avg_gold_spent));

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Drops per Victory:   {:.2}%\n",
            self.actual_drop_rate * 100.0
        ));
        for (rarity, avg) in &self.avg_drops_by_rarity {
            report.push_str(&format!("  {:<10} {:>9.2}\n", rarity.name(), avg));
        }
        report.push_str(&format!(
            "  Avg Items Equipped:  {:.1}\n\n",
            self.avg_items_equipped
        ));

        report.push_str("── BEST ZONE REACHED ────────────────────────────────────────────\n");
        for (idx, runs) in self.best_zone_distribution.iter().enumerate() {
            let pct = if self.num_runs == 0 {
                0.0
            } else {
                (*runs as f64 / self.num_runs as f64) * 100.0
            };
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Zone {}: {:>5.1}% {}\n", idx + 1, pct, bar));
        }

        if self.avg_defeats > self.avg_victories {
            report.push_str("\n  ⚠️  More defeats than victories - runs stall on a wall\n");
        }
        if self.avg_boss_victories < 1.0 && self.avg_best_floor >= 100.0 {
            report.push_str("  ⚠️  First boss rarely cleared\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
