//! Terminal client state: the session plus everything only the UI cares about.

use chrono::{DateTime, Local};
use climber::core::constants::{BATTLE_LOG_CAPACITY, UPGRADE_BATCH_SIZES};
use climber::core::{BattleResult, BattleStatus, SessionState, UpgradeStat};
use climber::items::Item;
use climber::EngineConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Victory,
    BossVictory,
    Defeat,
    Hit,
    Loot,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub kind: LogKind,
    pub message: String,
}

pub struct App {
    pub session: SessionState,
    rng: StdRng,
    pub auto_battle: bool,
    auto_interval: Duration,
    last_auto_tick: Instant,
    /// Index into `UPGRADE_BATCH_SIZES`.
    batch_index: usize,
    /// Cursor over `selectable_items()`.
    pub selected: usize,
    pub log: VecDeque<LogEntry>,
}

impl App {
    pub fn new(config: EngineConfig) -> Self {
        let auto_interval = Duration::from_millis(config.auto_battle_interval_ms);
        let mut app = Self {
            session: SessionState::new(config),
            rng: StdRng::from_entropy(),
            auto_battle: false,
            auto_interval,
            last_auto_tick: Instant::now(),
            batch_index: 0,
            selected: 0,
            log: VecDeque::with_capacity(BATTLE_LOG_CAPACITY),
        };
        app.push_log(LogKind::Info, "Press space to start auto-battle.".to_string());
        app
    }

    pub fn push_log(&mut self, kind: LogKind, message: String) {
        if self.log.len() >= BATTLE_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(LogEntry {
            timestamp: Local::now(),
            kind,
            message,
        });
    }

    pub fn batch_size(&self) -> u64 {
        UPGRADE_BATCH_SIZES[self.batch_index]
    }

    pub fn cycle_batch(&mut self) {
        self.batch_index = (self.batch_index + 1) % UPGRADE_BATCH_SIZES.len();
    }

    pub fn toggle_auto(&mut self) {
        self.auto_battle = !self.auto_battle;
        self.last_auto_tick = Instant::now();
        let state = if self.auto_battle { "on" } else { "off" };
        self.push_log(LogKind::Info, format!("Auto-battle {state}."));
    }

    /// Runs a tick when auto-battle is on and the interval elapsed.
    pub fn on_frame(&mut self, now: Instant) {
        if self.auto_battle && now.duration_since(self.last_auto_tick) >= self.auto_interval {
            self.last_auto_tick = now;
            self.battle_once();
        }
    }

    pub fn battle_once(&mut self) -> BattleResult {
        let result = self.session.battle_tick(&mut self.rng);
        let (kind, message) = describe_result(&result);
        self.push_log(kind, message);
        for item in &result.drops {
            self.push_log(LogKind::Loot, describe_drop(item));
        }
        result
    }

    pub fn upgrade(&mut self, stat: UpgradeStat) {
        let outcome = self.session.upgrade(stat, self.batch_size());
        let kind = if outcome.success {
            LogKind::Info
        } else {
            LogKind::Error
        };
        self.push_log(kind, outcome.message);
    }

    /// Bag items first, then materials.
    pub fn selectable_items(&self) -> Vec<&Item> {
        let inventory = self.session.inventory();
        inventory
            .bag
            .iter()
            .chain(inventory.materials.iter())
            .collect()
    }

    pub fn select_next(&mut self) {
        let len = self.selectable_items().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn equip_selected(&mut self) {
        let Some(id) = self.selectable_items().get(self.selected).map(|item| item.id) else {
            self.push_log(LogKind::Error, "Nothing selected.".to_string());
            return;
        };
        let outcome = self.session.equip(id);
        let kind = if outcome.success {
            LogKind::Info
        } else {
            LogKind::Error
        };
        self.push_log(kind, outcome.message);
    }

    pub fn reset(&mut self) {
        self.session.reset_session();
        self.selected = 0;
        self.auto_battle = false;
        self.push_log(LogKind::Info, "Game has been reset.".to_string());
    }
}

pub fn describe_result(result: &BattleResult) -> (LogKind, String) {
    match result.status {
        BattleStatus::Victory if result.was_boss => (
            LogKind::BossVictory,
            format!(
                "Boss of floor {} defeated! +{} gold",
                result.fought_floor, result.gold_earned
            ),
        ),
        BattleStatus::Victory => (
            LogKind::Victory,
            format!(
                "Floor {} cleared. +{} gold",
                result.fought_floor, result.gold_earned
            ),
        ),
        BattleStatus::Defeat => (
            LogKind::Defeat,
            format!(
                "Defeated on floor {}. Back to floor 1.",
                result.fought_floor
            ),
        ),
        BattleStatus::Ongoing => (
            LogKind::Hit,
            format!(
                "Hit for {:.0}, took {}. Monster HP {:.0}",
                result.damage_dealt, result.damage_taken, result.monster_health
            ),
        ),
    }
}

pub fn describe_drop(item: &Item) -> String {
    let stats = item.stats.summary();
    if stats.is_empty() {
        format!("Found [{}] {}", item.rarity.name(), item.name)
    } else {
        format!("Found [{}] {} ({})", item.rarity.name(), item.name, stats)
    }
}
