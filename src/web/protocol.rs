//! JSON command protocol shared by every remote client.
//!
//! Commands are tagged with `op`, responses with `type`:
//!
//! ```json
//! {"op": "upgrade", "stat": "attack", "amount": 10}
//! {"type": "upgrade", "success": true, "message": "Attack increased by 10.", ...}
//! ```

use crate::core::economy::{normalize_amount, UpgradeStat};
use crate::core::{BattleResult, EquipOutcome, GameStateView, SessionState, UpgradeOutcome};
use crate::items::inventory::Inventory;
use crate::items::types::ItemId;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Command {
    State,
    Battle,
    Upgrade {
        stat: UpgradeStat,
        /// Raw JSON number; normalized to a whole unit count of at least 1.
        #[serde(default)]
        amount: Option<f64>,
    },
    Equip {
        #[serde(rename = "itemId")]
        item_id: ItemId,
    },
    Reset,
    Inventory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Response {
    State(GameStateView),
    Battle(BattleResult),
    Upgrade(UpgradeOutcome),
    Equip(EquipOutcome),
    Reset { message: String },
    Inventory(Inventory),
    Error { message: String },
}

/// A session plus the randomness driving its battles.
pub struct Session {
    pub state: SessionState,
    rng: StdRng,
}

impl Session {
    pub fn new(state: SessionState) -> Self {
        Self {
            state,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic loot, for tests and replays.
    pub fn with_seed(state: SessionState, seed: u64) -> Self {
        Self {
            state,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

pub fn parse_command(text: &str) -> Result<Command, serde_json::Error> {
    serde_json::from_str(text)
}

pub fn dispatch(session: &mut Session, command: Command) -> Response {
    match command {
        Command::State => Response::State(session.state.get_state()),
        Command::Battle => Response::Battle(session.state.battle_tick(&mut session.rng)),
        Command::Upgrade { stat, amount } => {
            let units = normalize_amount(amount.unwrap_or(1.0));
            Response::Upgrade(session.state.upgrade(stat, units))
        }
        Command::Equip { item_id } => Response::Equip(session.state.equip(item_id)),
        Command::Reset => {
            session.state.reset_session();
            Response::Reset {
                message: "Game has been reset.".to_string(),
            }
        }
        Command::Inventory => Response::Inventory(session.state.inventory().clone()),
    }
}

/// Parses and runs one text frame. Malformed input becomes [`Response::Error`].
pub fn handle_text(session: &mut Session, text: &str) -> Response {
    match parse_command(text) {
        Ok(command) => dispatch(session, command),
        Err(err) => Response::Error {
            message: format!("invalid command: {err}"),
        },
    }
}
