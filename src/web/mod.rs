//! Remote access to a session over websockets.
//!
//! The command protocol is always compiled so it can be unit tested; the
//! tokio server needs the `web` feature:
//!
//! ```sh
//! cargo build --features web
//! ./target/debug/climber --serve        # Default port 3000
//! ./target/debug/climber --serve=8080   # Custom port
//! ```
//!
//! `curl http://localhost:3000/state` returns the current state as JSON; any
//! other connection is upgraded to a websocket speaking [`protocol`].

pub mod protocol;

#[cfg(feature = "web")]
mod server;

pub use protocol::{dispatch, handle_text, parse_command, Command, Response, Session};

#[cfg(feature = "web")]
pub use server::start_web_server;
