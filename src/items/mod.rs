//! Item system: types, zone loot tables, drop rolling, and the inventory.

pub mod drops;
pub mod inventory;
pub mod tables;
pub mod types;

pub use drops::*;
pub use inventory::*;
pub use tables::*;
pub use types::*;
