//! Async runtime for live tables.
//!
//! One [`Room`] owns one [`felt_gameplay::Table`] and serializes every
//! action through its own loop: players never touch the engine, they
//! exchange messages with the room over channels. Concurrent actions on
//! a table are therefore impossible by construction rather than
//! arbitrated.
//!
//! ## Pieces
//!
//! - [`Room`] — coordinator owning the table and the hand lifecycle
//! - [`Player`] — trait for pluggable seat implementations
//! - [`Actor`] — task wrapper bridging one player to the room
//! - [`Lobby`] — per-seat channels with hole-card privacy
//! - [`Timer`] / [`Token`] — decision deadlines and the staleness check
//!   that makes late timeouts harmless
mod actor;
mod lobby;
mod player;
mod room;
mod station;
mod timer;

pub use actor::*;
pub use lobby::*;
pub use player::*;
pub use room::*;
pub use station::*;
pub use timer::*;
