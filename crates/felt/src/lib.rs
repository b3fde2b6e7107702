//! Umbrella crate re-exporting the felt workspace.
//!
//! Depend on this for everything at once, or on the member crates
//! (`felt-cards`, `felt-gameplay`, `felt-gameroom`) individually.
//! Foundation types (`Chips`, `Position`, constants) live at the root.
pub use felt_cards as cards;
pub use felt_core::*;
pub use felt_gameplay as gameplay;
pub use felt_gameroom as gameroom;
