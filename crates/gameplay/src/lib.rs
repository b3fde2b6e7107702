//! No-limit hold'em table engine.
//!
//! This crate implements the rules of the game: it validates and applies
//! betting actions, advances streets, layers side pots out of uneven
//! all-in commitments, and settles showdowns with exact integer chip
//! accounting. Chips never appear or vanish: within a hand the pot always
//! equals the sum of seat commitments, and settlement pays out everything
//! but the rake.
//!
//! ## State
//!
//! - [`Table`] — one table's complete state; the only mutable thing here
//! - [`Seat`] / [`State`] — a player's stack, commitments, and liveness
//! - [`Stakes`] — blinds and rake configuration
//!
//! ## Actions
//!
//! - [`Action`] — fold, check, call, bet, raise (amount contract documented there)
//! - [`ActionError`] — typed rejection; a rejected action mutates nothing
//!
//! ## Resolution
//!
//! - [`Pot`] — a pot layer with its eligible winners
//! - [`Showdown`] — per-pot awarding with rake and deterministic remainders
//! - [`Settlement`] — per-seat outcome record
//!
//! ## Observation
//!
//! - [`Event`] — domain events emitted by every state transition
//! - [`TableView`] / [`SeatView`] — read-only snapshots for consumers
mod action;
mod error;
mod event;
mod pots;
mod seat;
mod settlement;
mod showdown;
mod stakes;
mod table;
mod view;

pub use action::*;
pub use error::*;
pub use event::*;
pub use pots::*;
pub use seat::*;
pub use settlement::*;
pub use showdown::*;
pub use stakes::*;
pub use table::*;
pub use view::*;
