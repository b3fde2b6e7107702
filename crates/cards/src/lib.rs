//! Card primitives and hand evaluation.
//!
//! Cards, hands, and the deck all share a single packed representation:
//! a card is a bit position in a 52-bit word, a hand is a set of such
//! bits, and the deck is the complement of everything dealt so far.
//!
//! ## Primitives
//!
//! - [`Rank`], [`Suit`], [`Card`] — value types with integer and string codings
//! - [`Hand`] — unordered card set packed into a `u64`
//! - [`Hole`] — a player's two private cards
//! - [`Board`] — the 0/3/4/5 community cards
//! - [`Street`] — the four betting rounds
//! - [`Deck`] — undealt cards, drawn through an explicit seeded RNG
//!
//! ## Evaluation
//!
//! - [`Ranking`] — the nine hand classes, ordered by strength
//! - [`Kickers`] — tie-break ranks beyond the class
//! - [`Strength`] — total order over evaluated hands
//! - [`Evaluator`] — classifies a 5..7 card [`Hand`]
//! - [`Five`] — picks the winning five-card subset of seven
mod board;
mod card;
mod deck;
mod evaluator;
mod hand;
mod hole;
mod kicks;
mod rank;
mod ranking;
mod select;
mod street;
mod strength;
mod suit;

pub use board::*;
pub use card::*;
pub use deck::*;
pub use evaluator::*;
pub use hand::*;
pub use hole::*;
pub use kicks::*;
pub use rank::*;
pub use ranking::*;
pub use select::*;
pub use street::*;
pub use strength::*;
pub use suit::*;
