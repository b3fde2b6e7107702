use super::pots::Pot;
use super::seat::State;
use super::table::Status;
use felt_core::Chips;
use felt_core::Position;
use felt_cards::Card;
use felt_cards::Hole;
use felt_cards::Street;
use serde::Serialize;

/// A seat as seen from outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub position: Position,
    pub stack: Chips,
    pub stake: Chips,
    pub spent: Chips,
    pub state: State,
    pub hole: Option<Hole>,
}

/// A read-only copy of the table.
///
/// Snapshots are how callers observe the engine: the table itself is
/// never handed out, so no caller-visible value changes underneath
/// anyone. Holds every seat's cards; [`TableView::redact`] strips the
/// ones a given viewer has no business seeing before the snapshot
/// leaves the trust boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub hand: u64,
    pub status: Status,
    pub street: Option<Street>,
    pub board: Vec<Card>,
    pub pot: Chips,
    pub to_call: Chips,
    pub last_raise: Chips,
    pub dealer: Position,
    pub actor: Option<Position>,
    pub sentinel: Option<Position>,
    pub seats: Vec<SeatView>,
    pub pots: Vec<Pot>,
    pub over: bool,
}

impl TableView {
    /// The snapshot as seen by one seat (or by a pure observer with
    /// `None`): every other hole is hidden.
    pub fn redact(&self, pov: Option<Position>) -> Self {
        let mut view = self.clone();
        for seat in view.seats.iter_mut() {
            if Some(seat.position) != pov {
                seat.hole = None;
            }
        }
        view
    }
    pub fn seat(&self, position: Position) -> &SeatView {
        &self.seats[position]
    }
}
