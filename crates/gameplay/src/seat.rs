use felt_core::Chips;
use felt_core::Position;
use felt_cards::Hole;
use serde::Deserialize;
use serde::Serialize;

/// A seat's liveness within the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    /// Still able to act.
    Betting,
    /// All-in: committed, but out of chips to act with.
    Shoving,
    /// Out of the hand (or never dealt in).
    Folding,
}

/// One player's position, chips, and cards.
///
/// Owned exclusively by the [`super::Table`]; nothing outside the
/// executor mutates a seat. `stake` is the street commitment, `spent`
/// the whole-hand commitment the pot layering is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    position: Position,
    stack: Chips,
    stake: Chips,
    spent: Chips,
    hole: Option<Hole>,
    state: State,
}

impl Seat {
    pub fn new(position: Position, stack: Chips) -> Self {
        Self {
            position,
            stack,
            stake: 0,
            spent: 0,
            hole: None,
            state: State::Folding,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn state(&self) -> State {
        self.state
    }

    /// Dealt into the current hand.
    pub fn dealt(&self) -> bool {
        self.hole.is_some()
    }
    /// Dealt and not folded: can still win a pot.
    pub fn contending(&self) -> bool {
        self.dealt() && self.state != State::Folding
    }
    /// Contending with chips behind: can still act.
    pub fn active(&self) -> bool {
        self.contending() && self.state == State::Betting
    }
    pub fn funded(&self) -> bool {
        self.stack > 0
    }

    /// Resets per-hand fields. A seat without cards sits the hand out.
    pub fn reset(&mut self, hole: Option<Hole>) {
        self.stake = 0;
        self.spent = 0;
        self.hole = hole;
        self.state = match hole {
            Some(_) => State::Betting,
            None => State::Folding,
        };
    }

    /// Moves up to `chips` from stack into the street and hand
    /// commitments, flagging all-in at zero. Returns the amount moved.
    pub fn commit(&mut self, chips: Chips) -> Chips {
        debug_assert!(chips >= 0);
        let paid = chips.min(self.stack);
        self.stack -= paid;
        self.stake += paid;
        self.spent += paid;
        if self.stack == 0 {
            self.state = State::Shoving;
        }
        paid
    }

    pub fn fold(&mut self) {
        debug_assert!(self.state == State::Betting);
        self.state = State::Folding;
    }

    /// Street rollover: the hand commitment stays, the street one resets.
    pub fn clear_stake(&mut self) {
        self.stake = 0;
    }

    pub fn win(&mut self, chips: Chips) {
        debug_assert!(chips >= 0);
        self.stack += chips;
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "B"),
            State::Shoving => write!(f, "S"),
            State::Folding => write!(f, "F"),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<3}{}{:>7}{:>7}",
            self.position, self.state, self.stack, self.stake
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole() -> Hole {
        Hole::try_from("As Ks").unwrap()
    }

    #[test]
    fn commit_caps_at_stack() {
        let mut seat = Seat::new(0, 50);
        seat.reset(Some(hole()));
        assert!(seat.commit(80) == 50);
        assert!(seat.stack() == 0);
        assert!(seat.stake() == 50);
        assert!(seat.spent() == 50);
        assert!(seat.state() == State::Shoving);
    }

    #[test]
    fn street_rollover_keeps_spent() {
        let mut seat = Seat::new(0, 100);
        seat.reset(Some(hole()));
        seat.commit(30);
        seat.clear_stake();
        assert!(seat.stake() == 0);
        assert!(seat.spent() == 30);
        assert!(seat.state() == State::Betting);
    }

    #[test]
    fn undealt_seat_sits_out() {
        let mut seat = Seat::new(0, 0);
        seat.reset(None);
        assert!(!seat.dealt());
        assert!(!seat.contending());
        assert!(!seat.active());
    }
}
