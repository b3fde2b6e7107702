use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use serde::Deserialize;
use serde::Serialize;

/// The community cards visible to all players.
///
/// A board holds 0, 3, 4, or 5 cards for preflop, flop, turn, and river
/// respectively. Cards are added incrementally as streets progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board(Hand);

impl Board {
    /// Creates an empty board (preflop state).
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    /// Adds cards to the board. Panics if they overlap the existing board.
    pub fn add(&mut self, hand: Hand) {
        self.0 = Hand::add(self.0, hand);
    }
    /// Resets the board to empty for a new hand.
    pub fn clear(&mut self) {
        self.0 = Hand::empty();
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn cards(&self) -> Vec<Card> {
        Vec::<Card>::from(self.0)
    }
    /// Infers the current street from board size.
    pub fn street(&self) -> Street {
        Street::from(self.0.size())
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        debug_assert!(board.0.size() != 1);
        debug_assert!(board.0.size() != 2);
        debug_assert!(board.0.size() <= 5);
        board.0
    }
}
impl From<Hand> for Board {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_tracks_size() {
        let mut board = Board::empty();
        assert!(board.street() == Street::Pref);
        board.add(Hand::try_from("2c 3d 4h").unwrap());
        assert!(board.street() == Street::Flop);
        board.add(Hand::try_from("5s").unwrap());
        assert!(board.street() == Street::Turn);
        board.add(Hand::try_from("6c").unwrap());
        assert!(board.street() == Street::Rive);
    }
}
