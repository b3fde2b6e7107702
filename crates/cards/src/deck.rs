use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::street::Street;
use rand::Rng;
use rand::rngs::SmallRng;

/// The set of cards not yet dealt.
///
/// Dealing draws a uniformly random remaining card through a caller-owned
/// RNG handle, so a seeded table replays the exact same shuffle. There is
/// no implicit entropy source anywhere below this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Deck {
    /// A full 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from((1u64 << 52) - 1))
    }
    pub fn remaining(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Remove a specific card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// Draw one random remaining card. Exhaustion is a corrupted-state
    /// condition, not a recoverable error.
    pub fn draw(&mut self, rng: &mut SmallRng) -> Card {
        assert!(self.remaining() > 0, "deck exhausted mid-deal");
        let i = rng.random_range(0..self.remaining());
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.remove(card);
        card
    }

    /// Draw two cards as a player's hole.
    pub fn hole(&mut self, rng: &mut SmallRng) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }

    /// Draw the community cards revealed entering a street (3/1/1).
    pub fn deal(&mut self, street: Street, rng: &mut SmallRng) -> Hand {
        (0..street.n_revealed())
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn full_deck_has_52() {
        assert!(Deck::new().remaining() == 52);
    }

    /// same seed, same shuffle
    #[test]
    fn seeded_draws_replay() {
        let ref mut a = SmallRng::seed_from_u64(0xFE17);
        let ref mut b = SmallRng::seed_from_u64(0xFE17);
        let mut x = Deck::new();
        let mut y = Deck::new();
        for _ in 0..52 {
            assert!(x.draw(a) == y.draw(b));
        }
    }

    #[test]
    fn draws_never_repeat() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::new();
        let mut seen = Hand::empty();
        for _ in 0..52 {
            seen = Hand::add(seen, Hand::from(deck.draw(rng)));
        }
        assert!(seen.size() == 52);
        assert!(deck.remaining() == 0);
    }

    #[test]
    fn street_deal_sizes() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut deck = Deck::new();
        assert!(deck.deal(Street::Flop, rng).size() == 3);
        assert!(deck.deal(Street::Turn, rng).size() == 1);
        assert!(deck.deal(Street::Rive, rng).size() == 1);
        assert!(deck.remaining() == 47);
    }

    #[test]
    #[should_panic]
    fn exhaustion_is_fatal() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut deck = Deck::from(Hand::empty());
        deck.draw(rng);
    }
}
