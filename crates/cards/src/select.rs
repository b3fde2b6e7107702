use super::card::Card;
use super::hand::Hand;
use super::strength::Strength;

/// The winning five-card subset of a showdown hand.
///
/// Brute-forces every C(n,5) combination through the evaluator and
/// remembers which input positions made the best hand. Settlement never
/// needs this; it exists so a presentation layer can highlight the
/// cards that played. It must agree with [`Strength::from`] on the full
/// hand, which the tests pin down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Five {
    strength: Strength,
    indices: [usize; 5],
}

impl Five {
    pub fn strength(&self) -> Strength {
        self.strength
    }
    /// Positions into the input slice, ascending.
    pub fn indices(&self) -> [usize; 5] {
        self.indices
    }

    pub fn select(cards: &[Card]) -> Self {
        assert!(cards.len() >= 5, "need at least five cards");
        assert!(cards.len() <= 7, "at most seven cards ever play");
        (0u32..1 << cards.len())
            .filter(|combo| combo.count_ones() == 5)
            .map(|combo| Self::candidate(cards, combo))
            .max_by_key(|five| five.strength)
            .expect("at least one combination")
    }

    fn candidate(cards: &[Card], combo: u32) -> Self {
        let mut indices = [0usize; 5];
        let mut n = 0;
        let mut hand = Hand::empty();
        for (i, card) in cards.iter().enumerate() {
            if combo & 1 << i != 0 {
                indices[n] = i;
                n += 1;
                hand = Hand::add(hand, Hand::from(*card));
            }
        }
        Self {
            strength: Strength::from(hand),
            indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_core::Arbitrary;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| Card::try_from(c).unwrap())
            .collect()
    }

    /// best-of-21 must agree with the seven-card evaluator
    #[test]
    fn agrees_with_seven_card_evaluation() {
        for _ in 0..64 {
            let mut drawn = Hand::empty();
            while drawn.size() < 7 {
                let card = Card::random();
                if !drawn.contains(&card) {
                    drawn = Hand::add(drawn, Hand::from(card));
                }
            }
            let cards = Vec::<Card>::from(drawn);
            assert!(Five::select(&cards).strength() == Strength::from(drawn));
        }
    }

    #[test]
    fn picks_the_flush_cards() {
        let cards = cards("As Ks Qs Js 9s Ad Ah");
        let five = Five::select(&cards);
        assert!(five.indices() == [0, 1, 2, 3, 4]);
    }

    #[test]
    fn exactly_five_indices() {
        let cards = cards("2c 4d 6h 8s Tc Qd Ah");
        let five = Five::select(&cards);
        assert!(five.indices().windows(2).all(|w| w[0] < w[1]));
    }
}
