use super::card::Card;
use super::suit::Suit;
use felt_core::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// An unordered set of cards packed into a single `u64` word.
///
/// Each of the 52 LSBs marks one card's presence, so unions, removals,
/// and per-suit restrictions are single bitwise operations and the whole
/// set is `Copy` regardless of how many cards it holds.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    /// Disjoint union. Panics if the sets overlap.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0, "overlapping card sets");
        Self(lhs.0 | rhs.0)
    }
    /// Every card not in this set.
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// The cards of one suit in this set.
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// low-to-high card iteration, emptying a copy of the set
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            _ => {
                let card = Card::from(self.0.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to permutation; always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way projection onto the 13-bit rank mask,
/// collapsing suits: a rank is set if any card of it is present
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        (0..13u8)
            .filter(|r| h.0 >> (r * 4) & 0xF != 0)
            .fold(0u16, |mask, r| mask | 1 << r)
    }
}

/// str isomorphism, whitespace separated ("As Kd 2c")
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .map(Self::from)
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        Self::from(rand::random::<u64>())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = (*self)
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::rank::Rank;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert!(hand == Hand::from(u64::from(hand)));
    }

    #[test]
    fn iteration_low_to_high() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert!(iter.next() == Some(Card::try_from("2c").unwrap()));
        assert!(iter.next() == Some(Card::try_from("Ts").unwrap()));
        assert!(iter.next() == Some(Card::try_from("Jc").unwrap()));
        assert!(iter.next() == Some(Card::try_from("Js").unwrap()));
        assert!(iter.next() == None);
    }

    #[test]
    fn rank_mask_collapses_suits() {
        let hand = Hand::try_from("Jc Js Jd 2c").unwrap();
        assert!(u16::from(hand) == u16::from(Rank::Jack) | u16::from(Rank::Two));
    }

    #[test]
    fn complement_partitions_deck() {
        let hand = Hand::random();
        assert!(hand.size() + hand.complement().size() == 52);
        assert!(Hand::add(hand, hand.complement()).size() == 52);
    }

    #[test]
    fn suit_restriction() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c").unwrap();
        assert!(hand.of(&Suit::Club).size() == 2);
        assert!(hand.of(&Suit::Spade).size() == 1);
    }
}
