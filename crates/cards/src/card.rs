use super::rank::Rank;
use super::suit::Suit;
use felt_core::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is its position in a sorted deck, 0..52,
/// four suits per rank from deuce up
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is a single bit in the 52-bit card word
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism ("As", "Td", "2c")
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.len() {
            2 => Ok(Self {
                rank: Rank::try_from(&s[0..1])?,
                suit: Suit::try_from(&s[1..2])?,
            }),
            _ => Err(anyhow::anyhow!("invalid card str: {}", s)),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self::from(rand::random_range(0..52u8))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_u64() {
        let card = Card::random();
        assert!(card == Card::from(u64::from(card)));
    }

    #[test]
    fn parse_display_roundtrip() {
        let card = Card::try_from("Th").unwrap();
        assert!(card.rank() == Rank::Ten);
        assert!(card.suit() == Suit::Heart);
        assert!(card.to_string() == "Th");
    }
}
