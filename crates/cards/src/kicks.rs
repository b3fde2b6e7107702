use super::rank::Rank;
use serde::Deserialize;
use serde::Serialize;

/// A hand's kicker cards, as a 13-bit rank-set mask.
///
/// Two kicker sets of equal size compare as masks exactly the way their
/// descending rank sequences compare lexicographically, so the derived
/// `Ord` is the tie-break order. Suits never participate.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism, descending
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        (0..13u8)
            .rev()
            .filter(|r| k.0 & 1 << r != 0)
            .map(Rank::from)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// mask comparison is lexicographic comparison of descending ranks
    #[test]
    fn mask_order_is_lexicographic() {
        let akq = Kickers::from(vec![Rank::Ace, Rank::King, Rank::Queen]);
        let akj = Kickers::from(vec![Rank::Ace, Rank::King, Rank::Jack]);
        let kqj = Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]);
        assert!(akq > akj);
        assert!(akj > kqj);
    }

    #[test]
    fn bijective_vec() {
        let ranks = vec![Rank::King, Rank::Nine, Rank::Two];
        let kicks = Kickers::from(ranks.clone());
        assert!(Vec::<Rank>::from(kicks) == ranks);
    }
}
