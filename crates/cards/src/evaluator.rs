use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// A-2-3-4-5, the only straight whose high card is not its top bit.
const WHEEL: u16 = 0b1000000001111;

/// Classifies a 5..7 card [`Hand`] into its best [`Ranking`].
///
/// Rank multiplicities are tabulated once at construction; class
/// detection then walks the classes in priority order, and straights
/// fall out of shift-ANDs on the 13-bit rank mask.
pub struct Evaluator {
    hand: Hand,
    counts: [u8; 13],
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let mut counts = [0u8; 13];
        for card in hand {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        Self { hand, counts }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_two_pair())
            .or_else(|| self.find_one_pair())
            .or_else(|| self.find_high_card())
            .expect("at least one card in hand")
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking {
            // flush ties break on the four cards below the top, in suit
            Ranking::Flush(hi) => {
                let suit = self.find_suit_of_flush().expect("flush has a suit");
                let ranks = u16::from(self.hand.of(&suit));
                Kickers::from(Self::keep(ranks & !u16::from(hi), 4))
            }
            _ => match ranking.n_kickers() {
                0 => Kickers::default(),
                n => Kickers::from(Self::keep(u16::from(self.hand) & ranking.mask(), n)),
            },
        }
    }

    /// drop low bits until at most n remain
    fn keep(mut ranks: u16, n: usize) -> u16 {
        while ranks.count_ones() as usize > n {
            ranks &= ranks - 1;
        }
        ranks
    }

    ///

    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            Self::find_rank_of_straight(u16::from(self.hand.of(&suit)))
                .map(Ranking::StraightFlush)
        })
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_with(4, None).map(Ranking::FourOAK)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.find_rank_with(3, None).and_then(|trips| {
            self.find_rank_with(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| Rank::from(u16::from(self.hand.of(&suit))))
            .map(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(u16::from(self.hand)).map(Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_with(3, None).map(Ranking::ThreeOAK)
    }
    fn find_two_pair(&self) -> Option<Ranking> {
        self.find_rank_with(2, None).and_then(|hi| {
            self.find_rank_with(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_one_pair(&self) -> Option<Ranking> {
        self.find_rank_with(2, None).map(Ranking::OnePair)
    }
    fn find_high_card(&self) -> Option<Ranking> {
        self.find_rank_with(1, None).map(Ranking::HighCard)
    }

    ///

    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let runs = ranks & ranks << 1 & ranks << 2 & ranks << 3 & ranks << 4;
        if runs != 0 {
            Some(Rank::from(runs))
        } else if ranks & WHEEL == WHEEL {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all().into_iter().find(|s| self.hand.of(s).size() >= 5)
    }
    /// highest rank held at least n times, optionally skipping one rank
    fn find_rank_with(&self, n: u8, skip: Option<Rank>) -> Option<Rank> {
        (0..13u8)
            .rev()
            .map(Rank::from)
            .filter(|r| Some(*r) != skip)
            .find(|r| self.counts[u8::from(*r) as usize] >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(s).unwrap());
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        (ranking, kickers)
    }

    #[test]
    fn high_card() {
        let (ranking, kickers) = eval("As Kh Qd Jc 9s");
        assert!(ranking == Ranking::HighCard(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn one_pair() {
        let (ranking, kickers) = eval("As Ah Kd Qc Js");
        assert!(ranking == Ranking::OnePair(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs");
        assert!(ranking == Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(kickers == Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = eval("As Ah Ad Kc Qs");
        assert!(ranking == Ranking::ThreeOAK(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn broadway_straight() {
        let (ranking, kickers) = eval("Ts Jh Qd Kc As");
        assert!(ranking == Ranking::Straight(Rank::Ace));
        assert!(kickers == Kickers::default());
    }

    #[test]
    fn flush_keeps_suited_kickers() {
        let (ranking, kickers) = eval("As Ks Qs Js 9s");
        assert!(ranking == Ranking::Flush(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = eval("2s 2h 2d 3c 3s");
        assert!(ranking == Ranking::FullHouse(Rank::Two, Rank::Three));
        assert!(kickers == Kickers::default());
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks");
        assert!(ranking == Ranking::FourOAK(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, _) = eval("Ts Js Qs Ks As");
        assert!(ranking == Ranking::StraightFlush(Rank::Ace));
    }

    /// the wheel evaluates as a Five-high straight
    #[test]
    fn wheel_straight() {
        let (ranking, _) = eval("As 2h 3d 4c 5s");
        assert!(ranking == Ranking::Straight(Rank::Five));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = eval("As 2s 3s 4s 5s");
        assert!(ranking == Ranking::StraightFlush(Rank::Five));
    }

    /// six-high beats the wheel when the six connects
    #[test]
    fn six_high_over_wheel() {
        let (ranking, _) = eval("As 2s 3h 4d 5c 6s");
        assert!(ranking == Ranking::Straight(Rank::Six));
    }

    #[test]
    fn seven_card_two_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Jh 9d");
        assert!(ranking == Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(kickers == Kickers::from(vec![Rank::Queen]));
    }

    /// with three pairs, the best two play and the best leftover kicks
    #[test]
    fn three_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Qh Jd");
        assert!(ranking == Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(kickers == Kickers::from(vec![Rank::Queen]));
    }

    /// two sets make a full house, higher set on top
    #[test]
    fn two_three_oak() {
        let (ranking, kickers) = eval("As Ah Ad Kc Ks Kh Qd");
        assert!(ranking == Ranking::FullHouse(Rank::Ace, Rank::King));
        assert!(kickers == Kickers::default());
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, _) = eval("4h 6h 7h 8h 9h Ts");
        assert!(ranking == Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, _) = eval("Kh Ah Ad As Ks Qs Js 9s");
        assert!(ranking == Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak_over_full_house() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks Kh Qd");
        assert!(ranking == Ranking::FourOAK(Rank::Ace));
        assert!(kickers == Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush_over_four_oak() {
        let (ranking, _) = eval("Ts Js Qs Ks As Ah Ad Ac");
        assert!(ranking == Ranking::StraightFlush(Rank::Ace));
    }
}
