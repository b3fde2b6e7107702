use super::pots::Pot;
use super::stakes::Stakes;
use felt_core::Chips;
use felt_core::Position;
use felt_cards::Strength;

/// Awards the layered pots at showdown.
///
/// Each pot is settled independently: its winners are the eligible
/// seats whose hands tie for strongest, the rake comes off the top, and
/// the remainder of an uneven split goes one chip at a time to winners
/// in clockwise order starting left of the button. Everything here is
/// deterministic; two tables in the same state settle identically.
pub struct Showdown {
    pots: Vec<Pot>,
    strengths: Vec<Option<Strength>>,
    dealer: Position,
    stakes: Stakes,
}

impl Showdown {
    pub fn new(
        pots: Vec<Pot>,
        strengths: Vec<Option<Strength>>,
        dealer: Position,
        stakes: Stakes,
    ) -> Self {
        Self {
            pots,
            strengths,
            dealer,
            stakes,
        }
    }

    /// Per-seat rewards and the total rake taken.
    pub fn settle(self) -> (Vec<Chips>, Chips) {
        let mut rewards = vec![0 as Chips; self.strengths.len()];
        let mut raked = 0;
        for pot in &self.pots {
            let winners = self.winners(pot);
            let rake = self.stakes.rake(pot.amount);
            let share = (pot.amount - rake) / winners.len() as Chips;
            let mut bonus = (pot.amount - rake) % winners.len() as Chips;
            for position in &winners {
                rewards[*position] += share;
            }
            for position in self.clockwise() {
                if bonus == 0 {
                    break;
                }
                if winners.contains(&position) {
                    rewards[position] += 1;
                    bonus -= 1;
                }
            }
            raked += rake;
        }
        (rewards, raked)
    }

    /// Eligible seats tying for the strongest hand in this pot.
    fn winners(&self, pot: &Pot) -> Vec<Position> {
        let best = pot
            .eligible
            .iter()
            .filter_map(|p| self.strengths[*p])
            .max()
            .expect("every eligible seat was evaluated");
        pot.eligible
            .iter()
            .copied()
            .filter(|p| self.strengths[*p] == Some(best))
            .collect()
    }

    /// All seats once around, clockwise from the button's left.
    fn clockwise(&self) -> impl Iterator<Item = Position> + '_ {
        let n = self.strengths.len();
        (1..=n).map(move |i| (self.dealer + i) % n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_cards::Kickers;
    use felt_cards::Rank;
    use felt_cards::Ranking;

    fn pair(rank: Rank) -> Option<Strength> {
        Some(Strength::from((Ranking::OnePair(rank), Kickers::default())))
    }

    fn rakeless() -> Stakes {
        Stakes::new(1, 2)
    }

    #[test]
    fn strongest_takes_single_pot() {
        let pots = vec![Pot {
            amount: 200,
            eligible: vec![0, 1],
        }];
        let strengths = vec![pair(Rank::Ace), pair(Rank::King)];
        let (rewards, rake) = Showdown::new(pots, strengths, 0, rakeless()).settle();
        assert!(rewards == vec![200, 0]);
        assert!(rake == 0);
    }

    /// commitments 10/20/30/40 where the deepest seat holds the best
    /// hand: it sweeps every layer
    #[test]
    fn four_way_layered_all_in() {
        let pots = vec![
            Pot { amount: 40, eligible: vec![0, 1, 2, 3] },
            Pot { amount: 30, eligible: vec![1, 2, 3] },
            Pot { amount: 20, eligible: vec![2, 3] },
            Pot { amount: 10, eligible: vec![3] },
        ];
        let strengths = vec![
            pair(Rank::Jack),
            pair(Rank::Queen),
            pair(Rank::King),
            pair(Rank::Ace),
        ];
        let (rewards, rake) = Showdown::new(pots, strengths, 0, rakeless()).settle();
        assert!(rewards == vec![0, 0, 0, 100]);
        assert!(rake == 0);
    }

    /// a short stack's win is capped at its layer; the overage goes to
    /// the next-best eligible hand
    #[test]
    fn short_stack_wins_main_only() {
        let pots = vec![
            Pot { amount: 150, eligible: vec![0, 1, 2] },
            Pot { amount: 100, eligible: vec![1, 2] },
        ];
        let strengths = vec![pair(Rank::Ace), pair(Rank::King), pair(Rank::Queen)];
        let (rewards, _) = Showdown::new(pots, strengths, 0, rakeless()).settle();
        assert!(rewards == vec![150, 100, 0]);
    }

    /// odd chop: 19 chips between two winners goes 10/9, the extra chip
    /// to the first winner clockwise of the button
    #[test]
    fn odd_chop_is_deterministic() {
        let pots = vec![Pot {
            amount: 19,
            eligible: vec![0, 2],
        }];
        let strengths = vec![pair(Rank::Ace), pair(Rank::King), pair(Rank::Ace)];
        let (rewards, _) = Showdown::new(pots, strengths, 1, rakeless()).settle();
        assert!(rewards == vec![9, 0, 10]);
    }

    /// same chop, button elsewhere: the extra chip moves with it
    #[test]
    fn odd_chop_follows_button() {
        let pots = vec![Pot {
            amount: 19,
            eligible: vec![0, 2],
        }];
        let strengths = vec![pair(Rank::Ace), pair(Rank::King), pair(Rank::Ace)];
        let (rewards, _) = Showdown::new(pots, strengths, 2, rakeless()).settle();
        assert!(rewards == vec![10, 0, 9]);
    }

    /// rake comes off each pot before the split
    #[test]
    fn rake_off_the_top() {
        let pots = vec![Pot {
            amount: 100,
            eligible: vec![0, 1],
        }];
        let strengths = vec![pair(Rank::Ace), pair(Rank::Ace)];
        let stakes = Stakes::new(1, 2).with_rake(500, 0);
        let (rewards, rake) = Showdown::new(pots, strengths, 0, stakes).settle();
        assert!(rake == 5);
        assert!(rewards == vec![47, 48]);
    }
}
