use super::seat::Seat;
use super::seat::State;
use felt_core::Chips;
use felt_core::Position;
use serde::Serialize;

/// One layer of the pot and the seats that can win it.
///
/// Layers exist because players can be all-in for different amounts: a
/// seat only competes for chips up to its own commitment level, and
/// everything committed above that level forms side pots among the
/// deeper stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pot {
    pub amount: Chips,
    pub eligible: Vec<Position>,
}

impl Pot {
    /// Derives the pot layering from cumulative seat commitments.
    ///
    /// A pure function of the seats: recomputing on an unchanged table
    /// yields identical layers. The layer boundaries are the distinct
    /// all-in commitment levels plus the smallest nonzero and largest
    /// commitments; each layer collects every seat's clamped share of
    /// that span, so partial commitments from mid-layer folders stay
    /// accounted. Folded chips are never returned: a layer nobody can
    /// win rolls into the adjacent contested one. The layers always sum
    /// to exactly the chips committed.
    pub fn build(seats: &[Seat]) -> Vec<Pot> {
        let total = seats.iter().map(Seat::spent).sum::<Chips>();
        if total == 0 {
            return Vec::new();
        }
        let contested = |level: Chips| {
            seats
                .iter()
                .filter(|s| s.contending())
                .filter(|s| s.spent() >= level)
                .map(Seat::position)
                .collect::<Vec<Position>>()
        };
        // nobody all-in: a single pot for the non-folded contributors
        if !seats
            .iter()
            .any(|s| s.state() == State::Shoving && s.spent() > 0)
        {
            return vec![Pot {
                amount: total,
                eligible: contested(1),
            }];
        }
        let mut levels = seats
            .iter()
            .filter(|s| s.state() == State::Shoving)
            .map(Seat::spent)
            .filter(|spent| *spent > 0)
            .collect::<Vec<Chips>>();
        levels.push(seats.iter().map(Seat::spent).filter(|c| *c > 0).min().expect("nonzero total"));
        levels.push(seats.iter().map(Seat::spent).max().expect("nonzero total"));
        levels.sort_unstable();
        levels.dedup();
        let mut pots = Vec::new();
        let mut carry = 0;
        let mut floor = 0;
        for level in levels {
            let amount = carry
                + seats
                    .iter()
                    .map(Seat::spent)
                    .map(|spent| spent.min(level) - spent.min(floor))
                    .sum::<Chips>();
            let eligible = contested(level);
            floor = level;
            match eligible.is_empty() {
                true => carry = amount,
                false => {
                    carry = 0;
                    pots.push(Pot { amount, eligible });
                }
            }
        }
        if carry > 0 {
            // the deepest layers were folded-only; their chips stay in
            // play for whoever can still win
            pots.last_mut().expect("some contested layer").amount += carry;
        }
        assert!(
            pots.iter().map(|p| p.amount).sum::<Chips>() == total,
            "pot layering lost chips"
        );
        pots
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let seats = self
            .eligible
            .iter()
            .map(|p| format!("P{}", p))
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{:>7} [{}]", self.amount, seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_cards::Hole;

    const HOLES: [&str; 5] = ["As Ks", "Qd Qh", "2c 7d", "Tc Th", "5s 6s"];

    fn seat(position: Position, spent: Chips, stack_after: Chips, folded: bool) -> Seat {
        let mut seat = Seat::new(position, spent + stack_after);
        seat.reset(Some(Hole::try_from(HOLES[position]).unwrap()));
        seat.commit(spent);
        if folded {
            seat.fold();
        }
        seat
    }

    /// commitments [10, 20, 50], no folds: three layers with shrinking eligibility
    #[test]
    fn layered_all_ins() {
        let seats = vec![
            seat(0, 10, 0, false),
            seat(1, 20, 0, false),
            seat(2, 50, 30, false),
        ];
        let pots = Pot::build(&seats);
        assert!(pots.len() == 3);
        assert!(pots[0] == Pot { amount: 30, eligible: vec![0, 1, 2] });
        assert!(pots[1] == Pot { amount: 20, eligible: vec![1, 2] });
        assert!(pots[2] == Pot { amount: 30, eligible: vec![2] });
    }

    /// no all-in: one pot, folded contributors pay but cannot win
    #[test]
    fn single_pot_excludes_folders() {
        let seats = vec![
            seat(0, 10, 90, true),
            seat(1, 30, 70, false),
            seat(2, 30, 70, false),
        ];
        let pots = Pot::build(&seats);
        assert!(pots.len() == 1);
        assert!(pots[0] == Pot { amount: 70, eligible: vec![1, 2] });
    }

    /// a folder's partial commitment lands in the layer where it was contested
    #[test]
    fn mid_layer_folder_is_accounted() {
        let seats = vec![
            seat(0, 10, 0, false),
            seat(1, 30, 5, true),
            seat(2, 50, 0, false),
            seat(3, 50, 50, false),
        ];
        let pots = Pot::build(&seats);
        assert!(pots.iter().map(|p| p.amount).sum::<Chips>() == 140);
        assert!(pots[0] == Pot { amount: 40, eligible: vec![0, 2, 3] });
        assert!(pots[1] == Pot { amount: 100, eligible: vec![2, 3] });
    }

    /// the deepest commitment belongs to a folder: its chips roll back
    /// into the last contested layer
    #[test]
    fn deep_folder_rolls_back() {
        let seats = vec![
            seat(0, 100, 10, true),
            seat(1, 50, 0, false),
            seat(2, 50, 50, false),
        ];
        let pots = Pot::build(&seats);
        assert!(pots.len() == 1);
        assert!(pots[0] == Pot { amount: 200, eligible: vec![1, 2] });
    }

    /// recomputation on unchanged seats is byte-identical
    #[test]
    fn idempotent() {
        let seats = vec![
            seat(0, 10, 0, false),
            seat(1, 20, 0, false),
            seat(2, 50, 30, false),
        ];
        assert!(Pot::build(&seats) == Pot::build(&seats));
    }

    #[test]
    fn empty_before_any_commitment() {
        let seats = vec![Seat::new(0, 100), Seat::new(1, 100)];
        assert!(Pot::build(&seats).is_empty());
    }
}
