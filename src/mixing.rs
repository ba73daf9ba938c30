//! How far a deck has drifted from its original order.
//!
//! None of these measures decide when a deck is "shuffled enough". They are
//! reported next to the value a uniformly random deck would show so the
//! reader can judge.

use std::fmt;

use crate::deck::{filled, Deck, PileCount};
use crate::errors::Result;
use crate::simulate::{RoundCount, Simulation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measures {
    /// Maximal runs `k, k+1, ...` whose positions increase. 1 for a sorted deck.
    pub rising_sequences: usize,
    /// Cards still at their original position
    pub fixed_points: usize,
    /// Neighbouring pairs `k, k+1` still next to each other in that order
    pub adjacencies: usize,
}

impl Measures {
    pub fn of(deck: &Deck) -> Result<Self> {
        let cards = deck.cards();
        let mut position = filled(0, cards.len())?;
        for (i, &card) in cards.iter().enumerate() {
            position[card as usize] = i;
        }
        let descents = position.windows(2).filter(|w| w[1] < w[0]).count();
        let fixed_points = cards
            .iter()
            .enumerate()
            .filter(|&(i, &card)| card as usize == i)
            .count();
        let adjacencies = cards.windows(2).filter(|w| w[1] == w[0] + 1).count();
        Ok(Measures {
            rising_sequences: descents + 1,
            fixed_points,
            adjacencies,
        })
    }
}

/// Expected measures of a uniformly shuffled deck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    pub rising_sequences: f64,
    pub fixed_points: f64,
    pub adjacencies: f64,
}

impl Reference {
    pub fn for_deck(cards: usize) -> Self {
        let n = cards as f64;
        Reference {
            rising_sequences: (n + 1.) / 2.,
            fixed_points: 1.,
            adjacencies: (n - 1.) / n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundMixing {
    pub round: RoundCount,
    pub piles: PileCount,
    pub measures: Measures,
}

impl fmt::Display for RoundMixing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:>6} {:>6} {:>8} {:>8} {:>8}",
            self.round,
            self.piles,
            self.measures.rising_sequences,
            self.measures.fixed_points,
            self.measures.adjacencies
        )
    }
}

/// Measures after each of the first `rounds` rounds. Stops early if the deck
/// returns to its original order.
pub fn report(cards: usize, rounds: RoundCount) -> Result<Vec<RoundMixing>> {
    let mut sim = Simulation::new(cards)?;
    let mut out = Vec::new();
    while sim.rounds() < rounds {
        let piles = sim.step();
        out.push(RoundMixing {
            round: sim.rounds(),
            piles,
            measures: Measures::of(sim.deck())?,
        });
        if sim.deck().is_identity() {
            break;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    fn measures(cards: &[u32]) -> Measures {
        Measures::of(&Deck::from_cards(cards.to_vec()).unwrap()).unwrap()
    }

    #[test]
    fn test_sorted() {
        let m = measures(&[0, 1, 2, 3, 4]);
        assert_eq!(m.rising_sequences, 1);
        assert_eq!(m.fixed_points, 5);
        assert_eq!(m.adjacencies, 4);
    }

    #[test]
    fn test_reversed() {
        let m = measures(&[4, 3, 2, 1, 0]);
        assert_eq!(m.rising_sequences, 5);
        assert_eq!(m.fixed_points, 1);
        assert_eq!(m.adjacencies, 0);
    }

    #[test]
    fn test_after_one_round() {
        // [3, 0, 4, 1, 2]: 0 1 2 rise, then 3 4
        let m = measures(&[3, 0, 4, 1, 2]);
        assert_eq!(m.rising_sequences, 2);
        assert_eq!(m.fixed_points, 0);
        assert_eq!(m.adjacencies, 1);
    }

    #[test]
    fn test_report_stops_at_identity() {
        let rows = report(4, 100).unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows.last().unwrap().measures.rising_sequences, 1);
        let rows = report(52, 6).unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1].piles, PileCount::FOUR);
    }

    #[test]
    fn test_reference() {
        let r = Reference::for_deck(52);
        assert_eq!(r.rising_sequences, 26.5);
        assert_eq!(r.fixed_points, 1.);
    }
}
