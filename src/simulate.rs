use tracing::{debug, span, Level};

use crate::deck::{Deck, PileCount, Piles};
use crate::errors::Result;
use crate::schedule;

pub type RoundCount = u128;

/// A deck being shuffled round after round, starting from its original order
#[derive(Debug)]
pub struct Simulation {
    deck: Deck,
    scratch: Piles,
    rounds: RoundCount,
}

impl Simulation {
    pub fn new(cards: usize) -> Result<Self> {
        let deck = Deck::identity(cards)?;
        let scratch = Piles::for_deck(cards)?;
        Ok(Self {
            deck,
            scratch,
            rounds: 0,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rounds performed so far
    pub fn rounds(&self) -> RoundCount {
        self.rounds
    }

    /// Perform the next round of the schedule and return its pile count
    pub fn step(&mut self) -> PileCount {
        let round = self.rounds + 1;
        let piles = schedule::pile_count(round);
        let span = span!(Level::TRACE, "round", round = %round);
        let _s = span.enter();

        self.deck.restack(piles, &mut self.scratch);
        self.rounds += 1;
        piles
    }

    /// Shuffle until the deck is back in its original order
    pub fn run(&mut self) -> RoundCount {
        self.run_with(|_, _, _| {})
    }

    /// Like `run`, calling `observe` with the round number, its pile count and
    /// the resulting deck after every round
    pub fn run_with<F>(&mut self, mut observe: F) -> RoundCount
    where
        F: FnMut(RoundCount, PileCount, &Deck),
    {
        loop {
            let piles = self.step();
            observe(self.rounds, piles, &self.deck);
            if self.deck.is_identity() {
                debug!(cards = self.deck.len(), rounds = %self.rounds, "restored");
                return self.rounds;
            }
        }
    }

    /// Like `run` but gives up once `limit` rounds have been performed
    pub fn run_bounded(&mut self, limit: RoundCount) -> Option<RoundCount> {
        while self.rounds < limit {
            self.step();
            if self.deck.is_identity() {
                return Some(self.rounds);
            }
        }
        None
    }
}

/// Number of rounds needed to restore a deck of `cards` cards, by simulation
pub fn rounds_to_identity(cards: usize) -> Result<RoundCount> {
    Ok(Simulation::new(cards)?.run())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_single_card() {
        assert_eq!(rounds_to_identity(1).unwrap(), 1);
    }

    #[test]
    fn test_three_cards() {
        // three piles of one card each restack to the same order
        assert_eq!(rounds_to_identity(3).unwrap(), 1);
    }

    #[test]
    fn test_small_decks() {
        assert_eq!(rounds_to_identity(4).unwrap(), 10);
        assert_eq!(rounds_to_identity(5).unwrap(), 17);
        assert_eq!(rounds_to_identity(6).unwrap(), 12);
        assert_eq!(rounds_to_identity(10).unwrap(), 63);
    }

    #[test]
    fn test_empty_deck() {
        assert!(matches!(rounds_to_identity(0), Err(Error::EmptyDeck)));
    }

    #[test]
    fn test_step_follows_schedule() {
        let mut sim = Simulation::new(5).unwrap();
        assert_eq!(sim.step(), PileCount::THREE);
        assert_eq!(sim.deck().cards(), &[3, 0, 4, 1, 2]);
        assert_eq!(sim.step(), PileCount::FOUR);
        assert_eq!(sim.deck().cards(), &[2, 3, 0, 4, 1]);
        assert_eq!(sim.step(), PileCount::FIVE);
        assert_eq!(sim.rounds(), 3);
    }

    #[test]
    fn test_run_with_observes_every_round() {
        let mut sim = Simulation::new(4).unwrap();
        let mut seen = Vec::new();
        let rounds = sim.run_with(|round, piles, _| seen.push((round, piles.get())));
        assert_eq!(rounds, 10);
        assert_eq!(seen.len(), 10);
        assert_eq!(seen[0], (1, 3));
        assert_eq!(seen[9], (10, 3));
    }

    #[test]
    fn test_run_bounded() {
        assert_eq!(Simulation::new(4).unwrap().run_bounded(9), None);
        assert_eq!(Simulation::new(4).unwrap().run_bounded(10), Some(10));
    }
}
