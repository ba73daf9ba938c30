//! Counting how many rounds of a pile shuffle put a deck back in order.
//!
//! A round deals the deck face down into piles, round robin, then stacks the
//! piles back up with the first pile on top. The pile count cycles through
//! 3, 4 and 5.

use std::fmt;
use std::str::FromStr;

pub mod deck;
pub mod errors;
pub mod mixing;
pub mod order;
pub mod permutation;
pub mod schedule;
pub mod simulate;
pub mod sweep;

pub use deck::{Deck, PileCount};
pub use errors::{Error, Result};
pub use order::rounds_by_cycles;
pub use simulate::{rounds_to_identity, RoundCount, Simulation};

/// How a round count is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Shuffle a deck until it is back in order
    Simulate,
    /// Solve for the count from the cycle structure of the shuffle
    Cycles,
}

impl Method {
    pub const NAMES: [&'static str; 2] = ["simulate", "cycles"];

    pub fn rounds(self, cards: usize) -> Result<RoundCount> {
        match self {
            Method::Simulate => rounds_to_identity(cards),
            Method::Cycles => rounds_by_cycles(cards),
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Simulate
    }
}

impl FromStr for Method {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "simulate" => Ok(Method::Simulate),
            "cycles" => Ok(Method::Cycles),
            _ => Err(format!("Unknown method '{}'", s)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Method::Simulate => f.write_str("simulate"),
            Method::Cycles => f.write_str("cycles"),
        }
    }
}

/// Parse a deck size from the command line
pub fn parse_deck_size(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err(Error::EmptyDeck),
        Ok(n) => Ok(n),
        Err(_) => Err(Error::InvalidDeckSize(s.to_owned())),
    }
}
