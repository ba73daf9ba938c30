use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Deck size must be a positive integer, found '{0}'")]
    InvalidDeckSize(String),
    #[error("Deck must contain at least one card")]
    EmptyDeck,
    #[error("Deck of {0} cards exceeds the limit of 4294967295 cards")]
    DeckTooLarge(usize),
    #[error("Cards are not a permutation of 0..{0}")]
    NotAPermutation(usize),
    #[error("Pile count must be 3, 4 or 5, found {0}")]
    InvalidPileCount(usize),
    #[error("Invalid range '{0}'. Expected 'A..B' or 'A..=B'")]
    InvalidRange(String),
    #[error("Round limit must be a non-negative integer, found '{0}'")]
    InvalidRoundLimit(String),
    #[error("Error allocating memory for {cards} cards")]
    Allocation { cards: usize },
    #[error("Round count does not fit in 128 bits")]
    RoundOverflow,
    #[error("Error writing output : {0}")]
    IO(#[from] io::Error),
}

impl Error {
    /// True for errors caused by bad command line input
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::InvalidDeckSize(_)
                | Error::EmptyDeck
                | Error::DeckTooLarge(_)
                | Error::InvalidPileCount(_)
                | Error::InvalidRange(_)
                | Error::InvalidRoundLimit(_)
        )
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;
