use std::convert::TryFrom;
use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

use crate::errors::{Error, Result};

/// Number of piles dealt in a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PileCount(u8);

impl PileCount {
    pub const THREE: PileCount = PileCount(3);
    pub const FOUR: PileCount = PileCount(4);
    pub const FIVE: PileCount = PileCount(5);

    pub const MAX: usize = 5;

    pub fn new(piles: usize) -> Result<Self> {
        match piles {
            3..=5 => Ok(PileCount(piles as u8)),
            _ => Err(Error::InvalidPileCount(piles)),
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PileCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Reserve room for `additional` more elements of `v`, blaming a failure on a
/// deck of `cards` cards
pub(crate) fn reserve<T>(v: &mut Vec<T>, additional: usize, cards: usize) -> Result<()> {
    v.try_reserve_exact(additional)
        .map_err(|_| Error::Allocation { cards })
}

pub(crate) fn buffer<T>(cards: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    reserve(&mut v, cards, cards)?;
    Ok(v)
}

pub(crate) fn filled<T: Clone>(value: T, cards: usize) -> Result<Vec<T>> {
    let mut v = buffer(cards)?;
    v.resize(cards, value);
    Ok(v)
}

/// Reusable storage for the face down piles of a deal.
///
/// Each pile is sized for the largest share it can receive (three piles), so
/// dealing never reallocates.
#[derive(Debug)]
pub struct Piles {
    stacks: SmallVec<[Vec<u32>; PileCount::MAX]>,
}

impl Piles {
    pub fn for_deck(cards: usize) -> Result<Self> {
        let per_pile = cards / 3 + 1;
        let mut stacks = SmallVec::new();
        for _ in 0..PileCount::MAX {
            let mut stack = Vec::new();
            reserve(&mut stack, per_pile, cards)?;
            stacks.push(stack);
        }
        Ok(Self { stacks })
    }

    /// Deal `cards` round robin into `piles` stacks, then pick them up with
    /// pile 1 on top of pile 2 on top of pile 3 and so on.
    fn restack(&mut self, cards: &mut Vec<u32>, piles: PileCount) {
        let k = piles.get();
        let stacks = &mut self.stacks[..k];
        for stack in stacks.iter_mut() {
            stack.clear();
        }
        for (i, &card) in cards.iter().enumerate() {
            stacks[i % k].push(card);
        }
        trace!(piles = k, first = stacks[0].len(), last = stacks[k - 1].len(), "dealt");
        cards.clear();
        // Dealing face down reverses each pile
        for stack in stacks.iter() {
            cards.extend(stack.iter().rev());
        }
    }
}

/// An ordered deck of cards labelled `0..len`.
///
/// Position 0 is the top of the deck, which is the first card dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<u32>,
}

impl Deck {
    /// A deck in its original order
    pub fn identity(cards: usize) -> Result<Self> {
        if cards == 0 {
            return Err(Error::EmptyDeck);
        }
        let top = u32::try_from(cards).map_err(|_| Error::DeckTooLarge(cards))?;
        let mut v = buffer(cards)?;
        v.extend(0..top);
        Ok(Deck { cards: v })
    }

    pub fn from_cards(cards: Vec<u32>) -> Result<Self> {
        let n = cards.len();
        if n == 0 {
            return Err(Error::EmptyDeck);
        }
        let mut seen = filled(false, n)?;
        for &card in &cards {
            match seen.get_mut(card as usize) {
                Some(s) if !*s => *s = true,
                _ => return Err(Error::NotAPermutation(n)),
            }
        }
        Ok(Deck { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[u32] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<u32> {
        self.cards
    }

    /// Every card is back at the position matching its label
    pub fn is_identity(&self) -> bool {
        self.cards
            .iter()
            .enumerate()
            .all(|(i, &card)| card as usize == i)
    }

    /// Perform one round in place, reusing `scratch` for the piles
    pub fn restack(&mut self, piles: PileCount, scratch: &mut Piles) {
        scratch.restack(&mut self.cards, piles)
    }

    /// Perform one round, returning the new deck
    pub fn deal(&self, piles: PileCount) -> Result<Deck> {
        let mut scratch = Piles::for_deck(self.len())?;
        let mut cards = buffer(self.len())?;
        cards.extend_from_slice(&self.cards);
        scratch.restack(&mut cards, piles);
        Ok(Deck { cards })
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{:4}", card)?;
        }
        Ok(())
    }
}
