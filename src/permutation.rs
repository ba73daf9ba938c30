//! Permutations of the positions `0..n`.
//!
//! `map[i]` is the image of `i`. A deck whose card at position `i` is
//! `map[i]` is the same thing viewed as a permutation, which is how the cycle
//! solver turns deals into algebra.
//!
//! Every allocation is fallible so large decks report `Error::Allocation`
//! instead of aborting.

use crate::deck::{buffer, filled, reserve, Deck, PileCount};
use crate::errors::Result;

#[derive(Debug, PartialEq, Eq)]
pub struct Permutation {
    map: Vec<usize>,
}

impl Permutation {
    pub fn id(n: usize) -> Result<Self> {
        let mut map = buffer(n)?;
        map.extend(0..n);
        Ok(Permutation { map })
    }

    pub fn from_deck(deck: &Deck) -> Result<Self> {
        let mut map = buffer(deck.len())?;
        map.extend(deck.cards().iter().map(|&c| c as usize));
        Ok(Permutation { map })
    }

    /// The position map of a single deal: position `i` of the new deck holds
    /// the card that was at position `map[i]`
    pub fn of_deal(cards: usize, piles: PileCount) -> Result<Self> {
        let deck = Deck::identity(cards)?.deal(piles)?;
        Self::from_deck(&deck)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn apply(&self, i: usize) -> usize {
        self.map[i]
    }

    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &j)| i == j)
    }

    /// `self ∘ other`: apply `other` then `self`
    pub fn compose(&self, other: &Self) -> Result<Self> {
        debug_assert_eq!(self.len(), other.len());
        let mut map = buffer(other.len())?;
        map.extend(other.map.iter().map(|&i| self.map[i]));
        Ok(Permutation { map })
    }

    pub fn inverse(&self) -> Result<Self> {
        let mut map = filled(0, self.len())?;
        for (i, &j) in self.map.iter().enumerate() {
            map[j] = i;
        }
        Ok(Permutation { map })
    }

    /// Disjoint cycles, each listed as `c, map[c], map[map[c]], ...`
    pub fn cycles(&self) -> Result<Vec<Vec<usize>>> {
        let n = self.len();
        let mut visited = filled(false, n)?;
        let mut cycles = Vec::new();
        for i in 0..n {
            if visited[i] {
                continue;
            }
            let mut len = 1;
            let mut j = self.map[i];
            while j != i {
                len += 1;
                j = self.map[j];
            }
            let mut cycle = buffer(len)?;
            let mut j = i;
            while !visited[j] {
                visited[j] = true;
                cycle.push(j);
                j = self.map[j];
            }
            reserve(&mut cycles, 1, n)?;
            cycles.push(cycle);
        }
        Ok(cycles)
    }
}
