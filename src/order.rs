//! Round counts without simulating every round.
//!
//! Three consecutive rounds (3, 4 then 5 piles) always apply the same
//! composite permutation `C`. After `3m + r` rounds the deck reads
//! `C^m ∘ P_r`, where `P_r` is the first `r` rounds of the schedule. The deck
//! is back in order when `C^m = P_r⁻¹`, and the smallest such `m` comes from
//! the cycle structure of `C` with the Chinese remainder theorem.

use std::convert::TryFrom;
use std::mem;

use num_integer::Integer;
use tracing::{debug, trace};

use crate::deck::filled;
use crate::errors::{Error, Result};
use crate::permutation::Permutation;
use crate::schedule::PATTERN;
use crate::simulate::RoundCount;

/// `m ≡ residue (mod modulus)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Congruence {
    residue: i128,
    modulus: i128,
}

impl Congruence {
    const ANY: Congruence = Congruence {
        residue: 0,
        modulus: 1,
    };

    /// Intersect two congruences. `None` when they have no common solution.
    fn combine(self, other: Congruence) -> Result<Option<Congruence>> {
        let e = self.modulus.extended_gcd(&other.modulus);
        let diff = (other.residue - self.residue).mod_floor(&other.modulus);
        if diff % e.gcd != 0 {
            return Ok(None);
        }
        let step = other.modulus / e.gcd;
        let t = (diff / e.gcd)
            .checked_mul(e.x)
            .ok_or(Error::RoundOverflow)?
            .mod_floor(&step);
        let modulus = self
            .modulus
            .checked_mul(step)
            .ok_or(Error::RoundOverflow)?;
        let residue = self
            .modulus
            .checked_mul(t)
            .and_then(|v| v.checked_add(self.residue))
            .ok_or(Error::RoundOverflow)?
            .mod_floor(&modulus);
        Ok(Some(Congruence { residue, modulus }))
    }
}

/// Cycles of a permutation, with each element's cycle and offset within it
struct CycleIndex {
    cycles: Vec<Vec<usize>>,
    cycle_of: Vec<usize>,
    offset: Vec<usize>,
}

impl CycleIndex {
    fn new(p: &Permutation) -> Result<Self> {
        let cycles = p.cycles()?;
        let mut cycle_of = filled(0, p.len())?;
        let mut offset = filled(0, p.len())?;
        for (c, cycle) in cycles.iter().enumerate() {
            for (i, &j) in cycle.iter().enumerate() {
                cycle_of[j] = c;
                offset[j] = i;
            }
        }
        Ok(Self {
            cycles,
            cycle_of,
            offset,
        })
    }

    /// All `m ≥ 0` with `p^m = target`, or `None` if there are none
    fn power_equal_to(&self, target: &Permutation) -> Result<Option<Congruence>> {
        let mut solution = Congruence::ANY;
        for (c, cycle) in self.cycles.iter().enumerate() {
            let len = cycle.len();
            // p^m moves every element of a cycle forward by m places, so the
            // target must rotate the whole cycle by one fixed amount
            let head = target.apply(cycle[0]);
            if self.cycle_of[head] != c {
                return Ok(None);
            }
            let shift = self.offset[head];
            let uniform = cycle
                .iter()
                .enumerate()
                .all(|(i, &j)| target.apply(j) == cycle[(i + shift) % len]);
            if !uniform {
                return Ok(None);
            }
            let congruence = Congruence {
                residue: shift as i128,
                modulus: len as i128,
            };
            solution = match solution.combine(congruence)? {
                Some(s) => s,
                None => return Ok(None),
            };
        }
        Ok(Some(solution))
    }
}

/// Number of rounds needed to restore a deck of `cards` cards, from the
/// cycle structure of the three round composite
pub fn rounds_by_cycles(cards: usize) -> Result<RoundCount> {
    if cards == 0 {
        return Err(Error::EmptyDeck);
    }
    u32::try_from(cards).map_err(|_| Error::DeckTooLarge(cards))?;

    // prefixes[r] is the first r rounds of the schedule
    let mut prefixes = Vec::with_capacity(PATTERN.len());
    let mut prefix = Permutation::id(cards)?;
    for &piles in PATTERN.iter() {
        let next = prefix.compose(&Permutation::of_deal(cards, piles)?)?;
        prefixes.push(mem::replace(&mut prefix, next));
    }
    let composite = prefix;
    let index = CycleIndex::new(&composite)?;
    debug!(cards, cycles = index.cycles.len(), "composite");

    let mut best: Option<RoundCount> = None;
    for (r, p) in prefixes.iter().enumerate() {
        let solution = match index.power_equal_to(&p.inverse()?)? {
            Some(s) => s,
            None => continue,
        };
        // zero rounds does not count as a return to order
        let m = if r == 0 && solution.residue == 0 {
            solution.modulus
        } else {
            solution.residue
        };
        let rounds = (m as u128)
            .checked_mul(PATTERN.len() as u128)
            .and_then(|v| v.checked_add(r as u128))
            .ok_or(Error::RoundOverflow)?;
        trace!(offset = r, composites = %m, rounds = %rounds, "candidate");
        best = Some(best.map_or(rounds, |b| b.min(rounds)));
    }
    // r = 0 always has a solution: the order of the composite
    best.ok_or(Error::RoundOverflow)
}
