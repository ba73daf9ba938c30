use crate::deck::PileCount;
use crate::simulate::RoundCount;

/// Pile counts used for successive rounds, repeated forever
pub const PATTERN: [PileCount; 3] = [PileCount::THREE, PileCount::FOUR, PileCount::FIVE];

/// Pile count used for the given round, counting rounds from 1
pub fn pile_count(round: RoundCount) -> PileCount {
    debug_assert!(round > 0);
    PATTERN[((round - 1) % PATTERN.len() as RoundCount) as usize]
}
