#![no_main]
use libfuzzer_sys::fuzz_target;

use pileshuffle::deck::{Deck, PileCount};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let piles = PileCount::new(3 + (data[0] % 3) as usize).unwrap();
    let cards = 1 + u16::from_le_bytes([data[1], *data.get(2).unwrap_or(&0)]) as usize;
    let dealt = Deck::identity(cards).unwrap().deal(piles).unwrap();
    // from_cards rejects anything that is not a permutation of 0..cards
    Deck::from_cards(dealt.into_cards()).unwrap();
});
