extern crate pileshuffle;
use pileshuffle::{rounds_by_cycles, rounds_to_identity, Error, Method, Simulation};

// (cards, rounds)
const KNOWN: &[(usize, u128)] = &[
    (1, 1),
    (2, 1),
    (3, 1),
    (4, 10),
    (5, 17),
    (6, 12),
    (7, 15),
    (8, 12),
    (9, 27),
    (10, 63),
    (21, 360),
    (28, 1530),
    (47, 5100),
    (52, 153),
    (54, 32760),
    (60, 3),
];

#[test]
fn known_round_counts() {
    for &(cards, rounds) in KNOWN {
        assert_eq!(rounds_to_identity(cards).unwrap(), rounds, "cards = {}", cards);
        assert_eq!(rounds_by_cycles(cards).unwrap(), rounds, "cards = {}", cards);
    }
}

#[test]
fn three_card_deck_by_hand() {
    // Round 1 deals one card to each of three piles, which restack unchanged
    let mut sim = Simulation::new(3).unwrap();
    sim.step();
    assert_eq!(sim.deck().cards(), &[0, 1, 2]);
    assert_eq!(rounds_to_identity(3).unwrap(), 1);
}

#[test]
fn four_card_deck_by_hand() {
    let mut sim = Simulation::new(4).unwrap();
    let mut decks = Vec::new();
    let rounds = sim.run_with(|_, _, deck| decks.push(deck.cards().to_vec()));
    assert_eq!(rounds, 10);
    // 3 piles: [0,3] [1] [2]
    assert_eq!(decks[0], vec![3, 0, 1, 2]);
    // 4 piles of one card each
    assert_eq!(decks[1], vec![3, 0, 1, 2]);
    // 5 piles, the last one empty
    assert_eq!(decks[2], vec![3, 0, 1, 2]);
    assert_eq!(decks[9], vec![0, 1, 2, 3]);
}

#[test]
fn every_deck_returns_to_order() {
    for cards in 1..=120 {
        let bounded = Simulation::new(cards).unwrap().run_bounded(1_000_000);
        let solved = rounds_by_cycles(cards).unwrap();
        assert_eq!(bounded, Some(solved), "cards = {}", cards);
    }
}

#[test]
fn repeated_runs_agree() {
    for &cards in &[13, 29, 52] {
        let first = rounds_to_identity(cards).unwrap();
        let second = rounds_to_identity(cards).unwrap();
        assert_eq!(first, second);
        assert_eq!(Method::Cycles.rounds(cards).unwrap(), first);
    }
}

#[test]
fn empty_deck_is_rejected() {
    assert!(matches!(rounds_to_identity(0), Err(Error::EmptyDeck)));
    assert!(matches!(rounds_by_cycles(0), Err(Error::EmptyDeck)));
    assert!(matches!(Simulation::new(0), Err(Error::EmptyDeck)));
}

#[test]
fn large_decks_by_cycles() {
    assert_eq!(rounds_by_cycles(100).unwrap(), 756);
    assert_eq!(rounds_by_cycles(200).unwrap(), 211_068);
    assert_eq!(rounds_by_cycles(500).unwrap(), 1_867_320);
}
