//! Deck bookkeeping tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use cribrs::{Card, DECK_SIZE, DealError, Deck, ProbabilityError, Rank, Suit};

#[test]
fn new_deck_holds_every_card_once() {
    let deck = Deck::new(1);
    assert_eq!(deck.remaining(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn same_seed_same_order() {
    assert_eq!(Deck::new(9).cards(), Deck::new(9).cards());
    assert_ne!(Deck::new(9).cards(), Deck::ordered().cards());
}

#[test]
fn ordered_deck_runs_suit_by_suit() {
    let deck = Deck::ordered();
    assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Hearts));
    assert_eq!(deck.cards()[12], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(deck.cards()[13], Card::new(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Spades));
}

#[test]
fn deal_takes_from_the_end() {
    let mut deck = Deck::ordered();
    let dealt = deck.deal(2).unwrap();

    assert_eq!(
        dealt,
        vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades)
        ]
    );
    assert_eq!(deck.remaining(), 50);
    assert!(!deck.cards().contains(&dealt[0]));
}

#[test]
fn deal_fails_without_enough_cards() {
    let mut deck = Deck::new(4);
    deck.deal(50).unwrap();

    assert_eq!(
        deck.deal(3),
        Err(DealError::NotEnoughCards {
            requested: 3,
            remaining: 2
        })
    );
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.deal(2).unwrap().len(), 2);
    assert!(deck.deal(0).unwrap().is_empty());
}

#[test]
fn discards_and_reset() {
    let mut deck = Deck::new(5);
    let hand = deck.deal(6).unwrap();
    deck.discard(&hand[..2]);
    assert_eq!(deck.discard_pile(), &hand[..2]);

    deck.reset();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert!(deck.discard_pile().is_empty());
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = Deck::ordered();
    deck.shuffle();
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn remove_takes_out_a_known_card() {
    let mut deck = Deck::ordered();
    let five = Card::new(Rank::Five, Suit::Clubs);
    assert!(deck.remove(five));
    assert!(!deck.remove(five));
    assert_eq!(deck.remaining(), 51);
}

#[test]
fn distribution_tracks_remaining_ranks() {
    let mut deck = Deck::ordered();
    for suit in Suit::ALL {
        assert!(deck.remove(Card::new(Rank::Five, suit)));
    }

    let distribution = deck.rank_distribution();
    assert_eq!(distribution.len(), 12);
    assert_eq!(distribution.get(Rank::Five), None);
    assert_eq!(distribution.get(Rank::King), Some(4.0 / 48.0 * 100.0));

    let total: f64 = distribution.iter().map(|(_, share)| share).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn empty_deck_has_empty_distribution() {
    let mut deck = Deck::new(0);
    deck.deal(DECK_SIZE).unwrap();
    assert!(deck.rank_distribution().is_empty());
}

#[test]
fn hand_probability_of_a_certain_event_is_one_hundred() {
    let mut deck = Deck::new(2);
    assert_eq!(deck.hand_probability(5, 200, |_| true), Ok(100.0));
    assert_eq!(deck.hand_probability(5, 200, |_| false), Ok(0.0));
}

#[test]
fn hand_probability_is_reproducible_per_seed() {
    let unique_ranks = |hand: &[Card]| {
        hand.iter().map(|card| card.rank).collect::<HashSet<_>>().len() == hand.len()
    };

    let first = Deck::new(17).hand_probability(5, 500, unique_ranks).unwrap();
    let second = Deck::new(17).hand_probability(5, 500, unique_ranks).unwrap();
    assert_eq!(first, second);
    assert!(first > 0.0 && first < 100.0);
}

#[test]
fn hand_probability_leaves_the_deck_untouched() {
    let mut deck = Deck::new(8);
    deck.deal(10).unwrap();
    let before = deck.cards().to_vec();

    deck.hand_probability(6, 100, |hand| hand.len() == 6).unwrap();
    assert_eq!(deck.cards(), before.as_slice());
    assert_eq!(deck.remaining(), 42);
}

#[test]
fn hand_probability_draws_only_undealt_cards() {
    let mut deck = Deck::ordered();
    for suit in Suit::ALL {
        assert!(deck.remove(Card::new(Rank::Five, suit)));
    }

    let no_fives = deck
        .hand_probability(6, 300, |hand| hand.iter().all(|card| card.rank != Rank::Five))
        .unwrap();
    assert_eq!(no_fives, 100.0);
}

#[test]
fn hand_probability_rejects_bad_requests() {
    let mut deck = Deck::new(1);
    deck.deal(48).unwrap();

    assert_eq!(
        deck.hand_probability(5, 10, |_| true),
        Err(ProbabilityError::NotEnoughCards {
            hand_size: 5,
            remaining: 4
        })
    );
    assert_eq!(
        deck.hand_probability(4, 0, |_| true),
        Err(ProbabilityError::NoTrials)
    );
}
