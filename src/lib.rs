//! A cribbage hand evaluator and play advisor with optional `no_std` support.
//!
//! The crate counts the fifteens in a hand, searches for the discard that
//! keeps the best fifteens score, and recommends a card to play during
//! pegging. A seeded [`Deck`] and a [`PeggingRound`] count tracker are
//! provided for callers driving a game.
//!
//! Only fifteens are scored. Pairs, runs, flushes and nobs are not counted,
//! and the kept hand is scored without a starter card.
//!
//! # Example
//!
//! ```
//! use cribrs::{Deck, DrawType, PeggingRound, PeggingOptions, select_discard, score};
//!
//! let mut deck = Deck::new(7);
//! let mut hand = deck.deal(6).unwrap();
//!
//! let discard = select_discard(&hand, DrawType::Six).unwrap();
//! hand.retain(|card| !discard.contains(card));
//! deck.discard(&discard);
//! assert_eq!(hand.len(), 4);
//! assert_eq!(score(&hand) % 2, 0);
//!
//! let round = PeggingRound::new();
//! let card = round
//!     .recommend(&hand, &deck.rank_distribution(), &PeggingOptions::default())
//!     .unwrap();
//! assert!(hand.contains(&card));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod discard;
pub mod distribution;
pub mod error;
pub mod options;
pub mod pegging;
pub mod result;
pub mod scoring;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, parse_hand, value};
pub use deck::Deck;
pub use discard::{DrawType, evaluate_discard, select_discard};
pub use distribution::RankDistribution;
pub use error::{CardError, DealError, DiscardError, PeggingError, PlayError, ProbabilityError};
pub use options::PeggingOptions;
pub use pegging::{
    MAX_COUNT, PeggingRound, candidate_scores, count, recommend_card, recommend_card_with,
};
pub use result::{CandidateScore, DiscardChoice, PlayOutcome};
pub use scoring::{FIFTEEN, POINTS_PER_FIFTEEN, find_fifteens, score};
