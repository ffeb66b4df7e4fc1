//! Evaluation result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Outcome of a discard search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardChoice {
    /// The cards to throw away.
    pub discard: Vec<Card>,
    /// The cards kept, in hand order.
    pub kept: Vec<Card>,
    /// Fifteens score of the kept cards, without a starter card.
    pub kept_score: u32,
}

/// Heuristic score of one candidate pegging play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateScore {
    /// The candidate card.
    pub card: Card,
    /// The count if this card were played next.
    pub total: u32,
    /// The heuristic score.
    pub score: i32,
}

/// Result of playing a card into a pegging round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The card played.
    pub card: Card,
    /// The count reached by the play, before any reset.
    pub total: u8,
    /// Whether the count hit 31 and was reset to 0.
    pub reset: bool,
}
