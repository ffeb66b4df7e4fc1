//! Error types for evaluation and bookkeeping operations.

use thiserror::Error;

/// Errors that can occur when reading card symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank symbol outside `2,3,4,5,6,7,8,9,t,j,q,k,a`.
    #[error("unknown rank symbol `{0}`")]
    UnknownRank(char),
    /// Suit symbol outside `h,d,c,s`.
    #[error("unknown suit symbol `{0}`")]
    UnknownSuit(char),
    /// Card notation is not exactly a rank symbol followed by a suit symbol.
    #[error("card notation must be a rank symbol followed by a suit symbol")]
    InvalidNotation,
}

/// Errors that can occur when selecting a discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// Draw type is not `5` or `6`.
    #[error("invalid draw type, use 5 for discard 1 or 6 for discard 2")]
    InvalidDrawType,
    /// The hand holds fewer cards than must be discarded.
    #[error("hand of {len} cards cannot discard {discard}")]
    HandTooSmall {
        /// Number of cards in the hand.
        len: usize,
        /// Number of cards the draw type discards.
        discard: usize,
    },
}

/// Errors that can occur when advising a pegging play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeggingError {
    /// No held cards to choose from.
    #[error("no cards held to play")]
    EmptyHand,
}

/// Errors that can occur when playing a card into a pegging round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The play would take the running total past 31.
    #[error("playing the card would bring the total to {total}, over 31")]
    OverThirtyOne {
        /// The total the play would have produced.
        total: u8,
    },
}

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck.
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when estimating a hand probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProbabilityError {
    /// The hand is larger than the undealt cards.
    #[error("cannot draw {hand_size} cards, only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards per simulated hand.
        hand_size: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// No trials were requested.
    #[error("at least one trial is required")]
    NoTrials,
}
