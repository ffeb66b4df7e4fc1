//! Discard selection.

use core::str::FromStr;

use alloc::vec::Vec;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::card::Card;
use crate::error::DiscardError;
use crate::result::DiscardChoice;
use crate::scoring::score;

/// Size of the dealt hand, which fixes how many cards are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawType {
    /// Five cards dealt, one discarded.
    Five,
    /// Six cards dealt, two discarded.
    Six,
}

impl DrawType {
    /// Returns the draw type for a dealt hand size.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::InvalidDrawType`] unless `size` is 5 or 6.
    pub const fn from_hand_size(size: usize) -> Result<Self, DiscardError> {
        match size {
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            _ => Err(DiscardError::InvalidDrawType),
        }
    }

    /// Returns the number of cards to discard.
    #[must_use]
    pub const fn num_discard(self) -> usize {
        match self {
            Self::Five => 1,
            Self::Six => 2,
        }
    }
}

impl FromStr for DrawType {
    type Err = DiscardError;

    /// Parses `"5"` or `"6"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            _ => Err(DiscardError::InvalidDrawType),
        }
    }
}

/// Scores kept cards as they are, with no starter card cut.
///
/// In real cribbage the starter joins the kept hand before it is counted.
/// Adding it would mean averaging over the remaining deck here.
fn kept_score_without_starter(kept: &[Card]) -> u32 {
    score(kept)
}

/// Searches every discard for the one leaving the best fifteens score.
///
/// Candidates are taken by position in hand order, so two cards of the same
/// value are separate candidates. When several discards tie, the first one
/// enumerated wins.
///
/// # Errors
///
/// Returns [`DiscardError::HandTooSmall`] if the hand holds fewer cards than
/// the draw type discards.
///
/// # Example
///
/// ```
/// use cribrs::{DrawType, evaluate_discard, parse_hand};
///
/// let hand = parse_hand("5h5dkc2s7h").unwrap();
/// let choice = evaluate_discard(&hand, DrawType::Five).unwrap();
/// assert_eq!(choice.discard, parse_hand("2s").unwrap());
/// assert_eq!(choice.kept_score, 4);
/// ```
pub fn evaluate_discard(hand: &[Card], draw_type: DrawType) -> Result<DiscardChoice, DiscardError> {
    let num_discard = draw_type.num_discard();
    let mut best: Option<DiscardChoice> = None;

    for positions in (0..hand.len()).combinations(num_discard) {
        let kept: Vec<Card> = hand
            .iter()
            .enumerate()
            .filter(|(i, _)| !positions.contains(i))
            .map(|(_, &card)| card)
            .collect();
        let kept_score = kept_score_without_starter(&kept);
        trace!(?positions, kept_score, "scored discard candidate");

        if best.as_ref().is_none_or(|b| kept_score > b.kept_score) {
            best = Some(DiscardChoice {
                discard: positions.iter().map(|&i| hand[i]).collect(),
                kept,
                kept_score,
            });
        }
    }

    // No candidates at all when the hand is shorter than the discard.
    let choice = best.ok_or(DiscardError::HandTooSmall {
        len: hand.len(),
        discard: num_discard,
    })?;
    debug!(
        discard = ?choice.discard,
        kept_score = choice.kept_score,
        "selected discard"
    );
    Ok(choice)
}

/// Returns the recommended cards to discard.
///
/// See [`evaluate_discard`] for the search and tie-breaking rules.
///
/// # Errors
///
/// Returns [`DiscardError::HandTooSmall`] if the hand holds fewer cards than
/// the draw type discards.
///
/// # Example
///
/// ```
/// use cribrs::{DiscardError, DrawType, parse_hand, select_discard};
///
/// let hand = parse_hand("5h5dkc2s7h9c").unwrap();
/// let draw_type: DrawType = "6".parse().unwrap();
/// assert_eq!(select_discard(&hand, draw_type).unwrap().len(), 2);
/// assert_eq!("7".parse::<DrawType>(), Err(DiscardError::InvalidDrawType));
/// ```
pub fn select_discard(hand: &[Card], draw_type: DrawType) -> Result<Vec<Card>, DiscardError> {
    evaluate_discard(hand, draw_type).map(|choice| choice.discard)
}
