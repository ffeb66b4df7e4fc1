//! Pegging play advice.
//!
//! The advisor is stateless: each call rebuilds the count from the cards
//! already played. [`PeggingRound`] keeps the real count for callers that want
//! the crate to track it.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::Card;
use crate::distribution::RankDistribution;
use crate::error::PeggingError;
use crate::options::PeggingOptions;
use crate::result::CandidateScore;

mod round;

pub use round::{MAX_COUNT, PeggingRound};

/// Returns the count reached by adding the played cards' values together.
#[must_use]
pub fn count(played: &[Card]) -> u32 {
    played.iter().map(|card| u32::from(card.value())).sum()
}

fn score_total(total: u32, options: &PeggingOptions) -> i32 {
    let mut score = 0;

    if total == 15 {
        score += options.fifteen_bonus;
    }

    // True for every legal play. Exactly 31 earns nothing extra and totals
    // over 31 are not refused here.
    if total <= u32::from(MAX_COUNT) {
        score += options.within_limit_bonus;
    }

    if total == 5 {
        score -= options.five_penalty;
    }

    score
}

/// Scores every held card as the next play, in hand order.
///
/// `distribution` is accepted so callers already pass a deck snapshot; the
/// current heuristic does not read it.
#[must_use]
pub fn candidate_scores(
    held: &[Card],
    played: &[Card],
    _distribution: &RankDistribution,
    options: &PeggingOptions,
) -> Vec<CandidateScore> {
    let base = count(played);

    held.iter()
        .map(|&card| {
            let total = base + u32::from(card.value());
            let score = score_total(total, options);
            trace!(%card, total, score, "scored pegging candidate");
            CandidateScore { card, total, score }
        })
        .collect()
}

/// Recommends the next card to play using the given weights.
///
/// The highest scoring card wins; on a tie the earliest held card is kept.
///
/// # Errors
///
/// Returns [`PeggingError::EmptyHand`] if `held` is empty.
pub fn recommend_card_with(
    held: &[Card],
    played: &[Card],
    distribution: &RankDistribution,
    options: &PeggingOptions,
) -> Result<Card, PeggingError> {
    let mut best: Option<CandidateScore> = None;

    for candidate in candidate_scores(held, played, distribution, options) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    let best = best.ok_or(PeggingError::EmptyHand)?;
    debug!(card = %best.card, total = best.total, score = best.score, "recommended pegging play");
    Ok(best.card)
}

/// Recommends the next card to play with the default weights.
///
/// # Errors
///
/// Returns [`PeggingError::EmptyHand`] if `held` is empty.
///
/// # Example
///
/// ```
/// use cribrs::{RankDistribution, parse_hand, recommend_card};
///
/// let held = parse_hand("3c5h").unwrap();
/// let played = parse_hand("kd").unwrap();
/// let card = recommend_card(&held, &played, &RankDistribution::new()).unwrap();
/// assert_eq!(card, held[1]);
/// ```
pub fn recommend_card(
    held: &[Card],
    played: &[Card],
    distribution: &RankDistribution,
) -> Result<Card, PeggingError> {
    recommend_card_with(held, played, distribution, &PeggingOptions::default())
}
