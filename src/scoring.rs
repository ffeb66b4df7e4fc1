//! Fifteens counting.
//!
//! Only the fifteens component of a cribbage hand is scored here. Pairs,
//! runs, flushes and nobs are not counted, so [`score`] is a partial score.

use alloc::vec::Vec;

use itertools::Itertools;

use crate::card::Card;

/// Sum every qualifying combination must reach.
pub const FIFTEEN: u8 = 15;

/// Points awarded per fifteen.
pub const POINTS_PER_FIFTEEN: u32 = 2;

/// Finds every combination of two or more card values summing to 15.
///
/// Combinations are taken over positions in hand order, smallest size first,
/// so equal value tuples coming from different cards are each reported.
///
/// # Example
///
/// ```
/// use cribrs::{find_fifteens, parse_hand};
///
/// let hand = parse_hand("5h5d5ckc").unwrap();
/// let fifteens = find_fifteens(&hand);
/// assert_eq!(fifteens, vec![vec![5, 10], vec![5, 10], vec![5, 10], vec![5, 5, 5]]);
/// ```
#[must_use]
pub fn find_fifteens(hand: &[Card]) -> Vec<Vec<u8>> {
    let values: Vec<u8> = hand.iter().map(|card| card.value()).collect();

    (2..=values.len())
        .flat_map(|size| values.iter().copied().combinations(size))
        .filter(|combo| combo.iter().map(|&v| u32::from(v)).sum::<u32>() == u32::from(FIFTEEN))
        .collect()
}

/// Scores a hand at 2 points per fifteen.
///
/// # Example
///
/// ```
/// use cribrs::{parse_hand, score};
///
/// assert_eq!(score(&parse_hand("5hkd").unwrap()), 2);
/// assert_eq!(score(&parse_hand("2h3d4c7s").unwrap()), 0);
/// ```
#[must_use]
pub fn score(hand: &[Card]) -> u32 {
    find_fifteens(hand).len() as u32 * POINTS_PER_FIFTEEN
}
