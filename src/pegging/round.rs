use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::distribution::RankDistribution;
use crate::error::{PeggingError, PlayError};
use crate::options::PeggingOptions;
use crate::result::PlayOutcome;

use super::recommend_card_with;

/// Highest count a pegging sequence may reach.
pub const MAX_COUNT: u8 = 31;

/// Running count of one pegging sequence.
///
/// Cards are appended as they are played by any player. Reaching exactly 31
/// ends the sequence: the count returns to 0 and the played cards are cleared.
///
/// ```
/// use cribrs::{PeggingRound, parse_hand};
///
/// let mut round = PeggingRound::new();
/// for card in parse_hand("kdqhjs").unwrap() {
///     round.play(card).unwrap();
/// }
/// assert_eq!(round.total(), 30);
///
/// let outcome = round.play("ac".parse().unwrap()).unwrap();
/// assert!(outcome.reset);
/// assert_eq!(round.total(), 0);
/// assert!(round.played().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeggingRound {
    total: u8,
    played: Vec<Card>,
    history: Vec<Card>,
}

impl PeggingRound {
    /// Creates a round with a count of 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            played: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Returns the current count.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the cards counted since the last reset.
    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// Returns every card played this round, across resets.
    #[must_use]
    pub fn history(&self) -> &[Card] {
        &self.history
    }

    /// Plays a card onto the count.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::OverThirtyOne`] if the card would take the count
    /// past 31. The round is left unchanged.
    pub fn play(&mut self, card: Card) -> Result<PlayOutcome, PlayError> {
        let total = self.total + card.value();
        if total > MAX_COUNT {
            return Err(PlayError::OverThirtyOne { total });
        }

        self.played.push(card);
        self.history.push(card);

        let reset = total == MAX_COUNT;
        if reset {
            debug!(%card, "count reached 31, resetting");
            self.reset();
        } else {
            self.total = total;
        }

        Ok(PlayOutcome { card, total, reset })
    }

    /// Starts a new count at 0, as when every player has said go.
    pub fn reset(&mut self) {
        self.total = 0;
        self.played.clear();
    }

    /// Recommends which held card to play next onto the current count.
    ///
    /// # Errors
    ///
    /// Returns [`PeggingError::EmptyHand`] if `held` is empty.
    pub fn recommend(
        &self,
        held: &[Card],
        distribution: &RankDistribution,
        options: &PeggingOptions,
    ) -> Result<Card, PeggingError> {
        recommend_card_with(held, &self.played, distribution, options)
    }
}
