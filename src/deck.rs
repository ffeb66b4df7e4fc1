//! Deck bookkeeping: dealing, discards and rank counts.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::distribution::RankDistribution;
use crate::error::{DealError, ProbabilityError};

/// A single 52-card deck with a discard pile.
///
/// Cards are dealt from the end of the deck. Shuffling uses a seeded
/// `ChaCha8Rng`, so a seed always produces the same order.
///
/// # Example
///
/// ```
/// use cribrs::Deck;
///
/// let mut deck = Deck::new(42);
/// let hand = deck.deal(6).unwrap();
/// assert_eq!(hand.len(), 6);
/// assert_eq!(deck.remaining(), 46);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_cards(&mut rng);

        Self {
            cards,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Creates an unshuffled deck, suit by suit in `h, d, c, s` order.
    #[must_use]
    pub fn ordered() -> Self {
        Self {
            cards: Self::fresh_cards(),
            discard_pile: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    fn fresh_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards
    }

    fn create_cards(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Self::fresh_cards();
        cards.shuffle(rng);
        cards
    }

    /// Shuffles the undealt cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals `count` cards from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `count` cards
    /// remain. Nothing is dealt in that case.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DealError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        let dealt: Vec<Card> = self.cards.drain(remaining - count..).rev().collect();
        debug!(count, remaining = self.cards.len(), "dealt cards");
        Ok(dealt)
    }

    /// Moves cards to the discard pile.
    pub fn discard(&mut self, cards: &[Card]) {
        self.discard_pile.extend_from_slice(cards);
    }

    /// Removes a specific card from the undealt cards.
    ///
    /// Returns `false` if the card is not in the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        let Some(index) = self.cards.iter().position(|&c| c == card) else {
            return false;
        };
        self.cards.remove(index);
        true
    }

    /// Estimates how often a random hand drawn from the undealt cards
    /// satisfies `predicate`, as a percentage.
    ///
    /// Each trial shuffles a copy of the undealt cards with the deck's RNG and
    /// tests the first `hand_size` of them. The deck's cards are not changed,
    /// but the RNG advances.
    ///
    /// # Errors
    ///
    /// Returns [`ProbabilityError::NotEnoughCards`] if `hand_size` exceeds the
    /// undealt cards, or [`ProbabilityError::NoTrials`] if `trials` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashSet;
    ///
    /// use cribrs::Deck;
    ///
    /// let mut deck = Deck::new(11);
    /// let unique_ranks = deck
    ///     .hand_probability(5, 1_000, |hand| {
    ///         hand.iter().map(|card| card.rank).collect::<HashSet<_>>().len() == hand.len()
    ///     })
    ///     .unwrap();
    /// assert!(unique_ranks > 0.0 && unique_ranks < 100.0);
    /// ```
    pub fn hand_probability(
        &mut self,
        hand_size: usize,
        trials: usize,
        predicate: impl Fn(&[Card]) -> bool,
    ) -> Result<f64, ProbabilityError> {
        let remaining = self.cards.len();
        if hand_size > remaining {
            return Err(ProbabilityError::NotEnoughCards {
                hand_size,
                remaining,
            });
        }
        if trials == 0 {
            return Err(ProbabilityError::NoTrials);
        }

        let mut scratch = self.cards.clone();
        let mut successes = 0usize;
        for _ in 0..trials {
            scratch.shuffle(&mut self.rng);
            if predicate(&scratch[..hand_size]) {
                successes += 1;
            }
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for trial counts"
        )]
        let probability = successes as f64 / trials as f64 * 100.0;
        debug!(hand_size, trials, successes, probability, "estimated hand probability");
        Ok(probability)
    }

    /// Restores all 52 cards, empties the discard pile and reshuffles.
    pub fn reset(&mut self) {
        self.cards = Self::create_cards(&mut self.rng);
        self.discard_pile.clear();
    }

    /// Returns the undealt cards; the next card dealt is the last one.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the percentage of each rank among the undealt cards.
    ///
    /// Ranks with no cards left are omitted; an empty deck gives an empty
    /// distribution.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Deck, Rank};
    ///
    /// let deck = Deck::ordered();
    /// let distribution = deck.rank_distribution();
    /// assert_eq!(distribution.len(), 13);
    /// assert!((distribution.get(Rank::Five).unwrap() - 100.0 / 13.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn rank_distribution(&self) -> RankDistribution {
        let mut counts = [0usize; Rank::ALL.len()];
        for card in &self.cards {
            counts[card.rank as usize] += 1;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let total = self.cards.len() as f64;

        Rank::ALL
            .iter()
            .zip(counts)
            .filter(|&(_, count)| count > 0)
            .map(|(&rank, count)| {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for card counts"
                )]
                let share = count as f64 / total * 100.0;
                (rank, share)
            })
            .collect()
    }
}
