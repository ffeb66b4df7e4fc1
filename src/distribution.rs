//! Rank-frequency snapshots of undealt cards.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Rank;

/// Percentage of each rank among the cards remaining in a deck.
///
/// A snapshot is taken with [`Deck::rank_distribution`](crate::Deck::rank_distribution)
/// or built by hand with [`FromIterator`]. Ranks with no remaining cards are
/// absent rather than stored as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankDistribution {
    shares: HashMap<Rank, f64>,
}

impl RankDistribution {
    /// Creates an empty distribution.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shares: HashMap::new(),
        }
    }

    /// Sets the share for a rank, returning the previous one.
    pub fn insert(&mut self, rank: Rank, share: f64) -> Option<f64> {
        self.shares.insert(rank, share)
    }

    /// Returns the share recorded for a rank.
    #[must_use]
    pub fn get(&self, rank: Rank) -> Option<f64> {
        self.shares.get(&rank).copied()
    }

    /// Iterates over `(rank, share)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, f64)> + '_ {
        self.shares.iter().map(|(&rank, &share)| (rank, share))
    }

    /// Returns the number of ranks present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Returns whether no rank is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

impl FromIterator<(Rank, f64)> for RankDistribution {
    fn from_iter<I: IntoIterator<Item = (Rank, f64)>>(iter: I) -> Self {
        Self {
            shares: iter.into_iter().collect(),
        }
    }
}
