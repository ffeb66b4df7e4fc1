//! Pegging advisor configuration.

/// Weights used by the pegging advisor to score a candidate play.
///
/// The defaults reproduce the stock heuristic: 2 points for hitting 15, 1 for
/// staying within 31, and a 1 point penalty for leaving the count on 5.
///
/// ```
/// use cribrs::PeggingOptions;
///
/// let options = PeggingOptions::default()
///     .with_fifteen_bonus(3)
///     .with_five_penalty(2);
/// assert_eq!(options.fifteen_bonus, 3);
/// assert_eq!(options.within_limit_bonus, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeggingOptions {
    /// Added when the play brings the count to exactly 15.
    pub fifteen_bonus: i32,
    /// Added when the count after the play is at most 31.
    ///
    /// Every legal play satisfies this, so it acts as a constant offset. A
    /// count of exactly 31 earns nothing extra and plays over 31 are not
    /// rejected here; [`PeggingRound`](crate::PeggingRound) enforces the limit.
    pub within_limit_bonus: i32,
    /// Subtracted when the play leaves the count on 5.
    pub five_penalty: i32,
}

impl Default for PeggingOptions {
    fn default() -> Self {
        Self {
            fifteen_bonus: 2,
            within_limit_bonus: 1,
            five_penalty: 1,
        }
    }
}

impl PeggingOptions {
    /// Sets the bonus for reaching 15.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::PeggingOptions;
    ///
    /// let options = PeggingOptions::default().with_fifteen_bonus(4);
    /// assert_eq!(options.fifteen_bonus, 4);
    /// ```
    #[must_use]
    pub const fn with_fifteen_bonus(mut self, bonus: i32) -> Self {
        self.fifteen_bonus = bonus;
        self
    }

    /// Sets the bonus for a count at or under 31.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::PeggingOptions;
    ///
    /// let options = PeggingOptions::default().with_within_limit_bonus(0);
    /// assert_eq!(options.within_limit_bonus, 0);
    /// ```
    #[must_use]
    pub const fn with_within_limit_bonus(mut self, bonus: i32) -> Self {
        self.within_limit_bonus = bonus;
        self
    }

    /// Sets the penalty for leaving the count on 5.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::PeggingOptions;
    ///
    /// let options = PeggingOptions::default().with_five_penalty(0);
    /// assert_eq!(options.five_penalty, 0);
    /// ```
    #[must_use]
    pub const fn with_five_penalty(mut self, penalty: i32) -> Self {
        self.five_penalty = penalty;
        self
    }
}
