//! Card types and the shared rank valuation.

use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Parses a suit symbol (`h`, `d`, `c` or `s`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSuit`] for any other symbol.
    pub const fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol.to_ascii_lowercase() {
            'h' => Ok(Self::Hearts),
            'd' => Ok(Self::Diamonds),
            'c' => Ok(Self::Clubs),
            's' => Ok(Self::Spades),
            _ => Err(CardError::UnknownSuit(symbol)),
        }
    }

    /// Returns the lowercase suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        }
    }

    /// Returns the suit name (`Hearts`, `Diamonds`, `Clubs`, `Spades`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in deck order (`2` through `k`, then `a`).
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Parses a rank symbol from `2,3,4,5,6,7,8,9,t,j,q,k,a` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownRank`] for any other symbol.
    pub const fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol.to_ascii_lowercase() {
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            't' => Ok(Self::Ten),
            'j' => Ok(Self::Jack),
            'q' => Ok(Self::Queen),
            'k' => Ok(Self::King),
            'a' => Ok(Self::Ace),
            _ => Err(CardError::UnknownRank(symbol)),
        }
    }

    /// Returns the lowercase rank symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 't',
            Self::Jack => 'j',
            Self::Queen => 'q',
            Self::King => 'k',
            Self::Ace => 'a',
        }
    }

    /// Returns the rank name: numerals as digits, court cards and the ace in full.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Returns the cribbage point value of the rank.
    ///
    /// Numerals count their face value, tens and face cards count 10 and the
    /// ace counts 1. Every scorer in the crate goes through this lookup.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 1,
        }
    }
}

/// Returns the cribbage point value of a rank symbol.
///
/// # Errors
///
/// Returns [`CardError::UnknownRank`] if `symbol` is not a rank symbol.
///
/// # Example
///
/// ```
/// use cribrs::{CardError, value};
///
/// assert_eq!(value('7'), Ok(7));
/// assert_eq!(value('q'), Ok(10));
/// assert_eq!(value('a'), Ok(1));
/// assert_eq!(value('x'), Err(CardError::UnknownRank('x')));
/// ```
pub const fn value(symbol: char) -> Result<u8, CardError> {
    match Rank::from_symbol(symbol) {
        Ok(rank) => Ok(rank.value()),
        Err(err) => Err(err),
    }
}

/// A playing card.
///
/// Suit never affects scoring; it only distinguishes otherwise equal cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the cribbage point value of the card.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

/// Two-symbol notation, rank then suit (`5h`, `tc`, `ks`). The alternate
/// form `{:#}` spells the card out (`10 of Clubs`).
///
/// ```
/// use cribrs::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Clubs);
/// assert_eq!(format!("{card}"), "tc");
/// assert_eq!(format!("{card:#}"), "10 of Clubs");
/// ```
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} of {}", self.rank.name(), self.suit.name())
        } else {
            write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Self::new(Rank::from_symbol(rank)?, Suit::from_symbol(suit)?))
            }
            _ => Err(CardError::InvalidNotation),
        }
    }
}

/// Parses a run of two-symbol card notations such as `"kdjc3h7s"`.
///
/// # Errors
///
/// Returns a [`CardError`] if any pair is not a valid card, or
/// [`CardError::InvalidNotation`] if a trailing symbol is left over.
///
/// # Example
///
/// ```
/// use cribrs::{Card, Rank, Suit, parse_hand};
///
/// let hand = parse_hand("kdjc3h7s").unwrap();
/// assert_eq!(hand.len(), 4);
/// assert_eq!(hand[0], Card::new(Rank::King, Suit::Diamonds));
/// ```
pub fn parse_hand(notation: &str) -> Result<Vec<Card>, CardError> {
    let symbols: Vec<char> = notation.chars().collect();
    symbols
        .chunks(2)
        .map(|pair| match *pair {
            [rank, suit] => Ok(Card::new(Rank::from_symbol(rank)?, Suit::from_symbol(suit)?)),
            _ => Err(CardError::InvalidNotation),
        })
        .collect()
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
