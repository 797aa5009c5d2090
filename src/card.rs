/*
 * Cards are stored as a single u8 index
 * the value of the index is 4 * rank + suit
 */

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("card index {0} is out of range (0-51)")]
    OutOfRange(u8),
    #[error("invalid rank character '{0}'")]
    InvalidRank(char),
    #[error("invalid suit character '{0}'")]
    InvalidSuit(char),
    #[error("card string '{0}' must be a rank followed by a suit")]
    InvalidLength(String),
}

/// A single playing card
///
/// Ranks are ordered 2 -> A and suits follow `SUIT_TO_CHAR`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card from its 0-51 index
    pub fn new(index: u8) -> Result<Card, CardError> {
        if index >= CARD_COUNT {
            return Err(CardError::OutOfRange(index));
        }
        Ok(Card(index))
    }

    /// Create a card from rank (0 = deuce) and suit
    pub fn from_rank_suit(rank: u8, suit: u8) -> Result<Card, CardError> {
        if rank >= RANK_COUNT || suit >= SUIT_COUNT {
            return Err(CardError::OutOfRange(rank.saturating_mul(4).saturating_add(suit)));
        }
        Ok(Card(4 * rank + suit))
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn rank(self) -> u8 {
        self.0 >> 2
    }

    pub const fn suit(self) -> u8 {
        self.0 & 3
    }

    /// Single bit mask for this card
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    /// All 52 cards in index order
    pub fn deck() -> impl Iterator<Item = Card> {
        (0..CARD_COUNT).map(Card)
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Card::new(index)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    /// Writes card to string
    ///
    /// # Example
    /// ```
    /// // prints 'As'
    /// use poker_odds::card::Card;
    /// let card = Card::new(48).unwrap();
    /// println!("{}", card);
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            RANK_TO_CHAR[usize::from(self.rank())],
            SUIT_TO_CHAR[usize::from(self.suit())]
        )
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a two character card name, case insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().to_lowercase().chars().collect();
        if chars.len() != 2 {
            return Err(CardError::InvalidLength(s.to_string()));
        }
        let rank = char_to_rank(chars[0]);
        if rank == u8::MAX {
            return Err(CardError::InvalidRank(chars[0]));
        }
        let suit = char_to_suit(chars[1]);
        if suit == u8::MAX {
            return Err(CardError::InvalidSuit(chars[1]));
        }
        Card::from_rank_suit(rank, suit)
    }
}

/// Convert lowercase rank char to u8
///
/// # Example
///
/// ```
/// use poker_odds::card::char_to_rank;
/// let rank = char_to_rank('a');
/// ```
pub fn char_to_rank(c: char) -> u8 {
    match c {
        'a' => 12,
        'k' => 11,
        'q' => 10,
        'j' => 9,
        't' => 8,
        '9' => 7,
        '8' => 6,
        '7' => 5,
        '6' => 4,
        '5' => 3,
        '4' => 2,
        '3' => 1,
        '2' => 0,
        _ => u8::MAX,
    }
}

/// Convert lowercase suit char to u8
pub fn char_to_suit(c: char) -> u8 {
    match c {
        's' => 0,
        'h' => 1,
        'd' => 2,
        'c' => 3,
        _ => u8::MAX,
    }
}

/// Parses a string of concatenated cards
///
/// # Arguments
///
/// * `text` - A card string such as "AsKd"
///
/// # Example
///
/// ```
/// use poker_odds::card::parse_cards;
/// let board = parse_cards("As2hQd").unwrap();
/// assert_eq!(board.len(), 3);
/// ```
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardError> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() % 2 != 0 {
        return Err(CardError::InvalidLength(text.to_string()));
    }
    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().parse())
        .collect()
}

/// Converts cards into a 64bit card mask
pub fn get_card_mask(cards: &[Card]) -> u64 {
    cards.iter().fold(0u64, |mask, c| mask | c.mask())
}

/// Converts 64 bit card mask to string representation
pub fn mask_to_string(card_mask: u64) -> String {
    Card::deck()
        .filter(|c| (c.mask() & card_mask) != 0)
        .map(|c| c.to_string())
        .collect()
}
