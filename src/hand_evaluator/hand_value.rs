use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::HAND_NAMES;

// divide value by 4096 to obtain the hand category
const HAND_CATEGORY_SHIFT: u32 = 12;
const HAND_RANK_MASK: u32 = (1 << HAND_CATEGORY_SHIFT) - 1;

/// Coarse class of a hand, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub fn from_u32(category: u32) -> Option<HandCategory> {
        HandCategory::ALL
            .iter()
            .copied()
            .find(|c| *c as u32 == category)
    }

    pub fn name(self) -> &'static str {
        HAND_NAMES[self as usize]
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strength of an evaluated hand
///
/// Bits 0-11: rank within the category
/// Bits 12-31: category
///
/// Comparing raw values compares category first, then rank,
/// equal values are exact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandValue(u32);

impl HandValue {
    pub const fn from_raw(value: u32) -> HandValue {
        HandValue(value)
    }

    pub fn new(category: HandCategory, rank: u32) -> HandValue {
        HandValue(((category as u32) << HAND_CATEGORY_SHIFT) | (rank & HAND_RANK_MASK))
    }

    pub const fn category(self) -> u32 {
        self.0 >> HAND_CATEGORY_SHIFT
    }

    pub const fn rank(self) -> u32 {
        self.0 & HAND_RANK_MASK
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// `None` when the table produced a category it does not define
    pub fn hand_category(self) -> Option<HandCategory> {
        HandCategory::from_u32(self.category())
    }

    pub fn name(self) -> &'static str {
        self.hand_category()
            .map(HandCategory::name)
            .unwrap_or(HAND_NAMES[0])
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.name(), self.category(), self.rank())
    }
}
