/// Number of cards in standard deck
pub const CARD_COUNT: u8 = 52;

/// Number of ranks in a sandard deck
/// (2 -> A)
pub const RANK_COUNT: u8 = 13;

/// Number of suits in a standard deck
pub const SUIT_COUNT: u8 = 4;

/// Number of community cards at showdown
pub const BOARD_CARDS: usize = 5;

/// Most players that can be dealt in with a full board
///
/// `2 * MAX_PLAYERS + BOARD_CARDS` must not exceed the deck
pub const MAX_PLAYERS: usize = 23;

/// char to u8 rank table
pub const RANK_TO_CHAR: &[char; 13] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// char to u8 suit table
pub static SUIT_TO_CHAR: &[char; 4] = &['s', 'h', 'd', 'c'];

/// Display names indexed by hand category
pub const HAND_NAMES: &[&str; 10] = &[
    "invalid hand",
    "high card",
    "one pair",
    "two pairs",
    "three of a kind",
    "straight",
    "flush",
    "full house",
    "four of a kind",
    "straight flush",
];
