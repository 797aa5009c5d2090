use std::sync::Arc;

use thiserror::Error;

use super::hand_value::HandValue;
use super::rank_table::{RankTable, ROOT_NODE};
use crate::card::Card;

pub const MIN_HAND_CARDS: usize = 5;
pub const MAX_HAND_CARDS: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluatorError {
    #[error("hand must be 5, 6, or 7 cards, but {0} cards were provided")]
    InvalidLength(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("card index {0} is out of range (0-51)")]
    CardOutOfRange(u8),
}

/// Anything that can rank a showdown hand
pub trait Evaluator: Sync {
    /// Ranks 5, 6 or 7 distinct cards
    ///
    /// Callers guarantee the hand is well formed, see `check_hand`
    fn score(&self, cards: &[Card]) -> HandValue;
}

/// Checks hand length and that no card is repeated
pub fn check_hand(cards: &[Card]) -> Result<(), EvaluatorError> {
    if cards.len() < MIN_HAND_CARDS || cards.len() > MAX_HAND_CARDS {
        return Err(EvaluatorError::InvalidLength(cards.len()));
    }
    let mut used_cards_mask = 0u64;
    for card in cards {
        if (used_cards_mask & card.mask()) != 0 {
            return Err(EvaluatorError::DuplicateCard(*card));
        }
        used_cards_mask |= card.mask();
    }
    Ok(())
}

// table card codes start at 1, slot 0 of a node closes out the hand
#[inline]
fn table_code(card: Card) -> u32 {
    u32::from(card.index()) + 1
}

/// Walks the rank table one card at a time
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use poker_odds::card::parse_cards;
/// use poker_odds::hand_evaluator::{RankTable, TableEvaluator};
///
/// let table = Arc::new(RankTable::open("data/HandRanks.dat").unwrap());
/// let evaluator = TableEvaluator::new(table);
/// let hand = parse_cards("AsKsQsJsTs").unwrap();
/// let value = evaluator.evaluate(&hand).unwrap();
/// assert_eq!(value.name(), "straight flush");
/// ```
#[derive(Debug, Clone)]
pub struct TableEvaluator {
    table: Arc<RankTable>,
}

impl TableEvaluator {
    pub fn new(table: Arc<RankTable>) -> Self {
        TableEvaluator { table }
    }

    /// Evaluates a hand of 5, 6 or 7 distinct cards
    ///
    /// 3 card hands must be padded to 5 before they get here
    pub fn evaluate(&self, cards: &[Card]) -> Result<HandValue, EvaluatorError> {
        check_hand(cards)?;
        Ok(self.score(cards))
    }

    /// Evaluates raw 0-51 card indices
    pub fn evaluate_indices(&self, indices: &[u8]) -> Result<HandValue, EvaluatorError> {
        let cards = indices
            .iter()
            .map(|&i| Card::new(i).map_err(|_| EvaluatorError::CardOutOfRange(i)))
            .collect::<Result<Vec<Card>, EvaluatorError>>()?;
        self.evaluate(&cards)
    }
}

impl Evaluator for TableEvaluator {
    fn score(&self, cards: &[Card]) -> HandValue {
        let mut node = ROOT_NODE;
        for card in cards {
            node = self.table.read(node + table_code(*card));
        }
        // the seventh card already lands on a hand value
        if cards.len() < MAX_HAND_CARDS {
            node = self.table.read(node);
        }
        HandValue::from_raw(node)
    }
}
