mod evaluator;
mod hand_value;
mod rank_table;

#[cfg(test)]
pub(crate) mod fixture;

pub use evaluator::{check_hand, Evaluator, EvaluatorError, TableEvaluator, MAX_HAND_CARDS, MIN_HAND_CARDS};
pub use hand_value::{HandCategory, HandValue};
pub use rank_table::{RankTable, TableError, NODE_WIDTH, ROOT_NODE, STANDARD_TABLE_WORDS};
