//! # Poker Odds
//! A texas holdem hand ranking and equity library
//!
//! Currently supports
//!  - 5, 6 and 7 card hand evaluation from a precomputed rank table
//!  - monte carlo hole cards vs. random hands equity estimation
//!
//! ## Hand Evaluator
//!
//! ```no_run
//! use std::sync::Arc;
//! use poker_odds::card::parse_cards;
//! use poker_odds::hand_evaluator::{RankTable, TableEvaluator};
//! // the generated table is loaded once and shared
//! let table = Arc::new(RankTable::open("data/HandRanks.dat").unwrap());
//! let evaluator = TableEvaluator::new(table);
//! let hand = parse_cards("AsAhKdKc2s").unwrap();
//! let value = evaluator.evaluate(&hand).unwrap();
//! println!("{} {}", value.name(), value.rank());
//! ```
//!
//! ## Equity Calculator
//!
//! ```no_run
//! use poker_odds::card::parse_cards;
//! use poker_odds::config::Config;
//! use poker_odds::equity_calculator::estimate_parallel;
//! let config = Config::default();
//! let evaluator = config.evaluator().unwrap();
//! let hero = parse_cards("AsAc").unwrap();
//! let board = parse_cards("2h3d4c").unwrap();
//! let n_players = 5;
//! let equity = estimate_parallel(
//!     &evaluator,
//!     [hero[0], hero[1]],
//!     &board,
//!     n_players,
//!     config.trials,
//!     config.threads,
//! ).unwrap();
//! ```

pub use read_write;

pub mod card;
pub mod config;
pub mod constants;
pub mod hand_evaluator;

pub mod equity_calculator;
