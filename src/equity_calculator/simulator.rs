use std::result::Result;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card::Card;
use crate::constants::{BOARD_CARDS, MAX_PLAYERS};
use crate::hand_evaluator::{Evaluator, HandValue};

const MIN_PLAYERS: usize = 1;
const HOLE_CARDS: usize = 2;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("too few players ({0}), at least 1 is required")]
    TooFewPlayers(usize),
    #[error("too many players ({0}), at most 23 can be dealt in")]
    TooManyPlayers(usize),
    #[error("too many board cards ({0})")]
    TooManyBoardCards(usize),
    #[error("card {0} is dealt more than once")]
    ConflictingCards(Card),
    #[error("at least one trial is required")]
    NoTrials,
    #[error("at least one thread is required")]
    NoThreads,
    #[error("unable to seed worker rng")]
    Seed(#[source] rand::Error),
    #[error("simulation worker panicked")]
    WorkerPanicked,
}

/// Win count over the trials played so far
///
/// A trial is won only when the hero beats every opponent outright,
/// a tie with anyone counts as not won.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResults {
    pub wins: u64,
    pub trials: u64,
}

impl SimulationResults {
    /// Fraction of trials won, 0 before any trial is played
    pub fn equity(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.wins as f64 / self.trials as f64
    }

    /// Binomial standard error of `equity`
    pub fn std_error(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let p = self.equity();
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }

    pub fn merge(&mut self, other: &SimulationResults) {
        self.wins += other.wins;
        self.trials += other.trials;
    }
}

/// Monte carlo showdown simulator for one hero hand
///
/// Owns a scratch deck that is reshuffled for every trial, so one
/// simulator must not be shared between threads.
pub struct Simulator<'a, E: Evaluator> {
    evaluator: &'a E,
    hero: [Card; HOLE_CARDS],
    /// known community cards followed by the cards dealt this trial
    board: Vec<Card>,
    /// number of known community cards
    fixed_board: usize,
    n_opponents: usize,
    /// every card not held by the hero or on the known board
    deck: Vec<Card>,
    results: SimulationResults,
}

impl<'a, E: Evaluator> Simulator<'a, E> {
    /// Validates the deal and prepares the remaining deck
    ///
    /// # Arguments
    ///
    /// * `evaluator` Ranks the seven card hands
    /// * `hero` Hero hole cards
    /// * `board` Known community cards (0-5)
    /// * `players` Players dealt in, hero included (1-23)
    pub fn new(
        evaluator: &'a E,
        hero: [Card; HOLE_CARDS],
        board: &[Card],
        players: usize,
    ) -> Result<Self, SimulatorError> {
        if players < MIN_PLAYERS {
            return Err(SimulatorError::TooFewPlayers(players));
        }
        if players > MAX_PLAYERS {
            return Err(SimulatorError::TooManyPlayers(players));
        }
        if board.len() > BOARD_CARDS {
            return Err(SimulatorError::TooManyBoardCards(board.len()));
        }

        let mut used_cards_mask = 0u64;
        for card in hero.iter().chain(board.iter()) {
            if (used_cards_mask & card.mask()) != 0 {
                return Err(SimulatorError::ConflictingCards(*card));
            }
            used_cards_mask |= card.mask();
        }

        let deck: Vec<Card> = Card::deck()
            .filter(|c| (used_cards_mask & c.mask()) == 0)
            .collect();
        let mut fixed = Vec::with_capacity(BOARD_CARDS);
        fixed.extend_from_slice(board);

        Ok(Simulator {
            evaluator,
            hero,
            board: fixed,
            fixed_board: board.len(),
            n_opponents: players - 1,
            deck,
            results: SimulationResults::default(),
        })
    }

    /// Plays `trials` more deals and returns the running totals
    pub fn run<R: Rng + ?Sized>(&mut self, trials: u64, rng: &mut R) -> &SimulationResults {
        for _ in 0..trials {
            self.deal(rng);
            if self.hero_wins() {
                self.results.wins += 1;
            }
            self.results.trials += 1;
        }
        &self.results
    }

    pub fn results(&self) -> &SimulationResults {
        &self.results
    }

    /// Shuffles the remaining deck, opponents are dealt first then the board
    fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
        let n_hole_cards = HOLE_CARDS * self.n_opponents;
        let missing = BOARD_CARDS - self.fixed_board;
        self.board.truncate(self.fixed_board);
        self.board
            .extend_from_slice(&self.deck[n_hole_cards..n_hole_cards + missing]);
    }

    fn opponents(&self) -> std::slice::ChunksExact<'_, Card> {
        self.deck[..HOLE_CARDS * self.n_opponents].chunks_exact(HOLE_CARDS)
    }

    fn showdown_value(&self, hole_cards: &[Card]) -> HandValue {
        let mut hand = [hole_cards[0]; HOLE_CARDS + BOARD_CARDS];
        hand[..HOLE_CARDS].copy_from_slice(hole_cards);
        hand[HOLE_CARDS..].copy_from_slice(&self.board);
        self.evaluator.score(&hand)
    }

    fn hero_wins(&self) -> bool {
        let hero_value = self.showdown_value(&self.hero);
        self.opponents()
            .all(|hole| self.showdown_value(hole) < hero_value)
    }
}

/// Estimates the probability that `hero` holds the only best hand
///
/// Returns wins / trials
///
/// # Arguments
///
/// * `evaluator` Ranks the seven card hands
/// * `hero` Hero hole cards
/// * `board` Known community cards (0-5)
/// * `players` Players dealt in, hero included (1-23), so heads up is 2
///   and 1 always returns 1.0. This is not an opponent count.
/// * `trials` Number of deals to simulate
/// * `rng` Source of every shuffle
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use poker_odds::card::parse_cards;
/// use poker_odds::equity_calculator::estimate;
/// use poker_odds::hand_evaluator::{RankTable, TableEvaluator};
///
/// let table = Arc::new(RankTable::open("data/HandRanks.dat").unwrap());
/// let evaluator = TableEvaluator::new(table);
/// let hero = parse_cards("AsAc").unwrap();
/// let equity = estimate(&evaluator, [hero[0], hero[1]], &[], 5, 1000, &mut rand::thread_rng()).unwrap();
/// ```
pub fn estimate<E: Evaluator, R: Rng + ?Sized>(
    evaluator: &E,
    hero: [Card; HOLE_CARDS],
    board: &[Card],
    players: usize,
    trials: u64,
    rng: &mut R,
) -> Result<f64, SimulatorError> {
    if trials == 0 {
        return Err(SimulatorError::NoTrials);
    }
    let mut sim = Simulator::new(evaluator, hero, board, players)?;
    let results = *sim.run(trials, rng);
    log::debug!(
        "{}{} vs {} players: {} / {} won",
        hero[0],
        hero[1],
        players,
        results.wins,
        results.trials
    );
    Ok(results.equity())
}

/// Same as `estimate` with trials split across `n_threads` workers
///
/// Each worker owns a `SmallRng` seeded from the thread rng and its own
/// scratch deck, win counts are summed once every worker is done.
pub fn estimate_parallel<E: Evaluator>(
    evaluator: &E,
    hero: [Card; HOLE_CARDS],
    board: &[Card],
    players: usize,
    trials: u64,
    n_threads: usize,
) -> Result<f64, SimulatorError> {
    if trials == 0 {
        return Err(SimulatorError::NoTrials);
    }
    if n_threads == 0 {
        return Err(SimulatorError::NoThreads);
    }
    // reject bad deals before any thread is spawned
    Simulator::new(evaluator, hero, board, players)?;

    let mut rng = thread_rng();
    let rngs = (0..n_threads)
        .map(|_| SmallRng::from_rng(&mut rng))
        .collect::<Result<Vec<SmallRng>, rand::Error>>()
        .map_err(SimulatorError::Seed)?;
    let n = n_threads as u64;

    let results = crossbeam::scope(|scope| -> Result<SimulationResults, SimulatorError> {
        let handles: Vec<_> = rngs
            .into_iter()
            .enumerate()
            .map(|(i, mut rng)| {
                let share = trials / n + if (i as u64) < trials % n { 1 } else { 0 };
                scope.spawn(move |_| -> Result<SimulationResults, SimulatorError> {
                    let mut sim = Simulator::new(evaluator, hero, board, players)?;
                    Ok(*sim.run(share, &mut rng))
                })
            })
            .collect();

        let mut total = SimulationResults::default();
        for handle in handles {
            let batch = handle.join().map_err(|_| SimulatorError::WorkerPanicked)??;
            total.merge(&batch);
        }
        Ok(total)
    })
    .map_err(|_| SimulatorError::WorkerPanicked)??;

    log::debug!(
        "{}{} vs {} players on {} threads: {} / {} won",
        hero[0],
        hero[1],
        players,
        n_threads,
        results.wins,
        results.trials
    );
    Ok(results.equity())
}
