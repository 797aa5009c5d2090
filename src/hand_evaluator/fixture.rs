//! Test support for the evaluator and the simulator
//!
//! `reference_rank` ranks a hand by brute force over its five card subsets.
//! `build_table` lays those answers out in the rank table node format so a
//! handful of hands can be walked without the full generated table.

use std::collections::{BTreeSet, HashMap};

use lazy_static::lazy_static;

use super::evaluator::Evaluator;
use super::hand_value::{HandCategory, HandValue};
use super::rank_table::{RankTable, NODE_WIDTH, ROOT_NODE};
use crate::card::{get_card_mask, Card};
use crate::constants::RANK_COUNT;

type Key = (HandCategory, [u8; 5]);

lazy_static! {
    /// Every distinct tiebreak key per category, weakest first
    static ref ORDINALS: Vec<Vec<[u8; 5]>> = build_ordinals();
}

/// Ranks hands with `reference_rank`
pub struct ReferenceEvaluator;

impl Evaluator for ReferenceEvaluator {
    fn score(&self, cards: &[Card]) -> HandValue {
        reference_rank(cards)
    }
}

// ranks are grouped by count then rank, both descending
fn five_card_key(ranks: [u8; 5], flush: bool) -> Key {
    let mut counts = [0u8; RANK_COUNT as usize];
    for r in ranks.iter() {
        counts[usize::from(*r)] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (0..RANK_COUNT)
        .rev()
        .filter(|r| counts[usize::from(*r)] > 0)
        .map(|r| (counts[usize::from(r)], r))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let mut key = [0u8; 5];
    for (k, (_, r)) in key.iter_mut().zip(groups.iter()) {
        *k = *r;
    }

    if groups.len() == 5 {
        let straight_high = if key[0] - key[4] == 4 {
            Some(key[0])
        } else if key == [12, 3, 2, 1, 0] {
            Some(3)
        } else {
            None
        };
        if let Some(high) = straight_high {
            let category = if flush {
                HandCategory::StraightFlush
            } else {
                HandCategory::Straight
            };
            return (category, [high, 0, 0, 0, 0]);
        }
    }

    let category = if flush {
        HandCategory::Flush
    } else {
        match (groups[0].0, groups[1].0) {
            (4, _) => HandCategory::FourOfAKind,
            (3, 2) => HandCategory::FullHouse,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, 2) => HandCategory::TwoPair,
            (2, _) => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    };
    (category, key)
}

fn build_ordinals() -> Vec<Vec<[u8; 5]>> {
    let mut keys: Vec<BTreeSet<[u8; 5]>> = vec![BTreeSet::new(); 10];
    let n = RANK_COUNT;
    for a in 0..n {
        for b in a..n {
            for c in b..n {
                for d in c..n {
                    for e in d..n {
                        if a == e {
                            continue;
                        }
                        let ranks = [a, b, c, d, e];
                        let (category, key) = five_card_key(ranks, false);
                        keys[category as usize].insert(key);
                        if a < b && b < c && c < d && d < e {
                            let (category, key) = five_card_key(ranks, true);
                            keys[category as usize].insert(key);
                        }
                    }
                }
            }
        }
    }
    keys.into_iter().map(|k| k.into_iter().collect()).collect()
}

fn five_card_value(hand: &[Card; 5]) -> HandValue {
    let mut ranks = [0u8; 5];
    for (r, c) in ranks.iter_mut().zip(hand.iter()) {
        *r = c.rank();
    }
    let flush = hand.iter().all(|c| c.suit() == hand[0].suit());
    let (category, key) = five_card_key(ranks, flush);
    let ordinal = ORDINALS[category as usize]
        .binary_search(&key)
        .expect("every five card key is enumerated");
    HandValue::new(category, ordinal as u32 + 1)
}

fn select(cards: &[Card], subset: u32) -> Vec<Card> {
    cards
        .iter()
        .enumerate()
        .filter(|(i, _)| (subset & (1u32 << *i)) != 0)
        .map(|(_, c)| *c)
        .collect()
}

/// Best five card value among 5, 6 or 7 cards
pub fn reference_rank(cards: &[Card]) -> HandValue {
    let mut best = HandValue::from_raw(0);
    for subset in 0u32..(1 << cards.len()) {
        if subset.count_ones() != 5 {
            continue;
        }
        let five = select(cards, subset);
        let hand = [five[0], five[1], five[2], five[3], five[4]];
        best = best.max(five_card_value(&hand));
    }
    best
}

/// Rank table holding every subset of the given hands
///
/// Nodes are keyed by card set so any card order reaches the same node.
pub fn build_table(hands: &[Vec<Card>]) -> RankTable {
    let mut builder = TableBuilder::new();
    for hand in hands {
        builder.add_hand(hand);
    }
    RankTable::from_words(builder.words).expect("fixture holds the root node")
}

struct TableBuilder {
    words: Vec<u32>,
    nodes: HashMap<u64, u32>,
}

impl TableBuilder {
    fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(0u64, ROOT_NODE);
        TableBuilder {
            words: vec![0u32; ROOT_NODE as usize + NODE_WIDTH],
            nodes,
        }
    }

    fn node(&mut self, set: u64) -> u32 {
        if let Some(address) = self.nodes.get(&set) {
            return *address;
        }
        let address = self.words.len() as u32;
        self.words.resize(self.words.len() + NODE_WIDTH, 0);
        self.nodes.insert(set, address);
        address
    }

    fn add_hand(&mut self, hand: &[Card]) {
        for subset in 0u32..(1 << hand.len()) {
            let cards = select(hand, subset);
            if cards.len() == 7 {
                continue;
            }
            let set = get_card_mask(&cards);
            let node = self.node(set);
            if cards.len() >= 5 {
                self.words[node as usize] = reference_rank(&cards).value();
            }
            for card in hand.iter().filter(|c| (c.mask() & set) == 0) {
                let next = if cards.len() == 6 {
                    let mut seven = cards.clone();
                    seven.push(*card);
                    reference_rank(&seven).value()
                } else {
                    self.node(set | card.mask())
                };
                let slot = node as usize + usize::from(card.index()) + 1;
                self.words[slot] = next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards;

    fn rank_of(text: &str) -> HandValue {
        reference_rank(&parse_cards(text).unwrap())
    }

    #[test]
    fn test_distinct_values_per_category() {
        let sizes: Vec<usize> = ORDINALS.iter().map(|k| k.len()).collect();
        assert_eq!(sizes, vec![0, 1277, 2860, 858, 858, 10, 1277, 156, 156, 10]);
    }

    #[test]
    fn test_reference_extremes() {
        let royal = rank_of("AsKsQsJsTs");
        assert_eq!(royal, HandValue::new(HandCategory::StraightFlush, 10));
        let steel_wheel = rank_of("5h4h3h2hAh");
        assert_eq!(steel_wheel, HandValue::new(HandCategory::StraightFlush, 1));
        let worst = rank_of("7s5h4d3c2s");
        assert_eq!(worst, HandValue::new(HandCategory::HighCard, 1));
    }

    #[test]
    fn test_reference_ordering() {
        assert!(rank_of("AsAhKdKc2s") > rank_of("AsAhQdQcKs"));
        assert!(rank_of("2s2h2d3c3s") > rank_of("AsKsQsJs9s"));
        assert!(rank_of("6s5h4d3c2s") > rank_of("5s4h3d2cAs"));
        assert!(rank_of("AsAhKd4c3s") > rank_of("AsAhQdJc9s"));
        assert_eq!(rank_of("AsAhKd4c3s"), rank_of("AdAcKs4h3d"));
        assert_eq!(
            rank_of("2s3s4s5s7d8dKh").hand_category(),
            Some(HandCategory::HighCard)
        );
        assert_eq!(
            rank_of("2s3s4s5s7d8dAh").hand_category(),
            Some(HandCategory::Straight)
        );
    }

    #[test]
    fn test_table_layout() {
        let hand = parse_cards("AsKsQsJsTs").unwrap();
        let table = build_table(&[hand.clone()]);
        // root -> As node
        let first = table.read(ROOT_NODE + u32::from(hand[0].index()) + 1);
        assert!(first as usize >= ROOT_NODE as usize + NODE_WIDTH);
        assert_eq!((first as usize - ROOT_NODE as usize) % NODE_WIDTH, 0);
        assert_eq!(table.len(), ROOT_NODE as usize + 32 * NODE_WIDTH);
    }
}
