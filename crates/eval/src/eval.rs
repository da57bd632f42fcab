// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluation.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use handsight_cards::{Card, Rank, Suit, for_each_combination};

/// The minimum number of cards needed to make a hand.
pub const MIN_CARDS: usize = 5;

/// Error returned when the cards to evaluate do not make a valid hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Fewer than five cards.
    #[error("at least 5 cards are needed to evaluate a hand, got {0}")]
    NotEnoughCards(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// The category of a poker hand, from the weakest to the strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandCategory {
    /// No pair, the highest card plays.
    HighCard = 1,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five consecutive ranks of the same suit.
    StraightFlush,
    /// Ten to Ace of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category numeric value, 1 for high card up to 10 for royal flush.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The category name used in reports, i.e. `FULL_HOUSE`.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "HIGH_CARD",
            HandCategory::OnePair => "ONE_PAIR",
            HandCategory::TwoPair => "TWO_PAIR",
            HandCategory::ThreeOfAKind => "THREE_OF_A_KIND",
            HandCategory::Straight => "STRAIGHT",
            HandCategory::Flush => "FLUSH",
            HandCategory::FullHouse => "FULL_HOUSE",
            HandCategory::FourOfAKind => "FOUR_OF_A_KIND",
            HandCategory::StraightFlush => "STRAIGHT_FLUSH",
            HandCategory::RoyalFlush => "ROYAL_FLUSH",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{s}")
    }
}

/// The value of the best five cards hand in a set of cards.
///
/// Hands are ordered by category first, within the same category by the
/// tie-break values. The values depend on the category:
///
/// - straight and straight flush: the straight high rank, 5 for the wheel.
/// - four, three of a kind, one pair: the multiple rank followed by the
///   kickers ranks in descending order, up to five values.
/// - full house: the three of a kind rank and the pair rank.
/// - two pair: the highest pair, the lowest pair and the best kicker.
/// - flush and high card: the five highest ranks in descending order.
///
/// Values are compared position by position, if one sequence is a prefix of
/// the other the hands are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandResult {
    /// The hand category.
    pub category: HandCategory,
    /// The tie-break values.
    pub values: Vec<u8>,
}

impl HandResult {
    /// Creates a hand result.
    pub fn new(category: HandCategory, values: Vec<u8>) -> Self {
        Self { category, values }
    }
}

impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandResult {}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| compare_values(&self.values, &other.values))
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.values)
    }
}

/// Compares two tie-break sequences up to the shortest length.
pub fn compare_values(lhs: &[u8], rhs: &[u8]) -> Ordering {
    lhs.iter()
        .zip(rhs)
        .map(|(l, r)| l.cmp(r))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Evaluates the best five cards hand in `cards`.
///
/// The cards must be at least five and unique.
pub fn evaluate(cards: &[Card]) -> Result<HandResult, EvalError> {
    if cards.len() < MIN_CARDS {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }

    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*card));
        }
        seen |= bit;
    }

    Ok(Tally::new(cards).best_hand())
}

/// Returns the high rank of a straight in the ranks mask.
///
/// Bit `r` of the mask is set for each rank value `r`, the Ace also plays
/// low for the wheel.
fn straight_high(mask: u16) -> Option<u8> {
    let mask = if mask & (1 << Rank::Ace.value()) != 0 {
        mask | (1 << 1)
    } else {
        mask
    };

    (Rank::Five.value()..=Rank::Ace.value())
        .rev()
        .find(|&high| {
            let run = 0b11111u16 << (high - 4);
            mask & run == run
        })
}

fn ranks_mask(cards: &[Card]) -> u16 {
    cards.iter().fold(0, |m, c| m | (1 << c.rank().value()))
}

/// Cards counts by rank and suit.
struct Tally<'a> {
    cards: &'a [Card],
    /// Number of cards for each rank value, indices 0 and 1 unused.
    ranks: [u8; 15],
    suits: [u8; 4],
}

impl<'a> Tally<'a> {
    fn new(cards: &'a [Card]) -> Self {
        let mut ranks = [0; 15];
        let mut suits = [0; 4];
        for c in cards {
            ranks[c.rank().value() as usize] += 1;
            suits[c.suit() as usize] += 1;
        }

        Self {
            cards,
            ranks,
            suits,
        }
    }

    /// Checks categories from the strongest down, the first match wins.
    fn best_hand(&self) -> HandResult {
        use HandCategory::*;

        if let Some(high) = self.straight_flush() {
            return if high == Rank::Ace.value() {
                HandResult::new(RoyalFlush, (10..=14).rev().collect())
            } else {
                HandResult::new(StraightFlush, vec![high])
            };
        }

        if let Some(quads) = self.highest_with(4, None) {
            return HandResult::new(FourOfAKind, self.multiple_and_kickers(quads));
        }

        if let Some(trips) = self.highest_with(3, None) {
            if let Some(pair) = self.highest_with(2, Some(trips)) {
                return HandResult::new(FullHouse, vec![trips, pair]);
            }
        }

        if let Some(values) = self.flush() {
            return HandResult::new(Flush, values);
        }

        if let Some(high) = straight_high(ranks_mask(self.cards)) {
            return HandResult::new(Straight, vec![high]);
        }

        if let Some(trips) = self.highest_with(3, None) {
            return HandResult::new(ThreeOfAKind, self.multiple_and_kickers(trips));
        }

        if let Some(high_pair) = self.highest_with(2, None) {
            if let Some(low_pair) = self.highest_with(2, Some(high_pair)) {
                // With three pairs the third pair rank can be the kicker.
                let kicker = self
                    .ranks_desc()
                    .find(|&r| r != high_pair && r != low_pair)
                    .unwrap_or(0);
                return HandResult::new(TwoPair, vec![high_pair, low_pair, kicker]);
            }

            return HandResult::new(OnePair, self.multiple_and_kickers(high_pair));
        }

        HandResult::new(HighCard, self.ranks_desc().take(5).collect())
    }

    /// The best straight high rank among the 5-cards combinations of each
    /// suit with at least five cards.
    fn straight_flush(&self) -> Option<u8> {
        let mut best = None;
        for suit in self.flush_suits() {
            let suited = self.suited(suit);
            for_each_combination(&suited, MIN_CARDS, |hand| {
                if let Some(high) = straight_high(ranks_mask(hand)) {
                    best = best.max(Some(high));
                }
            });
        }

        best
    }

    /// The five highest ranks of the best flush.
    fn flush(&self) -> Option<Vec<u8>> {
        self.flush_suits()
            .map(|suit| {
                let mut ranks = self
                    .suited(suit)
                    .iter()
                    .map(|c| c.rank().value())
                    .collect::<Vec<_>>();
                ranks.sort_unstable_by(|a, b| b.cmp(a));
                ranks.truncate(5);
                ranks
            })
            .max_by(|a, b| compare_values(a, b))
    }

    fn flush_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::suits().filter(|&s| self.suits[s as usize] as usize >= MIN_CARDS)
    }

    fn suited(&self, suit: Suit) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| c.suit() == suit)
            .collect()
    }

    /// The highest rank held by at least `n` cards, excluding `skip`.
    fn highest_with(&self, n: u8, skip: Option<u8>) -> Option<u8> {
        (2..=14u8)
            .rev()
            .find(|&r| self.ranks[r as usize] >= n && Some(r) != skip)
    }

    /// Distinct ranks in descending order.
    fn ranks_desc(&self) -> impl Iterator<Item = u8> + '_ {
        (2..=14u8).rev().filter(|&r| self.ranks[r as usize] > 0)
    }

    /// The multiple rank followed by the other cards ranks in descending
    /// order, five values at most.
    fn multiple_and_kickers(&self, multiple: u8) -> Vec<u8> {
        let mut values = vec![multiple];
        for r in (2..=14u8).rev().filter(|&r| r != multiple) {
            for _ in 0..self.ranks[r as usize] {
                if values.len() == 5 {
                    return values;
                }
                values.push(r);
            }
        }

        values
    }
}
