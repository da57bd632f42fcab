// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handsight Poker hand evaluator.
//!
//! Classifies a set of five or more cards into one of the ten poker hand
//! categories, with tie-break values to order hands within the same
//! category. The evaluation checks categories from the royal flush down
//! and the first match wins, see the `category_counts` example for a run
//! over all 7 cards hands.
//!
//! To evaluate a hand call [evaluate] and compare the results:
//!
//! ```
//! # use handsight_eval::*;
//! let board = parse_cards("TH JH QH 2C 3D").unwrap();
//! let mut royal = parse_cards("KH AH").unwrap();
//! royal.extend_from_slice(&board);
//! let mut pair = parse_cards("2S 9D").unwrap();
//! pair.extend_from_slice(&board);
//!
//! let v1 = evaluate(&royal).unwrap();
//! let v2 = evaluate(&pair).unwrap();
//! assert_eq!(v1.category, HandCategory::RoyalFlush);
//! assert!(v1 > v2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandCategory, HandResult, MIN_CARDS, compare_values, evaluate};

// Reexport cards types.
pub use handsight_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
