// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handsight cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use handsight_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to count all the 2-cards hands left once a player cards are
//! known:
//!
//! ```
//! # use handsight_cards::{parse_cards, Deck};
//! let hole = parse_cards("AH KH").unwrap();
//! let mut counter = 0;
//! Deck::without(&hole).for_each(2, |hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_225);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, for_each_combination};

mod parse;
pub use parse::{ParseCardError, parse_cards};
