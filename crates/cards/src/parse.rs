// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards text parsing.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when a card text specification is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text is empty.
    #[error("empty card specification")]
    Empty,
    /// The rank is not one of 2-9, T, 10, J, Q, K, A.
    #[error("invalid rank in card {0:?}")]
    InvalidRank(String),
    /// The suit is not one of C, D, H, S or their symbols.
    #[error("invalid suit in card {0:?}")]
    InvalidSuit(String),
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "C" | "c" | "♣" => Suit::Clubs,
            "D" | "d" | "♦" => Suit::Diamonds,
            "H" | "h" | "♥" => Suit::Hearts,
            "S" | "s" | "♠" => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        Ok(suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card like `"AH"`, `"td"`, `"10S"` or `"Q♥"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((suit_pos, _)) = s.char_indices().last() else {
            return Err(ParseCardError::Empty);
        };

        if suit_pos == 0 {
            return Err(ParseCardError::InvalidRank(s.to_string()));
        }

        let rank = s[..suit_pos]
            .parse::<Rank>()
            .map_err(|_| ParseCardError::InvalidRank(s.to_string()))?;
        let suit = s[suit_pos..]
            .parse::<Suit>()
            .map_err(|_| ParseCardError::InvalidSuit(s.to_string()))?;

        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards.
///
/// Cards can be separated by whitespace or commas (`"AH, KD 7c"`) or written
/// as a single run (`"AhKd7c"`).
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let mut cards = Vec::new();

    for token in s.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }

        let chars = token.chars().collect::<Vec<_>>();
        let mut start = 0;
        while start < chars.len() {
            // A rank of "10" takes three characters.
            let len = if chars[start] == '1' { 3 } else { 2 };
            let end = (start + len).min(chars.len());
            let text = chars[start..end].iter().collect::<String>();
            cards.push(text.parse()?);
            start = end;
        }
    }

    Ok(cards)
}
