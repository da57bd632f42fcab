// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A frozen view of the player cards and the board.
use serde::Serialize;

use handsight_eval::{Card, Deck, EvalError, parse_cards};

use crate::error::{AssistError, Result};

/// Number of cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// Number of cards on the flop.
pub const FLOP_SIZE: usize = 3;

/// The cards known to a player at some point of a hand.
///
/// The session layer creates a snapshot for every request, the assistant
/// never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    hole: Vec<Card>,
    community: Vec<Card>,
    opponents: usize,
}

impl Snapshot {
    /// Creates a snapshot given the player hole cards, the community cards,
    /// and the number of opponents still in the hand.
    pub fn new(hole: Vec<Card>, community: Vec<Card>, opponents: usize) -> Result<Self> {
        if !matches!(hole.len(), 0 | 2) {
            return Err(AssistError::InvalidHoleCards(hole.len()));
        }

        if !matches!(community.len(), 0 | 3 | 4 | 5) {
            return Err(AssistError::InvalidCommunityCards(community.len()));
        }

        for (idx, card) in community.iter().enumerate() {
            if hole.contains(card) || community[..idx].contains(card) {
                return Err(EvalError::DuplicateCard(*card).into());
            }
        }

        if hole.len() == 2 && hole[0] == hole[1] {
            return Err(EvalError::DuplicateCard(hole[0]).into());
        }

        Ok(Self {
            hole,
            community,
            opponents,
        })
    }

    /// Creates a snapshot parsing the cards text, see [parse_cards].
    pub fn parse(hole: &str, community: &str, opponents: usize) -> Result<Self> {
        Self::new(parse_cards(hole)?, parse_cards(community)?, opponents)
    }

    /// The player hole cards.
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    /// The community cards.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// The number of opponents.
    pub fn opponents(&self) -> usize {
        self.opponents
    }

    /// The player cards followed by the community cards.
    pub fn known_cards(&self) -> Vec<Card> {
        self.hole.iter().chain(&self.community).copied().collect()
    }

    /// The cards not yet seen by the player.
    pub fn remaining_cards(&self) -> Deck {
        Deck::without(&self.known_cards())
    }

    /// Number of community cards still to be dealt.
    pub fn cards_to_come(&self) -> usize {
        BOARD_SIZE - self.community.len()
    }

    /// Checks if all the community cards have been dealt.
    pub fn is_board_complete(&self) -> bool {
        self.community.len() == BOARD_SIZE
    }

    /// Fails if the player has no cards or the flop has not been dealt.
    pub(crate) fn require_flop(&self) -> Result<()> {
        if self.hole.is_empty() {
            Err(AssistError::InsufficientInformation(
                "the player has no hole cards",
            ))
        } else if self.community.len() < FLOP_SIZE {
            Err(AssistError::InsufficientInformation(
                "at least the flop is needed",
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_cards() {
        let s = Snapshot::parse("AH KH", "TH JH QH", 2).unwrap();
        assert_eq!(s.hole().len(), 2);
        assert_eq!(s.community().len(), 3);
        assert_eq!(s.opponents(), 2);
        assert_eq!(s.known_cards().len(), 5);
        assert_eq!(s.remaining_cards().count(), 47);
        assert_eq!(s.cards_to_come(), 2);
        assert!(!s.is_board_complete());
        assert!(s.require_flop().is_ok());

        let s = Snapshot::parse("AH KH", "TH JH QH 2C 3D", 1).unwrap();
        assert_eq!(s.remaining_cards().count(), 45);
        assert_eq!(s.cards_to_come(), 0);
        assert!(s.is_board_complete());
    }

    #[test]
    fn snapshot_before_flop() {
        let s = Snapshot::parse("AH KH", "", 1).unwrap();
        assert!(
            s.require_flop()
                .is_err_and(|e| e.is_insufficient_information())
        );

        let s = Snapshot::default();
        assert!(
            s.require_flop()
                .is_err_and(|e| e.is_insufficient_information())
        );
    }

    #[test]
    fn invalid_snapshot() {
        let card = "AH".parse::<Card>().unwrap();
        let err = Snapshot::new(vec![card], vec![], 1).unwrap_err();
        assert_eq!(err, AssistError::InvalidHoleCards(1));
        assert!(err.is_invalid_input());

        let board = parse_cards("2C 3C").unwrap();
        let err = Snapshot::new(vec![], board, 1).unwrap_err();
        assert_eq!(err, AssistError::InvalidCommunityCards(2));

        let hole = parse_cards("AH KH").unwrap();
        let board = parse_cards("2C AH 3C").unwrap();
        let err = Snapshot::new(hole, board, 1).unwrap_err();
        assert_eq!(err, AssistError::InvalidCards(EvalError::DuplicateCard(card)));

        let board = parse_cards("2C 3C 2C").unwrap();
        assert!(Snapshot::new(vec![], board, 1).is_err());

        let hole = parse_cards("AH AH").unwrap();
        assert!(Snapshot::new(hole, vec![], 1).is_err());

        assert!(Snapshot::parse("AX KH", "", 1).is_err());
    }
}
