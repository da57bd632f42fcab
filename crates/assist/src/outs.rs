// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs counting.
//!
//! An out is a card left in the deck that, added to the known cards, makes
//! a strictly better hand than the current one.
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use handsight_eval::{Card, HandCategory, evaluate};

use crate::{error::Result, snapshot::Snapshot};

/// Number of unseen cards once the flop and the player cards are known.
const UNSEEN_ON_FLOP: f64 = 47.0;

/// The outs for the player current hand.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Outs {
    /// Number of outs.
    pub count: usize,
    /// The out cards.
    pub cards: Vec<Card>,
    /// The out cards grouped by the hand category they make.
    pub by_category: BTreeMap<HandCategory, Vec<Card>>,
    /// The probability of hitting at least one out by the river.
    pub probability: f64,
    /// All the community cards have been dealt, no outs are left to come.
    pub board_complete: bool,
}

impl Outs {
    fn board_complete() -> Self {
        Self {
            board_complete: true,
            ..Default::default()
        }
    }
}

/// Finds the cards that improve the player hand.
///
/// Returns an empty result with `board_complete` set on the river, fails with
/// [AssistError::InsufficientInformation](crate::AssistError) before the flop.
pub fn compute_outs(snapshot: &Snapshot) -> Result<Outs> {
    if snapshot.is_board_complete() {
        return Ok(Outs::board_complete());
    }

    snapshot.require_flop()?;

    let known = snapshot.known_cards();
    let current = evaluate(&known)?;

    let mut outs = Outs::default();
    let mut hand = Vec::with_capacity(known.len() + 1);

    for card in snapshot.remaining_cards() {
        hand.clear();
        hand.extend_from_slice(&known);
        hand.push(card);

        let improved = evaluate(&hand)?;
        if improved > current {
            outs.cards.push(card);
            outs.by_category
                .entry(improved.category)
                .or_default()
                .push(card);
        }
    }

    outs.count = outs.cards.len();
    outs.probability = improvement_probability(outs.count, snapshot.cards_to_come());

    debug!(
        "Found {} outs for {} with {} cards to come",
        outs.count,
        current,
        snapshot.cards_to_come()
    );

    Ok(outs)
}

/// The probability of hitting at least one of `outs` cards.
///
/// Only one or two cards to come are modeled, other values return 0. The
/// two cards formula is `1 - (47 - k) / 47 * (46 - k) / 46`.
pub fn improvement_probability(outs: usize, cards_to_come: usize) -> f64 {
    let k = outs as f64;
    let n = UNSEEN_ON_FLOP;
    match cards_to_come {
        1 => k / n,
        2 => 1.0 - ((n - k) / n) * ((n - 1.0 - k) / (n - 1.0)),
        _ => 0.0,
    }
}
