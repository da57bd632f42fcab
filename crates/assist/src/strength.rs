// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Current hand strength.
use serde::Serialize;

use handsight_eval::{Card, HandCategory, HandResult, evaluate};

use crate::{error::Result, snapshot::Snapshot};

/// Weight of the category in the strength score.
const CATEGORY_WEIGHT: f64 = 1_000_000.0;

/// Base for the tie-break values positions, all values are < 15.
const VALUE_BASE: f64 = 15.0;

/// The strength of the player current hand.
#[derive(Debug, Clone, Serialize)]
pub struct HandStrength {
    /// The best hand with the known cards.
    pub hand: HandResult,
    /// The hand category name.
    pub current_hand: &'static str,
    /// The hand strength in [0, 1], for display.
    pub strength_percentile: f64,
    /// The cards used for the evaluation.
    pub cards: Vec<Card>,
}

/// Evaluates the player hand with the community cards.
///
/// Needs at least the flop.
pub fn hand_strength(snapshot: &Snapshot) -> Result<HandStrength> {
    snapshot.require_flop()?;

    let cards = snapshot.known_cards();
    let hand = evaluate(&cards)?;

    Ok(HandStrength {
        current_hand: hand.category.name(),
        strength_percentile: strength_percentile(&hand),
        hand,
        cards,
    })
}

/// Maps a hand to a scalar in [0, 1].
///
/// The score is the category weighted by 10^6 plus the first five tie-break
/// values as base 15 digits, normalized by the royal flush score.
pub fn strength_percentile(hand: &HandResult) -> f64 {
    let max = score(&HandResult::new(
        HandCategory::RoyalFlush,
        vec![14, 13, 12, 11, 10],
    ));
    (score(hand) / max).clamp(0.0, 1.0)
}

fn score(hand: &HandResult) -> f64 {
    let values = hand
        .values
        .iter()
        .take(5)
        .zip((0..5).rev())
        .map(|(&v, exp)| v as f64 * VALUE_BASE.powi(exp))
        .sum::<f64>();

    hand.category.value() as f64 * CATEGORY_WEIGHT + values
}
