// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Action advisor.
//!
//! Combines the hand strength, the outs, and the win probability in an
//! action suggestion. The action depends only on the win percentage and the
//! number of outs, the other stats are reported for display.
use log::debug;
use serde::Serialize;
use std::fmt;

use handsight_eval::Card;

use crate::{
    error::Result,
    outs::compute_outs,
    sim::{SimulationConfig, Simulator},
    snapshot::Snapshot,
    strength::hand_strength,
};

/// A suggested action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Bet or raise.
    BetOrRaise,
    /// Call or bet.
    CallOrBet,
    /// Call.
    Call,
    /// Call only if the pot odds are favorable.
    CallIfPotOddsFavorable,
    /// Check or fold.
    CheckOrFold,
    /// Fold.
    Fold,
    /// Not enough information to suggest an action.
    NoAction,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::BetOrRaise => "BET/RAISE",
            Action::CallOrBet => "CALL/BET",
            Action::Call => "CALL",
            Action::CallIfPotOddsFavorable => "CALL if pot odds are favorable",
            Action::CheckOrFold => "CHECK/FOLD",
            Action::Fold => "FOLD",
            Action::NoAction => "NO ACTION",
        };

        write!(f, "{s}")
    }
}

/// The stats behind an advice.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SupportingStats {
    /// Number of outs.
    pub total_outs: usize,
    /// The out cards.
    pub out_cards: Vec<Card>,
    /// Percentage of hitting an out by the river.
    pub improvement_probability: f64,
    /// The current hand category name, `N/A` if unknown.
    pub current_hand: String,
    /// The hand strength percentile as a percentage.
    pub strength_percentile: f64,
    /// The estimated win percentage.
    pub win_percentage: f64,
    /// The current hand tie-break values.
    pub hand_values: Vec<u8>,
    /// All the community cards are dealt, the outs are zero because no
    /// cards are left to come.
    pub board_complete: bool,
}

/// An action suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    /// The suggested action.
    pub action: Action,
    /// Why the action is suggested.
    pub reason: String,
    /// Confidence in the suggestion, from 0 to 9.
    pub confidence: u8,
    /// The stats used for the suggestion.
    pub stats: SupportingStats,
}

impl Advice {
    /// The neutral advice when the cards known are not enough.
    pub fn no_action() -> Self {
        Self {
            action: Action::NoAction,
            reason: "Not enough information to suggest an action".to_string(),
            confidence: 0,
            stats: SupportingStats {
                current_hand: "N/A".to_string(),
                ..Default::default()
            },
        }
    }
}

/// Advisor configuration.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Above this win percentage bet or raise.
    pub strong_win: f64,
    /// Above this win percentage call.
    pub medium_win: f64,
    /// Above this win percentage call or check depending on the outs.
    pub weak_win: f64,
    /// Call or bet with a medium hand and more outs than this.
    pub medium_outs: usize,
    /// Call with a weak hand and more outs than this.
    pub weak_outs: usize,
    /// The win probability simulation configuration.
    pub simulation: SimulationConfig,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            strong_win: 70.0,
            medium_win: 50.0,
            weak_win: 30.0,
            medium_outs: 8,
            weak_outs: 6,
            simulation: SimulationConfig::default(),
        }
    }
}

/// Suggests actions for a player.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: AdvisorConfig,
    simulator: Simulator,
}

impl Advisor {
    /// Creates an advisor with the given configuration.
    pub fn new(config: AdvisorConfig) -> Self {
        let simulator = Simulator::new(config.simulation.clone());
        Self { config, simulator }
    }

    /// Suggests an action for the snapshot.
    ///
    /// Returns [Advice::no_action] before the flop, invalid input and
    /// simulation errors are returned to the caller.
    pub fn recommend(&self, snapshot: &Snapshot) -> Result<Advice> {
        let strength = match hand_strength(snapshot) {
            Err(e) if e.is_insufficient_information() => {
                debug!("No advice: {e}");
                return Ok(Advice::no_action());
            }
            res => res?,
        };

        let outs = compute_outs(snapshot)?;
        let win = self.simulator.estimate(snapshot)?;

        let (action, reason, confidence) = self.decide(win.percentage, outs.count);
        debug!(
            "Advice {action} with confidence {confidence}, win {:.1}% outs {}",
            win.percentage, outs.count
        );

        Ok(Advice {
            action,
            reason,
            confidence,
            stats: SupportingStats {
                total_outs: outs.count,
                out_cards: outs.cards,
                improvement_probability: outs.probability * 100.0,
                current_hand: strength.current_hand.to_string(),
                strength_percentile: strength.strength_percentile * 100.0,
                win_percentage: win.percentage,
                hand_values: strength.hand.values,
                board_complete: outs.board_complete,
            },
        })
    }

    /// Picks an action given the win percentage and the number of outs.
    pub fn decide(&self, win_percentage: f64, outs: usize) -> (Action, String, u8) {
        let c = &self.config;
        if win_percentage > c.strong_win {
            (
                Action::BetOrRaise,
                format!("Very strong hand ({win_percentage:.1}% win probability)"),
                9,
            )
        } else if win_percentage > c.medium_win {
            if outs > c.medium_outs {
                (Action::CallOrBet, format!("Decent hand with {outs} outs"), 7)
            } else {
                (
                    Action::Call,
                    format!("Marginal hand ({win_percentage:.1}% win probability)"),
                    5,
                )
            }
        } else if win_percentage > c.weak_win {
            if outs > c.weak_outs {
                (
                    Action::CallIfPotOddsFavorable,
                    format!("{outs} outs available"),
                    4,
                )
            } else {
                (
                    Action::CheckOrFold,
                    format!("Weak hand ({win_percentage:.1}% win probability)"),
                    3,
                )
            }
        } else {
            (
                Action::Fold,
                format!("Very weak hand ({win_percentage:.1}% win probability)"),
                8,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Advisor {
        Advisor::new(AdvisorConfig {
            simulation: SimulationConfig {
                seed: Some(7),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    #[test]
    fn decision_table() {
        let advisor = Advisor::default();
        let action = |win, outs| advisor.decide(win, outs).0;

        assert_eq!(action(95.0, 0), Action::BetOrRaise);
        assert_eq!(action(70.1, 0), Action::BetOrRaise);
        assert_eq!(action(70.0, 9), Action::CallOrBet);
        assert_eq!(action(70.0, 8), Action::Call);
        assert_eq!(action(50.1, 20), Action::CallOrBet);
        assert_eq!(action(50.0, 7), Action::CallIfPotOddsFavorable);
        assert_eq!(action(50.0, 6), Action::CheckOrFold);
        assert_eq!(action(30.1, 0), Action::CheckOrFold);
        assert_eq!(action(30.0, 20), Action::Fold);
        assert_eq!(action(0.0, 0), Action::Fold);

        let confidence = |win, outs| advisor.decide(win, outs).2;
        assert_eq!(confidence(80.0, 0), 9);
        assert_eq!(confidence(60.0, 9), 7);
        assert_eq!(confidence(60.0, 2), 5);
        assert_eq!(confidence(40.0, 9), 4);
        assert_eq!(confidence(40.0, 2), 3);
        assert_eq!(confidence(10.0, 2), 8);
    }

    #[test]
    fn no_action_before_flop() {
        let s = Snapshot::parse("AH AD", "", 3).unwrap();
        let advice = seeded().recommend(&s).unwrap();
        assert_eq!(advice.action, Action::NoAction);
        assert_eq!(advice.confidence, 0);
        assert_eq!(advice.stats.current_hand, "N/A");
        assert_eq!(advice.stats.total_outs, 0);
        assert!(!advice.stats.board_complete);

        let s = Snapshot::parse("", "2C 7S 9H", 3).unwrap();
        assert_eq!(seeded().recommend(&s).unwrap().action, Action::NoAction);
    }

    #[test]
    fn bet_with_the_nuts() {
        let s = Snapshot::parse("KH AH", "TH JH QH 2C 3D", 2).unwrap();
        let advice = seeded().recommend(&s).unwrap();
        assert_eq!(advice.action, Action::BetOrRaise);
        assert_eq!(advice.confidence, 9);
        assert_eq!(advice.stats.current_hand, "ROYAL_FLUSH");
        assert_eq!(advice.stats.win_percentage, 100.0);
        assert_eq!(advice.stats.strength_percentile, 100.0);
        assert_eq!(advice.stats.total_outs, 0);
        assert!(advice.stats.board_complete);
        assert_eq!(advice.stats.hand_values, vec![14, 13, 12, 11, 10]);
    }

    #[test]
    fn river_and_flop_zero_outs_differ() {
        let river = Snapshot::parse("2C 7D", "3H 9S JD QC 4S", 1).unwrap();
        let advice = seeded().recommend(&river).unwrap();
        assert_eq!(advice.stats.total_outs, 0);
        assert_eq!(advice.stats.improvement_probability, 0.0);
        assert!(advice.stats.board_complete);

        let json = serde_json::to_value(&advice).unwrap();
        assert_eq!(json["stats"]["board_complete"], true);

        // A flop royal flush has no outs with two cards to come.
        let flop = Snapshot::parse("KH AH", "TH JH QH", 1).unwrap();
        let advice = seeded().recommend(&flop).unwrap();
        assert_eq!(advice.stats.total_outs, 0);
        assert!(!advice.stats.board_complete);
    }

    #[test]
    fn advice_on_the_flop() {
        let s = Snapshot::parse("AS AH", "AD KS KH", 1).unwrap();
        let advice = seeded().recommend(&s).unwrap();
        assert_eq!(advice.action, Action::BetOrRaise);
        assert_eq!(advice.stats.total_outs, 1);
        assert_eq!(advice.stats.out_cards, vec!["AC".parse::<Card>().unwrap()]);
        assert!((advice.stats.improvement_probability - 200.0 / 47.0).abs() < 1e-9);
        assert_eq!(advice.stats.current_hand, "FULL_HOUSE");
        assert_eq!(advice.stats.hand_values, vec![14, 13]);
    }

    #[test]
    fn advice_serializes() {
        let s = Snapshot::parse("7S 7D", "7C 2H 2D 9S KC", 1).unwrap();
        let advice = seeded().recommend(&s).unwrap();
        let json = serde_json::to_value(&advice).unwrap();
        assert_eq!(json["action"], "BET_OR_RAISE");
        assert_eq!(json["stats"]["current_hand"], "FULL_HOUSE");
        assert_eq!(json["stats"]["hand_values"], serde_json::json!([7, 2]));
    }

    #[test]
    fn invalid_input_is_an_error() {
        let hole = vec!["AH".parse().unwrap(); 2];
        assert!(Snapshot::new(hole, vec![], 1).is_err());
    }
}
