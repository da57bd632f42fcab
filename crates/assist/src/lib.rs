// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handsight Poker assistant.
//!
//! Analyzes a player hand given a [Snapshot] of the cards known to the
//! player:
//!
//! - [hand_strength] evaluates the current hand and its strength percentile.
//! - [compute_outs] finds the cards that improve the current hand.
//! - [Simulator] estimates the probability of beating the opponents.
//! - [Advisor] combines all the above in a suggested action.
//!
//! ```
//! # use handsight_assist::*;
//! let snapshot = Snapshot::parse("AS AH", "AD KS KH", 1).unwrap();
//! let outs = compute_outs(&snapshot).unwrap();
//! assert_eq!(outs.count, 1);
//!
//! let advisor = Advisor::new(AdvisorConfig {
//!     simulation: SimulationConfig {
//!         seed: Some(42),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! });
//! let advice = advisor.recommend(&snapshot).unwrap();
//! assert_eq!(advice.action, Action::BetOrRaise);
//! ```
//!
//! All the operations but the advisor need at least the flop and fail with
//! [AssistError::InsufficientInformation] otherwise, the advisor returns a
//! neutral [Action::NoAction] advice.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod advisor;
pub use advisor::{Action, Advice, Advisor, AdvisorConfig, SupportingStats};

pub mod error;
pub use error::{AssistError, Result};

pub mod outs;
pub use outs::{Outs, compute_outs, improvement_probability};

pub mod sim;
pub use sim::{SimulationConfig, Simulator, WinEstimate};

pub mod snapshot;
pub use snapshot::Snapshot;

pub mod strength;
pub use strength::{HandStrength, hand_strength, strength_percentile};

// Reexport evaluator types.
pub use handsight_eval::{Card, HandCategory, HandResult, Rank, Suit, evaluate, parse_cards};
