// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Assistant errors.
use thiserror::Error;

use handsight_eval::{EvalError, ParseCardError};

/// Assistant result type.
pub type Result<T> = std::result::Result<T, AssistError>;

/// Errors returned by the assistant operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistError {
    /// The player must have two or no hole cards.
    #[error("expected 0 or 2 hole cards, got {0}")]
    InvalidHoleCards(usize),
    /// The board must have 0, 3, 4, or 5 cards.
    #[error("expected 0, 3, 4 or 5 community cards, got {0}")]
    InvalidCommunityCards(usize),
    /// A card text specification is malformed.
    #[error(transparent)]
    InvalidCardText(#[from] ParseCardError),
    /// The cards do not make a valid hand.
    #[error(transparent)]
    InvalidCards(#[from] EvalError),
    /// The simulation configuration is not valid.
    #[error("invalid simulation config: {0}")]
    InvalidSimulationConfig(&'static str),
    /// The operation needs more cards to be known.
    #[error("insufficient information: {0}")]
    InsufficientInformation(&'static str),
    /// The simulation deadline elapsed before any trial completed.
    #[error("simulation deadline exceeded before any trial completed")]
    DeadlineExceeded,
}

impl AssistError {
    /// Checks if this error signals that more cards must be dealt.
    pub fn is_insufficient_information(&self) -> bool {
        matches!(self, AssistError::InsufficientInformation(_))
    }

    /// Checks if this error is caused by invalid caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AssistError::InvalidHoleCards(_)
                | AssistError::InvalidCommunityCards(_)
                | AssistError::InvalidCardText(_)
                | AssistError::InvalidCards(_)
                | AssistError::InvalidSimulationConfig(_)
        )
    }
}
