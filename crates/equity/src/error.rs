// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity errors.
use thiserror::Error;

use oddsmith_cards::CardError;
use oddsmith_eval::EvalError;

/// Errors returned by the equity engine, all errors are detected before
/// running any trial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    /// Invalid or duplicate card.
    #[error(transparent)]
    Card(#[from] CardError),
    /// Evaluation error.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The hero hand must have 2 cards.
    #[error("Hero hand must have 2 cards, got {0}")]
    HeroSize(usize),
    /// The board must have 0, 3, 4, or 5 cards.
    #[error("Board must have 0, 3, 4, or 5 cards, got {0}")]
    BoardSize(usize),
    /// The number of trials must be positive.
    #[error("Number of trials must be positive")]
    NoTrials,
    /// The number of opponents must be positive.
    #[error("Number of opponents must be positive")]
    NoOpponents,
    /// The deck doesn't have enough cards for the opponents and the board.
    #[error("Need {needed} cards to deal but the deck has {available}")]
    NotEnoughCards {
        /// Cards needed for each trial.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
    /// Invalid pot or implied odds parameter.
    #[error("Invalid odds parameter: {0}")]
    InvalidOdds(&'static str),
}
