// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use oddsmith_cards::CardError;

/// Errors returned by the hand evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Invalid or duplicate card.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The number of hand and board cards cannot be evaluated.
    #[error("Cannot evaluate {hand} hand cards with {board} board cards")]
    HandSize {
        /// Number of hand cards.
        hand: usize,
        /// Number of board cards.
        board: usize,
    },
    /// A strength rank outside the valid range, the lookup table is broken.
    #[error("Invalid strength rank {0}")]
    InvalidRank(u16),
}
