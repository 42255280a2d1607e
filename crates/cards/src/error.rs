// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when parsing or collecting cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is not a two characters rank and suit pair.
    #[error("Invalid card token '{0}'")]
    InvalidCard(String),
    /// The same card appears more than once.
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
}
