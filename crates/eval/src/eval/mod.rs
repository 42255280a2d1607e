// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator is a port of the [Cactus Kev's][kevlink] poker evaluator to
//! evaluate 5, 6, and 7 cards poker hands, 6 and 7 cards hands are evaluated
//! by taking the best of their 5 cards subsets.
//!
//! It provides an [Evaluator::evaluate] method that validates its input and
//! computes a [HandStrength], and a [Evaluator::eval_best] method that skips
//! validation useful for simulations that deal cards from a deck.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html

mod evaluator;
pub use evaluator::Evaluator;

mod strength;
pub use strength::{HandStrength, NUM_STRENGTHS, RankClass, rank_percentage};
