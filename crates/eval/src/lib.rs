// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. This evaluator is a port of
//! the [Cactus Kev's][kevlink] poker evaluator, the lookup tables are built
//! once by [LookupTable::new] and shared by all the [Evaluator] clones.
//!
//! To use the evaluator create a hand and use [Evaluator::evaluate] to get its
//! strength, a lower strength rank is a stronger hand:
//!
//! ```
//! # use oddsmith_eval::*;
//! let eval = Evaluator::default();
//! let board = parse_cards("Ah Kd 7c 7s 2h").unwrap();
//! let v1 = eval.evaluate(&parse_cards("Ac Ad").unwrap(), &board).unwrap();
//! let v2 = eval.evaluate(&parse_cards("Kh Qh").unwrap(), &board).unwrap();
//! assert!(v1.beats(&v2));
//! assert_eq!(v1.class().unwrap(), RankClass::FullHouse);
//! assert_eq!(v2.class().unwrap(), RankClass::TwoPair);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Evaluator, HandStrength, NUM_STRENGTHS, RankClass, rank_percentage};

mod error;
pub use error::EvalError;

pub mod summary;
pub use summary::{HandSummary, PlayerReport, Street, StreetSummary};

mod table;
pub use table::LookupTable;

// Reexport cards types.
pub use oddsmith_cards::{Card, CardError, Deck, Rank, Suit, parse_cards};
