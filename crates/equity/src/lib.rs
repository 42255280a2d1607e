// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker equity estimator.
//!
//! Estimates a hand winning chances against a number of opponents with random
//! hands by playing many random trials, the known board can be empty, the
//! flop, the turn, or the river:
//!
//! ```
//! # use oddsmith_equity::*;
//! let config = EquityConfig {
//!     trials: 2_000,
//!     opponents: 2,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let engine = EquityEngine::new(Evaluator::default(), config);
//! let hero = parse_cards("Ah Ad").unwrap();
//! let board = parse_cards("As Kd 7c").unwrap();
//!
//! let report = engine.run(&hero, &board).unwrap();
//! assert_eq!(report.sample.trials, 2_000);
//! assert!(report.win_rate > 80.0);
//! ```
//!
//! Trials run on [EquityConfig::tasks] threads, use [EquityEngine::running] to
//! run the trials on the caller thread and observe the win rate after each
//! trial.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod config;
pub use config::EquityConfig;

mod engine;
pub use engine::{EquityEngine, estimate_win_rate};

mod error;
pub use error::EquityError;

mod odds;
pub use odds::{implied_odds, pot_odds};

mod running;
pub use running::{RunningSample, RunningWinRate};

mod sample;
pub use sample::{EquityReport, EquitySample, MAX_PLACES, Outcome, round_to};

// Reexport evaluator and cards types.
pub use oddsmith_eval::{
    Card, CardError, Deck, EvalError, Evaluator, HandStrength, Rank, RankClass, Suit, parse_cards,
};
