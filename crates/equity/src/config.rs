// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity engine configuration.
use serde::{Deserialize, Serialize};

/// The equity engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// The number of trials for each estimate.
    pub trials: usize,
    /// The number of opponents.
    pub opponents: usize,
    /// The number of parallel tasks running the trials.
    pub tasks: usize,
    /// Rounds the win rate percentage to this number of decimal places.
    pub precision: Option<u32>,
    /// Seed for reproducible runs, each task uses `seed + task_id`.
    pub seed: Option<u64>,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            opponents: 5,
            tasks: 1,
            precision: None,
            seed: None,
        }
    }
}
