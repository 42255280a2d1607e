// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Trial outcomes and their aggregation.
use serde::{Deserialize, Serialize};
use std::ops;

use oddsmith_eval::HandStrength;

/// The outcome of a trial for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The hero hand beats all the opponents hands.
    Win,
    /// The hero hand ties with the best opponent hand.
    Draw,
    /// An opponent hand beats the hero hand.
    Loss,
}

impl Outcome {
    /// Compares the hero strength with the strongest opponent strength.
    pub fn new(hero: HandStrength, best_opponent: HandStrength) -> Self {
        if hero.beats(&best_opponent) {
            Outcome::Win
        } else if hero == best_opponent {
            Outcome::Draw
        } else {
            Outcome::Loss
        }
    }
}

/// Win, draw, and loss counters for a run.
///
/// Rates are percentages of all trials, draws count in the denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquitySample {
    /// Trials won.
    pub wins: u64,
    /// Trials drawn.
    pub draws: u64,
    /// Trials lost.
    pub losses: u64,
    /// Total trials.
    pub trials: u64,
}

impl EquitySample {
    /// Adds a trial outcome.
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }

        self.trials += 1;
    }

    /// The win percentage.
    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    /// The draw percentage.
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// The loss percentage.
    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    fn rate(&self, count: u64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            count as f64 / self.trials as f64 * 100.0
        }
    }
}

impl ops::Add for EquitySample {
    type Output = EquitySample;

    fn add(self, rhs: Self) -> Self::Output {
        EquitySample {
            wins: self.wins + rhs.wins,
            draws: self.draws + rhs.draws,
            losses: self.losses + rhs.losses,
            trials: self.trials + rhs.trials,
        }
    }
}

impl ops::AddAssign for EquitySample {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for EquitySample {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, s| acc + s)
    }
}

/// The result of an equity run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityReport {
    /// The run counters.
    pub sample: EquitySample,
    /// The win percentage.
    pub win_rate: f64,
    /// The draw percentage.
    pub draw_rate: f64,
    /// The loss percentage.
    pub loss_rate: f64,
}

impl EquityReport {
    /// Creates a report with rates rounded to the given decimal places.
    pub fn new(sample: EquitySample, precision: Option<u32>) -> Self {
        let round = |v| precision.map(|p| round_to(v, p)).unwrap_or(v);
        Self {
            sample,
            win_rate: round(sample.win_rate()),
            draw_rate: round(sample.draw_rate()),
            loss_rate: round(sample.loss_rate()),
        }
    }
}

/// Rounds a value to the given number of decimal places.
///
/// Places above [MAX_PLACES] are clamped, an `f64` doesn't carry more decimal
/// digits for percentages.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places.min(MAX_PLACES) as i32);
    (value * scale).round() / scale
}

/// The largest number of decimal places used by [round_to].
pub const MAX_PLACES: u32 = 15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_counters() {
        let mut sample = EquitySample::default();
        assert_eq!(sample.win_rate(), 0.0);

        for outcome in [Outcome::Win, Outcome::Win, Outcome::Draw, Outcome::Loss] {
            sample.add(outcome);
        }

        assert_eq!(sample.trials, 4);
        assert_eq!(sample.wins + sample.draws + sample.losses, sample.trials);
        assert_eq!(sample.win_rate(), 50.0);
        assert_eq!(sample.draw_rate(), 25.0);
        assert_eq!(sample.loss_rate(), 25.0);

        let total = [sample, sample, EquitySample::default()].into_iter().sum::<EquitySample>();
        assert_eq!(total.trials, 8);
        assert_eq!(total.wins, 4);
    }

    #[test]
    fn report_rounding() {
        let sample = EquitySample {
            wins: 1,
            draws: 1,
            losses: 1,
            trials: 3,
        };

        let report = EquityReport::new(sample, Some(2));
        assert_eq!(report.win_rate, 33.33);
        assert_eq!(report.draw_rate, 33.33);

        let report = EquityReport::new(sample, None);
        assert!((report.win_rate - 100.0 / 3.0).abs() < 1e-12);

        assert_eq!(round_to(66.666, 1), 66.7);
        assert_eq!(round_to(66.666, 0), 67.0);
    }

    #[test]
    fn large_precision_is_clamped() {
        let sample = EquitySample {
            wins: 0,
            draws: 0,
            losses: 10,
            trials: 10,
        };

        for places in [MAX_PLACES, 400, u32::MAX] {
            let report = EquityReport::new(sample, Some(places));
            assert_eq!(report.win_rate, 0.0);
            assert_eq!(report.draw_rate, 0.0);
            assert_eq!(report.loss_rate, 100.0);
        }

        assert_eq!(round_to(12.5, u32::MAX), 12.5);
        assert_eq!(round_to(0.0, 1_000), 0.0);
    }
}
