// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Running win rate.
use rand::{Rng, seq::IndexedRandom};
use serde::Serialize;

use oddsmith_cards::Card;

use crate::{EquitySample, engine::Setup};

/// The win rate after a trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunningSample {
    /// The trial number starting from 1.
    pub trial: u64,
    /// The win percentage over all the trials so far.
    pub win_rate: f64,
}

/// An iterator that plays one trial for each call to `next` and yields the
/// running win rate, it stops after the configured number of trials.
///
/// Trials run on the caller thread using the given random generator, an
/// observer can consume the samples to show progress or plot convergence.
#[derive(Debug)]
pub struct RunningWinRate<'a, R> {
    setup: Setup<'a>,
    trials: u64,
    rng: R,
    sample: EquitySample,
    hand: Vec<Card>,
}

impl<'a, R: Rng> RunningWinRate<'a, R> {
    pub(crate) fn new(setup: Setup<'a>, trials: usize, rng: R) -> Self {
        let hand = Vec::with_capacity(setup.sample_size());
        Self {
            setup,
            trials: trials as u64,
            rng,
            sample: EquitySample::default(),
            hand,
        }
    }

    /// The counters of the trials played so far.
    pub fn sample(&self) -> &EquitySample {
        &self.sample
    }
}

impl<R: Rng> Iterator for RunningWinRate<'_, R> {
    type Item = RunningSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sample.trials >= self.trials {
            return None;
        }

        self.hand.clear();
        self.hand.extend(
            self.setup
                .deck()
                .cards()
                .choose_multiple(&mut self.rng, self.setup.sample_size())
                .copied(),
        );

        self.sample.add(self.setup.play(&self.hand));

        Some(RunningSample {
            trial: self.sample.trials,
            win_rate: self.sample.win_rate(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.trials - self.sample.trials) as usize;
        (left, Some(left))
    }
}

impl<R: Rng> ExactSizeIterator for RunningWinRate<'_, R> {}
