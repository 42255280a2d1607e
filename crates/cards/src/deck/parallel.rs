// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand sampling.
use rand::prelude::*;
use std::thread;

use super::{Card, Deck};

/// Returns the number of samples assigned to a task when splitting `samples`
/// among `num_tasks` tasks, the first tasks take the remainder.
#[inline]
fn task_samples(samples: usize, num_tasks: usize, task_id: usize) -> usize {
    samples / num_tasks + usize::from(task_id < samples % num_tasks)
}

impl Deck {
    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples` samples of size k in total.
    ///
    /// The closure takes a usize that is the task identifier (0..num_task)
    /// and a slice of cards of length k drawn without replacement, the deck
    /// is shared read only by all tasks.
    ///
    /// Each task owns its random generator, if `seed` is given the task
    /// generator is seeded with `seed + task_id` so that runs with the same
    /// seed and number of tasks draw the same samples, otherwise it is seeded
    /// from the OS.
    ///
    /// Panics if `num_tasks` is zero.
    pub fn par_sample<F>(&self, num_tasks: usize, samples: usize, k: usize, seed: Option<u64>, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let count = task_samples(samples, num_tasks, task_id);
                if count == 0 {
                    continue;
                }

                let f = &f;
                s.spawn(move || {
                    let mut rng = match seed {
                        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                        None => SmallRng::from_os_rng(),
                    };

                    let mut h = Vec::with_capacity(k);
                    for _ in 0..count {
                        h.clear();
                        h.extend(self.cards.choose_multiple(&mut rng, k).copied());
                        f(task_id, &h);
                    }
                });
            }
        });
    }
}
