// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity engine.
use log::{debug, info};
use rand::Rng;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use oddsmith_cards::{Card, Deck, Rank, Suit, ensure_distinct};
use oddsmith_eval::{Evaluator, HandStrength};

use crate::{EquityConfig, EquityError, EquityReport, EquitySample, Outcome, RunningWinRate};

const HAND_SIZE: usize = 7;
const BOARD_SIZE: usize = 5;
const FILLER: Card = Card::new(Rank::Deuce, Suit::Clubs);

/// Estimates the hero winning chances against random opponents hands.
///
/// For each trial the engine deals two cards to each opponent and completes
/// the board from the cards not in the hero hand or in the known board, then
/// compares the hero hand strength with the strongest opponent hand.
#[derive(Debug, Clone)]
pub struct EquityEngine {
    evaluator: Evaluator,
    config: EquityConfig,
}

impl EquityEngine {
    /// Creates an engine with the given evaluator and configuration.
    pub fn new(evaluator: Evaluator, config: EquityConfig) -> Self {
        Self { evaluator, config }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// The engine evaluator.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Estimates the hero win percentage with the given number of trials and
    /// opponents, rounded to the configured precision.
    pub fn estimate_win_rate(
        &self,
        hero: &[Card],
        board: &[Card],
        trials: usize,
        opponents: usize,
    ) -> Result<f64, EquityError> {
        let config = EquityConfig {
            trials,
            opponents,
            ..self.config.clone()
        };

        let sample = self.run_with(&config, hero, board)?;
        Ok(EquityReport::new(sample, config.precision).win_rate)
    }

    /// Runs the configured number of trials and returns the rates.
    pub fn run(&self, hero: &[Card], board: &[Card]) -> Result<EquityReport, EquityError> {
        let sample = self.run_with(&self.config, hero, board)?;
        Ok(EquityReport::new(sample, self.config.precision))
    }

    /// Returns an iterator that runs the configured number of trials one at a
    /// time, yielding the running win rate after each trial.
    pub fn running<R: Rng>(
        &self,
        hero: &[Card],
        board: &[Card],
        rng: R,
    ) -> Result<RunningWinRate<'_, R>, EquityError> {
        let setup = Setup::new(&self.evaluator, &self.config, hero, board)?;
        Ok(RunningWinRate::new(setup, self.config.trials, rng))
    }

    fn run_with(
        &self,
        config: &EquityConfig,
        hero: &[Card],
        board: &[Card],
    ) -> Result<EquitySample, EquityError> {
        let setup = Setup::new(&self.evaluator, config, hero, board)?;
        let num_tasks = config.tasks.max(1);

        debug!(
            "Running {} trials with {} tasks for {}{} board [{}] against {} opponents",
            config.trials,
            num_tasks,
            setup.hero[0],
            setup.hero[1],
            setup.board.iter().map(Card::to_string).collect::<Vec<_>>().join(","),
            setup.opponents
        );

        let now = Instant::now();

        // Create per task counters to avoid contention.
        let task_counters = (0..num_tasks)
            .map(|_| Counters::default())
            .collect::<Vec<_>>();

        setup.deck.par_sample(
            num_tasks,
            config.trials,
            setup.sample_size(),
            config.seed,
            |task_id, sample| {
                task_counters[task_id].add(setup.play(sample));
            },
        );

        // Aggregate counters.
        let sample = task_counters.iter().map(Counters::sample).sum::<EquitySample>();

        info!(
            "Completed {} trials in {:.3}s win rate {:.2}% draw rate {:.2}%",
            sample.trials,
            now.elapsed().as_secs_f64(),
            sample.win_rate(),
            sample.draw_rate()
        );

        Ok(sample)
    }
}

/// Estimates the hero win percentage using a new evaluator and the default
/// configuration.
///
/// Builds a new lookup table on each call, use an [EquityEngine] to run
/// multiple estimates.
pub fn estimate_win_rate(
    hero: &[Card],
    board: &[Card],
    trials: usize,
    opponents: usize,
) -> Result<f64, EquityError> {
    EquityEngine::new(Evaluator::default(), EquityConfig::default())
        .estimate_win_rate(hero, board, trials, opponents)
}

/// Per task outcome counters.
#[derive(Default)]
struct Counters {
    wins: AtomicU64,
    draws: AtomicU64,
    losses: AtomicU64,
}

impl Counters {
    fn add(&self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Win => &self.wins,
            Outcome::Draw => &self.draws,
            Outcome::Loss => &self.losses,
        };

        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn sample(&self) -> EquitySample {
        let wins = self.wins.load(Ordering::Relaxed);
        let draws = self.draws.load(Ordering::Relaxed);
        let losses = self.losses.load(Ordering::Relaxed);
        EquitySample {
            wins,
            draws,
            losses,
            trials: wins + draws + losses,
        }
    }
}

/// A validated simulation input.
///
/// The setup is read only, each trial gets a sample of cards drawn from the
/// setup deck and plays it without changing the setup.
#[derive(Debug)]
pub(crate) struct Setup<'a> {
    evaluator: &'a Evaluator,
    hero: [Card; 2],
    board: Vec<Card>,
    deck: Deck,
    opponents: usize,
}

impl<'a> Setup<'a> {
    pub(crate) fn new(
        evaluator: &'a Evaluator,
        config: &EquityConfig,
        hero: &[Card],
        board: &[Card],
    ) -> Result<Self, EquityError> {
        let hero = <[Card; 2]>::try_from(hero).map_err(|_| EquityError::HeroSize(hero.len()))?;

        if !matches!(board.len(), 0 | 3 | 4 | 5) {
            return Err(EquityError::BoardSize(board.len()));
        }

        ensure_distinct(hero.iter().chain(board))?;

        if config.trials == 0 {
            return Err(EquityError::NoTrials);
        }

        if config.opponents == 0 {
            return Err(EquityError::NoOpponents);
        }

        // Remove known cards from the deck so that we don't sample them.
        let deck = Deck::without(hero.iter().chain(board));

        let setup = Self {
            evaluator,
            hero,
            board: board.to_vec(),
            deck,
            opponents: config.opponents,
        };

        if setup.sample_size() > setup.deck.count() {
            return Err(EquityError::NotEnoughCards {
                needed: setup.sample_size(),
                available: setup.deck.count(),
            });
        }

        Ok(setup)
    }

    /// The remaining deck.
    pub(crate) fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of cards to draw for each trial.
    pub(crate) fn sample_size(&self) -> usize {
        self.missing() + self.opponents * 2
    }

    /// Number of board cards to deal.
    fn missing(&self) -> usize {
        BOARD_SIZE - self.board.len()
    }

    /// Plays a trial with the given sample.
    ///
    /// The sample starts with the missing board cards followed by two cards for
    /// each opponent.
    pub(crate) fn play(&self, sample: &[Card]) -> Outcome {
        let missing = self.missing();
        let (board_ext, holes) = sample.split_at(missing);

        // Hole cards go at the start of the evaluation array followed by the
        // complete board.
        let mut hand = [FILLER; HAND_SIZE];
        hand[2..2 + self.board.len()].copy_from_slice(&self.board);
        hand[2 + self.board.len()..].copy_from_slice(board_ext);

        hand[..2].copy_from_slice(&self.hero);
        let hero = self.evaluator.eval_best(&hand);

        let best_opponent = holes
            .chunks_exact(2)
            .map(|hole| {
                hand[..2].copy_from_slice(hole);
                self.evaluator.eval_best(&hand)
            })
            .min()
            .unwrap_or(HandStrength::WORST);

        Outcome::new(hero, best_opponent)
    }
}
