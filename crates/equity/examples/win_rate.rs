// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --example win_rate -- --hand "Ah,Kh" --board "Qh,Jh,2c" -o 3
// ```
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::SmallRng};

use oddsmith_equity::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The hero two cards, i.e. "Ah,Kh".
    #[clap(long)]
    hand: String,
    /// The known board cards, none, the flop, the turn, or the river.
    #[clap(long, short, default_value = "")]
    board: String,
    /// The number of trials.
    #[clap(long, short, default_value_t = 10_000)]
    trials: usize,
    /// The number of opponents.
    #[clap(long, short, default_value_t = 5)]
    opponents: usize,
    /// The number of parallel tasks.
    #[clap(long, default_value_t = 1)]
    tasks: usize,
    /// Decimal places of the reported rates.
    #[clap(long, short)]
    precision: Option<u32>,
    /// Random seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print the running win rate every this number of trials.
    #[clap(long)]
    trace: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let hero = parse_cards(&cli.hand)?;
    let board = parse_cards(&cli.board)?;

    let config = EquityConfig {
        trials: cli.trials,
        opponents: cli.opponents,
        tasks: cli.tasks,
        precision: cli.precision,
        seed: cli.seed,
    };

    let engine = EquityEngine::new(Evaluator::default(), config);

    if let Some(every) = cli.trace {
        let rng = match cli.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let every = every.max(1) as u64;
        for s in engine.running(&hero, &board, rng)? {
            if s.trial % every == 0 {
                println!("{:>10} {:6.2}%", s.trial, s.win_rate);
            }
        }
    }

    info!(
        "Hand {} board [{}] against {} opponents",
        oddsmith_cards::to_pretty(&hero),
        oddsmith_cards::to_pretty(&board),
        cli.opponents
    );

    let report = engine.run(&hero, &board)?;
    let places = cli.precision.unwrap_or(2).min(MAX_PLACES) as usize;
    println!(
        "Win: {:.*}% Draw: {:.*}% Loss: {:.*}% ({} trials)",
        places,
        report.win_rate,
        places,
        report.draw_rate,
        places,
        report.loss_rate,
        report.sample.trials
    );

    Ok(())
}
