// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --example chart -- --num-players 3
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use oddsmith_equity::*;

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=9))]
    num_players: u8,
    /// The number of trials for each starting hand.
    #[clap(long, short, default_value_t = 100_000)]
    trials: usize,
    /// The number of parallel tasks.
    #[clap(long, default_value_t = 4)]
    tasks: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = EquityConfig {
        trials: cli.trials,
        opponents: cli.num_players as usize,
        tasks: cli.tasks,
        precision: Some(0),
        seed: None,
    };

    let engine = EquityEngine::new(Evaluator::default(), config);

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut rates = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            // Suited hands above the pairs diagonal, offsuit below.
            let (c1, c2) = if r1 <= r2 {
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            let label = if r1 == r2 {
                format!("{r2}{r1} ")
            } else if r1 > r2 {
                format!("{r1}{r2}s")
            } else {
                format!("{r2}{r1}o")
            };

            labels.push(label);
            rates.push(engine.run(&[c1, c2], &[])?.win_rate);
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }
        println!();

        print!("|");
        for rate in rates {
            print!(" {rate:2.0}% |");
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());

    Ok(())
}
