// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --example summary -- --board "Ah,Kd,7c,7s,2h" "Ac,Qd" "2c,2d"
// ```
use clap::Parser;
use log::info;

use oddsmith_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The five board cards, i.e. "Ah,Kd,7c,7s,2h".
    #[clap(long, short)]
    board: String,
    /// The players two cards hands, i.e. "Ac,Qd".
    #[clap(required = true)]
    hands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let board = parse_cards(&cli.board)?;
    let hands = cli
        .hands
        .iter()
        .map(|h| parse_cards(h))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Evaluating {} hands", hands.len());

    let summary = Evaluator::default().hand_summary(&board, &hands)?;
    print!("{summary}");

    Ok(())
}
