// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// High Card:       23294460
// One  Pair:       58627800
// Two Pairs:       31433400
// Three of a Kind: 6461620
// Staight:         6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```

use std::time::Instant;

use oddsmith_eval::*;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let eval = Evaluator::default();

    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; 10];
    let mut invalid = None;

    Deck::default().for_each(7, |hand| match eval.eval_best(hand).class() {
        Ok(class) => counts[class as usize] += 1,
        Err(e) => invalid = Some(e),
    });

    if let Some(e) = invalid {
        return Err(e.into());
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for class in RankClass::classes().rev() {
        println!("{:<17}{}", format!("{class}:"), counts[class as usize]);
    }

    Ok(())
}
