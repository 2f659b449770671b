// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Elapsed:         0.082s
// Hands/sec:       31694634
//
// Nothing:         1302540
// Pair:            1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// Royal Flush:     4
// ```

use std::time::Instant;

use drawpoker_eval::*;

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandRank::COUNT];

    Deck::default().for_each_hand(|hand| {
        let rank = HandValue::eval_hand(hand).rank();
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }
}
