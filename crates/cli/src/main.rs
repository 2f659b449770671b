// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw Poker console game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::prelude::*;
use std::io;

pub mod game;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players, asked at start if not given.
    #[clap(long, short, value_parser = clap::value_parser!(u8).range(2..=7))]
    players: Option<u8>,
    /// Player 1 is played by the computer.
    #[clap(long, short)]
    computer: bool,
    /// Number of times the deck is shuffled.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    shuffles: u8,
    /// Seed for a reproducible game.
    #[clap(long)]
    seed: Option<u64>,
    /// Print the final results as JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = game::Config {
        players: cli.players.map(usize::from),
        computer: cli.computer,
        shuffles: cli.shuffles as usize,
        json: cli.json,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut term = terminal::Terminal::new(io::stdin().lock(), io::stdout());
    terminal::run(&mut term, &config, &mut rng)?;

    Ok(())
}
