// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handsight CLI, analyzes a player hand and suggests an action.
//!
//! ```bash
//! $ handsight --hole "7S 7D" --board "7C 2H 2D" --opponents 2
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use std::time::{Duration, Instant};

use handsight_assist::{
    Action, Advisor, AdvisorConfig, SimulationConfig, Snapshot, compute_outs, hand_strength,
};

#[derive(Debug, Parser)]
struct Cli {
    /// The player hole cards, i.e. "AH KD", empty before the deal.
    #[clap(long, default_value = "")]
    hole: String,
    /// The community cards, i.e. "7C 2H 2D".
    #[clap(long, short, default_value = "")]
    board: String,
    /// The number of opponents.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=22))]
    opponents: u8,
    /// Number of simulation trials.
    #[clap(long, short, default_value_t = 1_000, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,
    /// Number of parallel simulation tasks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for reproducible simulations.
    #[clap(long)]
    seed: Option<u64>,
    /// Stop the simulation after this many milliseconds.
    #[clap(long)]
    deadline_ms: Option<u64>,
    /// Print the advice as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let snapshot = Snapshot::parse(&cli.hole, &cli.board, cli.opponents as usize)?;
    let simulation = SimulationConfig {
        trials: cli.trials as usize,
        tasks: cli.tasks as usize,
        seed: cli.seed,
        deadline: cli
            .deadline_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms)),
    };

    let advisor = Advisor::new(AdvisorConfig {
        simulation,
        ..Default::default()
    });

    let advice = advisor.recommend(&snapshot)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    let cards = snapshot
        .known_cards()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    println!("Cards:        {}", cards.join(" "));

    match hand_strength(&snapshot) {
        Ok(strength) => {
            println!("Hand:         {}", strength.hand);
            println!("Strength:     {:.1}%", strength.strength_percentile * 100.0);
        }
        Err(e) => println!("Hand:         {e}"),
    }

    match compute_outs(&snapshot) {
        Ok(outs) if outs.board_complete => println!("Outs:         board complete"),
        Ok(outs) => {
            println!(
                "Outs:         {} ({:.1}% to improve)",
                outs.count,
                outs.probability * 100.0
            );

            for (category, cards) in &outs.by_category {
                let cards = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
                println!("  {:<16}{}", format!("{category}:"), cards.join(" "));
            }
        }
        Err(e) => println!("Outs:         {e}"),
    }

    if advice.action != Action::NoAction {
        println!(
            "Win:          {:.1}% against {} opponents",
            advice.stats.win_percentage,
            snapshot.opponents()
        );
    }

    println!(
        "Action:       {} (confidence {}/9), {}",
        advice.action, advice.confidence, advice.reason
    );

    Ok(())
}
