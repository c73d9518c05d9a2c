// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: solve one preference table and print the report.

use anyhow::{Context, Result};
use clap::Parser;
use stable_gi::preferences::PreferenceTable;
use stable_gi::store::PreferenceStore;
use stable_gi::{solve, MarriageOutcome};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "************************************************************";

const DEMO: &str = include_str!("../data/demo.txt");

/// Extremal stable matchings and rotations (Gusfield & Irving).
#[derive(Debug, Parser)]
#[command(name = "stable-gi", version)]
struct Args {
    /// Preference table to solve (built-in 3×3 demo if omitted)
    file: Option<PathBuf>,

    /// Print only the extremal matchings and the rotations
    #[arg(short, long)]
    quiet: bool,

    /// Print operation counters
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        None => DEMO.to_string(),
    };
    let table: PreferenceTable = text.parse().with_context(|| match &args.file {
        Some(path) => format!("invalid preference table in {}", path.display()),
        None => "invalid built-in demo table".to_string(),
    })?;

    let outcome = solve(&table);
    print_report(&table, &outcome, &args);
    Ok(())
}

fn print_report(table: &PreferenceTable, outcome: &MarriageOutcome, args: &Args) {
    if !args.quiet {
        println!("***** Given preference lists:");
        println!("{}", PreferenceStore::new(table).snapshot());
    }

    println!("***** Extremal matchings:");
    println!("{}", outcome.proposer_optimal.labelled("M0"));
    println!("{}", outcome.receiver_optimal.labelled("Mz"));

    if !args.quiet {
        println!();
        println!("***** Reduced preference lists:");
        println!("{}", outcome.reduced);

        println!("{}", SEPARATOR);
        println!("Stable couples (m,w)");
        println!("{}", SEPARATOR);
        print!("{}", outcome.stable_couples);
        println!("{}", SEPARATOR);
    }

    let chain = outcome.matchings();
    for (i, rotation) in outcome.rotations.iter().enumerate() {
        println!("rho{}: {}", i + 1, rotation);
        println!("{}", chain[i + 1].labelled(&format!("M{}", i + 1)));
    }

    if args.stats {
        println!("{}", SEPARATOR);
        print!("{}", outcome.statistics);
    }
}
