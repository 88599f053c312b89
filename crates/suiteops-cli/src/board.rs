//! # Occupancy Board Subcommand
//!
//! Renders what the dashboard page shows: the status legend with
//! per-status totals, then each category with its suites.

use anyhow::{Context, Result};
use clap::Args;

use suiteops_client::suites::tally_statuses;

/// Arguments for the `suiteops board` subcommand.
#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Show only the category with this identifier.
    #[arg(long)]
    pub category: Option<i64>,
}

/// Execute the board subcommand.
pub async fn run_board(args: &BoardArgs) -> Result<u8> {
    let (_session, client) = crate::session_client()?;

    let mut categories = client
        .suites()
        .categories()
        .await
        .context("failed to load the occupancy board")?;

    if let Some(wanted) = args.category {
        categories.retain(|c| c.id.value() == wanted);
    }

    if categories.is_empty() {
        println!("No categories available.");
        return Ok(0);
    }

    let tally = tally_statuses(&categories);
    let mut legend = format!(
        "{} occupied | {} cleaning | {} maintenance | {} available",
        tally.occupied, tally.cleaning, tally.maintenance, tally.available
    );
    if tally.unknown > 0 {
        legend.push_str(&format!(" | {} unknown", tally.unknown));
    }
    println!("{legend}");

    for category in &categories {
        println!();
        println!(
            "{} (category {})",
            category.description.as_deref().unwrap_or("-"),
            category.id
        );

        if category.suites.is_empty() {
            println!("  no suites registered");
            continue;
        }

        for suite in &category.suites {
            println!(
                "  {:>4}  {:<16} {}",
                suite.id.to_string(),
                suite.description.as_deref().unwrap_or("-"),
                suite.status.map(|s| s.label()).unwrap_or("unknown")
            );
        }
    }

    Ok(0)
}
