//! # suiteops CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity flags map onto the tracing filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use suiteops_cli::auth::{run_login, run_logout, run_register, LoginArgs, RegisterArgs};
use suiteops_cli::board::{run_board, BoardArgs};
use suiteops_cli::order::{run_order, OrderArgs};
use suiteops_cli::suite::{run_suite, SuiteArgs};
use suiteops_cli::watch::{run_watch, WatchArgs};

/// suiteops — operator console for the suite management service.
///
/// Signs staff in against the PMS service, shows the occupancy board,
/// drives suite movements (check-in, order, cleaning, maintenance,
/// closing), edits consumption items, and watches an open movement's
/// billing live.
#[derive(Parser, Debug)]
#[command(name = "suiteops", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in to the PMS service and store the session.
    Login(LoginArgs),

    /// Register a new staff user.
    Register(RegisterArgs),

    /// Drop the stored session.
    Logout,

    /// Show the occupancy board: categories, suites, status legend.
    Board(BoardArgs),

    /// Movement actions for one suite.
    Suite(SuiteArgs),

    /// Inspect and edit a movement's consumption items.
    Order(OrderArgs),

    /// Watch an open movement's duration and payable total live.
    Watch(WatchArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Login(args) => run_login(&args).await,
        Commands::Register(args) => run_register(&args).await,
        Commands::Logout => run_logout(),
        Commands::Board(args) => run_board(&args).await,
        Commands::Suite(args) => run_suite(&args).await,
        Commands::Order(args) => run_order(&args).await,
        Commands::Watch(args) => run_watch(&args).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
