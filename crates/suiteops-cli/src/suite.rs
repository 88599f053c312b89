//! # Movement Screen Subcommand
//!
//! One suite, one action. The lifecycle controller decides whether the
//! action may proceed for the suite's freshly fetched status; blocked
//! actions and missing movements are reported as messages with a
//! non-zero exit code, API failures bubble up as errors.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use suiteops_core::SuiteId;
use suiteops_lifecycle::{LifecycleError, MovementController, Navigation};

/// Arguments for the `suiteops suite` subcommand.
#[derive(Args, Debug)]
pub struct SuiteArgs {
    /// Suite identifier.
    pub suite_id: i64,

    #[command(subcommand)]
    pub action: SuiteAction,
}

/// Movement-screen actions.
#[derive(Subcommand, Debug)]
pub enum SuiteAction {
    /// Show the suite's current status.
    Status,

    /// Open a movement (entrada).
    Checkin {
        /// Number of extra guests.
        #[arg(long, default_value_t = 0)]
        extra_guests: u32,
    },

    /// Close the open movement (fechamento).
    Close,

    /// Locate the open movement and print its order-screen handle
    /// (pedido).
    Order,

    /// Force the suite into cleaning (limpeza).
    Cleaning,

    /// Force the suite into maintenance (manutenção).
    Maintenance,
}

/// Execute the suite subcommand.
pub async fn run_suite(args: &SuiteArgs) -> Result<u8> {
    let (session, client) = crate::session_client()?;
    let controller = MovementController::new(client);
    let suite = SuiteId::new(args.suite_id);

    let mut view = match controller.open_view(suite).await {
        Ok(view) => view,
        Err(LifecycleError::SuiteNotFound { suite }) => {
            println!("Suite {suite} not found.");
            return Ok(1);
        }
        Err(err) => return Err(err).context("failed to load suite status"),
    };

    let outcome = match &args.action {
        SuiteAction::Status => {
            println!(
                "Suite {} status: {}",
                suite,
                view.status.map(|s| s.label()).unwrap_or("unknown")
            );
            return Ok(0);
        }
        SuiteAction::Checkin { extra_guests } => {
            controller.check_in(&mut view, session.id, *extra_guests).await
        }
        SuiteAction::Close => controller.close(&mut view).await,
        SuiteAction::Order => controller.order(&mut view).await,
        SuiteAction::Cleaning => controller.set_cleaning(&mut view).await,
        SuiteAction::Maintenance => controller.set_maintenance(&mut view).await,
    };

    match outcome {
        Ok(Navigation::Dashboard) => {
            println!(
                "Done. Suite {} is now {}.",
                suite,
                view.status.map(|s| s.label()).unwrap_or("unknown")
            );
            println!("Back to the board: `suiteops board`.");
            Ok(0)
        }
        Ok(Navigation::Order(movement)) => {
            println!("Open movement {movement}.");
            println!("Order screen: `suiteops order {movement} show`.");
            Ok(0)
        }
        Ok(Navigation::Stay) => Ok(0),
        Err(LifecycleError::Blocked(reason)) => {
            println!("Action blocked: {reason}.");
            Ok(1)
        }
        Err(LifecycleError::NoOpenMovement { suite }) => {
            println!("No open movement found for suite {suite}.");
            Ok(1)
        }
        Err(LifecycleError::SuiteNotFound { suite }) => {
            println!("Suite {suite} not found.");
            Ok(1)
        }
        Err(LifecycleError::Api(err)) => Err(err).context("command failed"),
    }
}
