//! # Live Billing Watch Subcommand
//!
//! Runs the billing monitor for one open movement and prints every
//! snapshot: the ticking duration, the latest quoted fee, and the
//! payable total. Stops when the movement closes or on Ctrl-C.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use tokio::sync::{broadcast, watch};

use suiteops_billing::{BillingMonitor, BillingSnapshot};
use suiteops_core::MovementId;

/// Arguments for the `suiteops watch` subcommand.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Movement identifier.
    pub movement_id: i64,
}

/// Execute the watch subcommand.
pub async fn run_watch(args: &WatchArgs) -> Result<u8> {
    let (_session, client) = crate::session_client()?;
    let movement_id = MovementId::new(args.movement_id);

    let Some(movement) = client
        .movements()
        .movement(movement_id)
        .await
        .context("failed to load movement")?
    else {
        println!("Movement {movement_id} not found.");
        return Ok(1);
    };

    let monitor = BillingMonitor::new(client, movement);
    let initial = monitor.snapshot(Utc::now());
    if initial.closed {
        print_snapshot(&initial);
        println!("Movement is closed; nothing to watch.");
        return Ok(0);
    }

    let (tx, mut rx) = watch::channel(initial);
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let handle = tokio::spawn(monitor.run(tx, shutdown_rx));

    println!("Watching movement {movement_id}. Ctrl-C to stop.");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow().clone();
                print_snapshot(&snapshot);
                if snapshot.closed {
                    println!("Movement closed.");
                    break;
                }
            }
            _ = &mut ctrl_c => {
                let _ = shutdown_tx.send(());
                break;
            }
        }
    }

    let _ = handle.await;
    Ok(0)
}

fn print_snapshot(snapshot: &BillingSnapshot) {
    match snapshot.suite_fee {
        Some(fee) => println!(
            "{}  fee R$ {fee:.2}  total R$ {:.2}",
            snapshot.permanence, snapshot.payable
        ),
        None => println!(
            "{}  fee -      total R$ {:.2}",
            snapshot.permanence, snapshot.payable
        ),
    }
}
