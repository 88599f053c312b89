//! # Order Screen Subcommand
//!
//! The consumption view of one movement: its billing summary, its line
//! items, and the launch/withdraw commands. Editing a confirmed line is
//! a withdrawal followed by a fresh launch; there is no update-in-place.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Subcommand};
use tracing::warn;

use suiteops_billing::{line_total, Charges};
use suiteops_client::consumption::{LaunchItemRequest, WithdrawItemRequest};
use suiteops_client::movements::Movement;
use suiteops_client::PmsClient;
use suiteops_core::MovementId;
use suiteops_lifecycle::{LifecycleError, MovementController};

use crate::money;

/// Arguments for the `suiteops order` subcommand.
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Movement identifier.
    pub movement_id: i64,

    #[command(subcommand)]
    pub action: OrderAction,
}

/// Order-screen actions.
#[derive(Subcommand, Debug)]
pub enum OrderAction {
    /// Show the movement's billing summary and its items.
    Show,

    /// Launch a consumption item; the unit price comes from the catalog.
    Launch {
        /// Product reference code.
        #[arg(long)]
        code: String,

        /// Quantity; fractional values are accepted.
        #[arg(long, default_value_t = 1.0)]
        qty: f64,
    },

    /// Withdraw a consumption item.
    Withdraw {
        /// Product reference code.
        #[arg(long)]
        code: String,

        /// Quantity to withdraw.
        #[arg(long, default_value_t = 1.0)]
        qty: f64,
    },

    /// Search the product catalog by description.
    Find {
        /// Description fragment.
        text: String,
    },

    /// Close the movement from the order screen.
    Close,
}

/// Execute the order subcommand.
pub async fn run_order(args: &OrderArgs) -> Result<u8> {
    let (_session, client) = crate::session_client()?;
    let movement_id = MovementId::new(args.movement_id);

    match &args.action {
        OrderAction::Show => show_order(&client, movement_id).await,
        OrderAction::Launch { code, qty } => launch_item(&client, movement_id, code, *qty).await,
        OrderAction::Withdraw { code, qty } => {
            withdraw_item(&client, movement_id, code, *qty).await
        }
        OrderAction::Find { text } => find_products(&client, text).await,
        OrderAction::Close => close_movement(client, movement_id).await,
    }
}

async fn show_order(client: &PmsClient, movement_id: MovementId) -> Result<u8> {
    let Some(movement) = client
        .movements()
        .movement(movement_id)
        .await
        .context("failed to load movement")?
    else {
        println!("Movement {movement_id} not found.");
        return Ok(1);
    };

    let items = client
        .consumption()
        .items(movement_id)
        .await
        .context("failed to load consumption items")?;

    let permanence = movement.permanence_at(Utc::now());
    let suite_fee = if movement.is_open() {
        // One immediate quote, like opening the closing screen; a failed
        // quote degrades to the duration display alone.
        match client
            .movements()
            .permanence_quote(movement.suite_id, &permanence)
            .await
        {
            Ok(fee) => Some(fee),
            Err(err) => {
                warn!(movement = %movement.id, error = %err, "permanence quote failed");
                None
            }
        }
    } else {
        movement.permanence_amount
    };
    let charges = Charges::from_movement(&movement, suite_fee);

    println!("Movement {} — suite {}", movement.id, movement.suite_id);
    println!("  entry:       {}", movement.entered_at.to_rfc3339());
    println!(
        "  exit:        {}",
        movement
            .exited_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "-".into())
    );
    println!("  permanence:  {permanence}");
    println!("  suite fee:   {}", money(suite_fee));
    println!("  consumption: {}", money(movement.consumption_total));
    println!(
        "  extra:       {} guest(s) — {}",
        movement.extra_guests.unwrap_or_default(),
        money(movement.extra_guest_fee)
    );
    println!("  deposit:     {}", money(movement.deposit));
    println!("  TO PAY:      {}", money(Some(charges.payable())));
    println!("  status:      {}", movement.status.as_deref().unwrap_or("-"));

    println!();
    if items.is_empty() {
        println!("No items launched.");
        return Ok(0);
    }

    println!(
        "{:<10} {:<28} {:<6} {:>8} {:>12} {:>12}",
        "code", "description", "unit", "qty", "unit price", "total"
    );
    for item in &items {
        println!(
            "{:<10} {:<28} {:<6} {:>8} {:>12} {:>12}",
            item.product_code,
            item.description.as_deref().unwrap_or("-"),
            item.unit.as_deref().unwrap_or("-"),
            item.quantity,
            money(Some(item.unit_price)),
            money(Some(item.line_total))
        );
    }

    Ok(0)
}

async fn launch_item(
    client: &PmsClient,
    movement_id: MovementId,
    code: &str,
    qty: f64,
) -> Result<u8> {
    let Some(product) = client
        .products()
        .by_code(code)
        .await
        .context("product lookup failed")?
    else {
        println!("Product {code} not found.");
        return Ok(1);
    };

    let unit_price = product.unit_price.unwrap_or_default();
    client
        .consumption()
        .launch(&LaunchItemRequest {
            movement_id,
            product_code: code.to_string(),
            quantity: qty,
            unit_price,
        })
        .await
        .context("failed to launch item")?;

    println!(
        "Launched {qty} x {} at {} (line total {}).",
        product.description.as_deref().unwrap_or(code),
        money(Some(unit_price)),
        money(Some(line_total(qty, unit_price)))
    );
    println!();
    show_order(client, movement_id).await
}

async fn withdraw_item(
    client: &PmsClient,
    movement_id: MovementId,
    code: &str,
    qty: f64,
) -> Result<u8> {
    client
        .consumption()
        .withdraw(&WithdrawItemRequest {
            movement_id,
            product_code: code.to_string(),
            quantity: qty,
        })
        .await
        .context("failed to withdraw item")?;

    println!("Withdrew {qty} x {code}.");
    println!();
    show_order(client, movement_id).await
}

async fn find_products(client: &PmsClient, text: &str) -> Result<u8> {
    let products = client
        .products()
        .search_description(text)
        .await
        .context("product search failed")?;

    if products.is_empty() {
        println!("No products match \"{text}\".");
        return Ok(0);
    }

    println!("{:<8} {:<14} {:<32} {:>12}", "id", "reference", "description", "price");
    for product in &products {
        println!(
            "{:<8} {:<14} {:<32} {:>12}",
            product.id.to_string(),
            product.reference.as_deref().unwrap_or("-"),
            product.description.as_deref().unwrap_or("-"),
            money(product.unit_price)
        );
    }
    Ok(0)
}

async fn close_movement(client: PmsClient, movement_id: MovementId) -> Result<u8> {
    let controller = MovementController::new(client);
    match controller.close_movement(movement_id).await {
        Ok(closed) => {
            print_closed(&closed);
            Ok(0)
        }
        Err(LifecycleError::Api(err)) => Err(err).context("failed to close movement"),
        Err(err) => {
            println!("{err}.");
            Ok(1)
        }
    }
}

fn print_closed(movement: &Movement) {
    println!(
        "Movement {} closed. Recorded total: {}.",
        movement.id,
        money(movement.recorded_total)
    );
    println!("Back to the board: `suiteops board`.");
}
