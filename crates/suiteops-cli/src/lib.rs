//! # suiteops-cli — Operator Console
//!
//! Provides the `suiteops` command-line interface over the PMS service.
//! Each subcommand corresponds to one screen of the operator workflow:
//!
//! - `suiteops login` / `suiteops logout` / `suiteops register` — session
//!   handling and staff registration.
//! - `suiteops board` — the occupancy board: categories, suites, and the
//!   status legend.
//! - `suiteops suite <id> <action>` — the movement screen: check-in,
//!   order, cleaning, maintenance, closing.
//! - `suiteops order <movId> <action>` — the order screen: list, launch,
//!   and withdraw consumption items; product search; closing.
//! - `suiteops watch <movId>` — live duration and payable total for an
//!   open movement.
//!
//! The session obtained by `login` is stored in a JSON file (see
//! [`session`]) and attached to every authenticated call as a bearer
//! token.

pub mod auth;
pub mod board;
pub mod order;
pub mod session;
pub mod suite;
pub mod watch;

use anyhow::{Context, Result};
use suiteops_client::{PmsApiConfig, PmsClient, Session};

/// Build a client for unauthenticated calls (sign-in, registration).
pub fn anonymous_client() -> Result<PmsClient> {
    let config = PmsApiConfig::from_env().context("invalid suiteops configuration")?;
    PmsClient::new(config).context("failed to build PMS client")
}

/// Load the stored session and build a client that authenticates with
/// its token.
pub fn session_client() -> Result<(Session, PmsClient)> {
    let session = session::load()?
        .context("no stored session; run `suiteops login --email <address>` first")?;
    let config = PmsApiConfig::from_env()
        .context("invalid suiteops configuration")?
        .with_session_token(session.token.clone());
    let client = PmsClient::new(config).context("failed to build PMS client")?;
    Ok((session, client))
}

/// Format an optional money amount the way the service's receipts do.
pub(crate) fn money(value: Option<f64>) -> String {
    format!("R$ {:.2}", value.unwrap_or_default())
}
