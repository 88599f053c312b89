//! # suiteops-billing — Billing Calculator
//!
//! Derives what a stay costs: elapsed permanence, the quoted permanence
//! fee, consumption, extra-guest fees, and the final payable amount.
//!
//! The permanence fee is not a static field of a movement — the service
//! quotes it per elapsed-duration bucket, so the displayed total has to
//! be refreshed while the movement is open. [`monitor`] owns that loop
//! with two deliberately decoupled cadences: a cheap local clock tick
//! that keeps the visible duration moving, and a slower network tick
//! that re-quotes the fee. The visible clock never blocks on network
//! latency.
//!
//! [`calc`] is the pure arithmetic underneath: every operand coerces to
//! zero when absent, and a failed refresh retains the last known fee
//! rather than flashing the total to zero.

pub mod calc;
pub mod monitor;

pub use calc::{line_total, payable_total, Charges};
pub use monitor::{BillingMonitor, BillingSnapshot, MonitorConfig};
