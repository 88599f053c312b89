//! Pure billing arithmetic.
//!
//! Line totals are always derived from their factors and never entered
//! independently; the payable total is a fixed four-operand formula with
//! absent operands treated as zero.

use suiteops_client::movements::Movement;

/// Total of one consumption line: quantity times unit price.
///
/// Quantities may be zero or fractional (half a kilogram of cheese).
pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    quantity * unit_price
}

/// The payable total of a movement:
/// `suite_fee + consumption + extra_guest_fee - deposit`.
pub fn payable_total(suite_fee: f64, consumption: f64, extra_guest_fee: f64, deposit: f64) -> f64 {
    suite_fee + consumption + extra_guest_fee - deposit
}

/// The four operands of a movement's payable total, coerced from a
/// movement record and the latest quoted permanence fee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charges {
    /// Quoted permanence fee; zero until the first successful quote.
    pub suite_fee: f64,
    /// Accumulated consumption total.
    pub consumption: f64,
    /// Extra-guest fee.
    pub extra_guest_fee: f64,
    /// Deposit already paid, subtracted from the total.
    pub deposit: f64,
}

impl Charges {
    /// Assemble the operands from a movement record. Absent fields and
    /// an as-yet-unquoted suite fee coerce to zero.
    pub fn from_movement(movement: &Movement, current_suite_fee: Option<f64>) -> Self {
        Self {
            suite_fee: current_suite_fee.unwrap_or_default(),
            consumption: movement.consumption_total.unwrap_or_default(),
            extra_guest_fee: movement.extra_guest_fee.unwrap_or_default(),
            deposit: movement.deposit.unwrap_or_default(),
        }
    }

    /// The payable total for these operands.
    pub fn payable(&self) -> f64 {
        payable_total(
            self.suite_fee,
            self.consumption,
            self.extra_guest_fee,
            self.deposit,
        )
    }
}
