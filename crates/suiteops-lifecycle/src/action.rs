//! # Action Authorization Table
//!
//! The pure half of the lifecycle controller: given a suite's reported
//! status, which movement actions may proceed.
//!
//! | Status      | CheckIn | Transfer | Order | Cleaning | Maintenance | Closing |
//! |-------------|---------|----------|-------|----------|-------------|---------|
//! | Available   | yes     | no       | no    | yes      | yes         | no      |
//! | Occupied    | no      | no       | yes   | yes      | yes         | yes     |
//! | Cleaning    | no      | no       | no    | yes      | yes         | no      |
//! | Maintenance | no      | no       | no    | yes      | yes         | no      |
//! | Unknown     | no      | no       | no    | yes      | yes         | no      |
//!
//! Cleaning and Maintenance are unconditional from the client's
//! perspective; the service decides what forcing a status means for a
//! suite that is mid-stay. Transfer is listed in the movement menu but
//! has no defined behavior anywhere in the system, so it is blocked in
//! every state until it is specified.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use suiteops_core::SuiteStatus;

/// An operator action on a suite's movement menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementAction {
    /// Open a movement (entrada).
    CheckIn,
    /// Transfer the stay to another suite (transferência). Unspecified.
    Transfer,
    /// Edit the open movement's consumption (pedido).
    Order,
    /// Force the suite into cleaning (limpeza).
    Cleaning,
    /// Force the suite into maintenance (manutenção).
    Maintenance,
    /// Close the open movement (fechamento).
    Closing,
}

impl MovementAction {
    /// Menu label for operator-facing output.
    pub fn label(&self) -> &'static str {
        match self {
            MovementAction::CheckIn => "check-in",
            MovementAction::Transfer => "transfer",
            MovementAction::Order => "order",
            MovementAction::Cleaning => "cleaning",
            MovementAction::Maintenance => "maintenance",
            MovementAction::Closing => "closing",
        }
    }
}

impl std::fmt::Display for MovementAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an action was refused for the suite's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionBlocked {
    /// Check-in requires an available suite.
    #[error("suite is not available for check-in (current status: {status})")]
    SuiteNotAvailable {
        /// The status that blocked the action.
        status: SuiteStatus,
    },

    /// Order and closing require an occupied suite.
    #[error("suite is not occupied (current status: {status})")]
    SuiteNotOccupied {
        /// The status that blocked the action.
        status: SuiteStatus,
    },

    /// The action exists on the menu but has no defined behavior.
    #[error("{action} is not implemented")]
    NotImplemented {
        /// The unimplemented action.
        action: MovementAction,
    },
}

/// Decide whether `action` may proceed for a suite reporting `status`.
///
/// Pure; the caller is responsible for fetching a fresh status first.
pub fn authorize(status: SuiteStatus, action: MovementAction) -> Result<(), ActionBlocked> {
    match action {
        MovementAction::Transfer => Err(ActionBlocked::NotImplemented { action }),
        MovementAction::Cleaning | MovementAction::Maintenance => Ok(()),
        MovementAction::CheckIn => {
            if status == SuiteStatus::Available {
                Ok(())
            } else {
                Err(ActionBlocked::SuiteNotAvailable { status })
            }
        }
        MovementAction::Order | MovementAction::Closing => {
            if status == SuiteStatus::Occupied {
                Ok(())
            } else {
                Err(ActionBlocked::SuiteNotOccupied { status })
            }
        }
    }
}
