//! # Suite Status Codes
//!
//! Occupancy status of a suite as reported by the PMS service, plus the
//! [`StatusTally`] the occupancy board renders as its legend.
//!
//! The client never writes a status directly — every transition is a
//! command to the service followed by a re-fetch. This module only models
//! what the service reports.

use serde::{Deserialize, Serialize};

/// Occupancy status of a suite.
///
/// Wire values are the single-letter codes the PMS service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuiteStatus {
    /// Suite is free and may receive a check-in (`"A"`).
    #[serde(rename = "A")]
    Available,
    /// Suite has an open movement (`"O"`).
    #[serde(rename = "O")]
    Occupied,
    /// Suite is being cleaned (`"L"`).
    #[serde(rename = "L")]
    Cleaning,
    /// Suite is under maintenance (`"M"`).
    #[serde(rename = "M")]
    Maintenance,
    /// Forward-compatible catch-all for status codes the service
    /// introduces after this client version is deployed.
    #[serde(other)]
    Unknown,
}

impl SuiteStatus {
    /// The single-letter wire code for this status.
    pub fn code(&self) -> &'static str {
        match self {
            SuiteStatus::Available => "A",
            SuiteStatus::Occupied => "O",
            SuiteStatus::Cleaning => "L",
            SuiteStatus::Maintenance => "M",
            SuiteStatus::Unknown => "?",
        }
    }

    /// Human-readable label for operator-facing output.
    pub fn label(&self) -> &'static str {
        match self {
            SuiteStatus::Available => "available",
            SuiteStatus::Occupied => "occupied",
            SuiteStatus::Cleaning => "cleaning",
            SuiteStatus::Maintenance => "maintenance",
            SuiteStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SuiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Count of suites per status across the whole occupancy board.
///
/// This is the legend the dashboard shows ("N suite(s) occupied", ...).
/// Computed client-side from the categories listing; suites without a
/// reported status land in `unknown`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusTally {
    /// Suites reported `Available`.
    pub available: usize,
    /// Suites reported `Occupied`.
    pub occupied: usize,
    /// Suites reported `Cleaning`.
    pub cleaning: usize,
    /// Suites reported `Maintenance`.
    pub maintenance: usize,
    /// Suites with no status or an unrecognized code.
    pub unknown: usize,
}

impl StatusTally {
    /// Tally an iterator of reported statuses. `None` means the service
    /// omitted the field for that suite.
    pub fn count<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Option<SuiteStatus>>,
    {
        let mut tally = Self::default();
        for status in statuses {
            tally.record(status);
        }
        tally
    }

    /// Record one suite's status.
    pub fn record(&mut self, status: Option<SuiteStatus>) {
        match status {
            Some(SuiteStatus::Available) => self.available += 1,
            Some(SuiteStatus::Occupied) => self.occupied += 1,
            Some(SuiteStatus::Cleaning) => self.cleaning += 1,
            Some(SuiteStatus::Maintenance) => self.maintenance += 1,
            Some(SuiteStatus::Unknown) | None => self.unknown += 1,
        }
    }

    /// Total number of suites tallied.
    pub fn total(&self) -> usize {
        self.available + self.occupied + self.cleaning + self.maintenance + self.unknown
    }
}
