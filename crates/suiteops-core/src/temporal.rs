//! # Permanence
//!
//! Elapsed stay time of a movement, in whole minutes.
//!
//! ## Design Decision
//!
//! The permanence-pricing endpoint takes the elapsed duration as a
//! formatted `HH:MM:SS` path segment, and the same string is shown to the
//! operator. Representing the duration as a dedicated value type with a
//! single `Display` implementation guarantees the displayed clock and the
//! quoted duration can never disagree.
//!
//! Seconds are always `00`: the service prices stays by the minute, so
//! sub-minute precision is dropped at the source (`floor` of elapsed
//! minutes), not at render time.

use chrono::{DateTime, Utc};

/// Elapsed stay time of a movement, in whole minutes. Never negative.
///
/// Displays as `HH:MM:00` with zero padding: 5 minutes is `00:05:00`,
/// 61 minutes is `01:01:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permanence {
    minutes: i64,
}

impl Permanence {
    /// A permanence of zero minutes.
    pub fn zero() -> Self {
        Self { minutes: 0 }
    }

    /// Build from a raw minute count. Negative counts clamp to zero.
    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes: minutes.max(0),
        }
    }

    /// Elapsed whole minutes between entry and `now`, floored.
    ///
    /// A clock skew that puts `now` before `entry` yields zero rather
    /// than a negative duration.
    pub fn between(entry: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_minutes((now - entry).num_minutes())
    }

    /// The whole-minute count.
    pub fn minutes(&self) -> i64 {
        self.minutes
    }
}

impl std::fmt::Display for Permanence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:00", self.minutes / 60, self.minutes % 60)
    }
}
