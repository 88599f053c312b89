//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout suiteops. Each
//! identifier is a distinct type — you cannot pass a [`SuiteId`] where a
//! [`MovementId`] is expected.
//!
//! The PMS service encodes every identifier as a plain integer on the wire
//! (`suiId`, `movId`, `catId`, `prdId`, `usrId`), so all newtypes here are
//! `i64`-backed and serialize transparently.

use serde::{Deserialize, Serialize};

macro_rules! integer_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier received from the PMS service.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Access the underlying integer.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id! {
    /// Identifier of a suite (`suiId` on the wire).
    SuiteId
}

integer_id! {
    /// Identifier of a movement — one occupancy episode of a suite
    /// (`movId` on the wire).
    MovementId
}

integer_id! {
    /// Identifier of a staff user (`usrId` on the wire).
    UserId
}

integer_id! {
    /// Identifier of a suite category (`catId` on the wire).
    CategoryId
}

integer_id! {
    /// Identifier of a product in the consumption catalog (`prdId` on the
    /// wire). Products are *looked up* by their reference code (a string);
    /// this is the numeric key the service returns.
    ProductId
}
