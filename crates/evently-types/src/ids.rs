//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in the application has a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time. Event IDs use random
//! UUID v4: the contract is probabilistic uniqueness among stored records,
//! not ordering, so a random identifier is sufficient.
//!
//! The mock session always carries the same placeholder user identifier
//! ([`UserId::placeholder`]) -- there is no real account system behind it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier (UUID v4).
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for an event in the catalog.
    EventId
}

define_id! {
    /// Identifier for a user session.
    UserId
}

impl UserId {
    /// The fixed placeholder identifier used by the mock session.
    ///
    /// Every login produces the same id; identity lives in the email, not
    /// the id, until a real account system exists.
    pub const fn placeholder() -> Self {
        Self(Uuid::nil())
    }
}
