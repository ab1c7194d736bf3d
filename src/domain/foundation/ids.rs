//! Strongly-typed identifier value objects.
//!
//! Every resource id is an opaque string carrying a resource prefix
//! (`sub_00000001`, `txn_00000002`). Seeded fixtures use hand-picked ids
//! such as `ctm_test_alice`, so parsing never rejects a value.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier types that are minted with a resource prefix.
pub trait PrefixedId: From<String> {
    /// Prefix placed before the sequence number, without the underscore.
    const PREFIX: &'static str;
}

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing id string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PrefixedId for $name {
            const PREFIX: &'static str = $prefix;
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

prefixed_id!(
    /// Unique identifier for a catalog product.
    ProductId,
    "pro"
);

prefixed_id!(
    /// Unique identifier for a catalog price.
    PriceId,
    "pri"
);

prefixed_id!(
    /// Unique identifier for a customer.
    CustomerId,
    "ctm"
);

prefixed_id!(
    /// Unique identifier for a subscription.
    SubscriptionId,
    "sub"
);

prefixed_id!(
    /// Unique identifier for a transaction.
    TransactionId,
    "txn"
);

prefixed_id!(
    /// Unique identifier for a webhook event.
    EventId,
    "evt"
);

prefixed_id!(
    /// Unique identifier for a notification setting (webhook destination).
    NotificationSettingId,
    "ntfset"
);
