//! Strongly-typed identifiers used across the domain.
//!
//! Every table in the backing store is keyed by a UUID; newtypes keep them
//! from being mixed up at call sites (a `ProductId` is not a `VendorId`).

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! impl_uuid_newtype {
    ($t:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(Uuid);

        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::from_str(s)?))
            }
        }
    };
}

impl_uuid_newtype!(UserId, "Identifier of a user (actor identity).");
impl_uuid_newtype!(ProductId, "Identifier of a catalog product.");
impl_uuid_newtype!(CategoryId, "Identifier of a product category.");
impl_uuid_newtype!(VendorId, "Identifier of a vendor.");
impl_uuid_newtype!(TransactionId, "Identifier of a stock transaction.");
impl_uuid_newtype!(PurchaseOrderId, "Identifier of a purchase order.");
impl_uuid_newtype!(StockRequestId, "Identifier of a stock request.");
impl_uuid_newtype!(AlertId, "Identifier of an in-app alert.");
impl_uuid_newtype!(AuditLogId, "Identifier of an audit-log entry.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_display_and_from_str() {
        let id = ProductId::new();
        let parsed: ProductId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn ids_serialize_as_bare_uuids() {
        let id = VendorId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn v7_ids_are_time_ordered() {
        let a = TransactionId::new();
        let b = TransactionId::new();
        assert!(a.as_uuid() <= b.as_uuid());
    }
}
