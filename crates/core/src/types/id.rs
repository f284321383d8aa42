//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. The remote data
//! service assigns row IDs as UUIDs, so every ID wraps a [`uuid::Uuid`].

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `Uuid` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_uuid()`, `short()`
/// - `From<Uuid>` and `Into<Uuid>` implementations
///
/// # Example
///
/// ```rust
/// # use cabella_core::define_id;
/// define_id!(ClientId);
/// define_id!(OrderId);
///
/// let client_id = ClientId::new(uuid::Uuid::new_v4());
/// let order_id = OrderId::new(uuid::Uuid::new_v4());
///
/// // These are different types, so this won't compile:
/// // let _: ClientId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Create a new ID from a `Uuid` value.
            #[must_use]
            pub const fn new(id: ::uuid::Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying `Uuid` value.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }

            /// First eight characters of the hyphenated form.
            ///
            /// The UI shows orders as `#a1b2c3d4`; notification messages
            /// use the same short form.
            #[must_use]
            pub fn short(&self) -> String {
                self.0.to_string().chars().take(8).collect()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ClientId);
define_id!(AdminId);
define_id!(ProductId);
define_id!(OrderId);
define_id!(OrderItemId);
define_id!(NotificationId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_short_is_first_eight_chars() {
        let id = OrderId::new(Uuid::parse_str("a1b2c3d4-0000-0000-0000-000000000000").unwrap());
        assert_eq!(id.short(), "a1b2c3d4");
    }

    #[test]
    fn test_display_is_full_uuid() {
        let raw = Uuid::new_v4();
        let id = ProductId::new(raw);
        assert_eq!(id.to_string(), raw.to_string());
    }

    #[test]
    fn test_serde_transparent() {
        let raw = Uuid::new_v4();
        let id = ClientId::new(raw);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{raw}\""));

        let back: ClientId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_uuid_roundtrip() {
        let raw = Uuid::new_v4();
        let id = NotificationId::from(raw);
        let out: Uuid = id.into();
        assert_eq!(out, raw);
    }
}
