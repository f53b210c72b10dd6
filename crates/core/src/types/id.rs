//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are opaque
//! strings issued by the external providers, so the wrapper is string-backed.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use xeinst_core::define_id;
/// define_id!(UserId);
/// define_id!(AgentId);
///
/// let user_id = UserId::new("usr_1");
/// let agent_id = AgentId::new("agt_1");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = agent_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(UserId);
define_id!(AgentId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_new_and_as_str() {
        let id = UserId::new("usr_42");
        assert_eq!(id.as_str(), "usr_42");
    }

    #[test]
    fn test_id_display() {
        let id = AgentId::new("agt_1");
        assert_eq!(format!("{id}"), "agt_1");
    }

    #[test]
    fn test_id_from_conversions() {
        let id: UserId = "usr_1".into();
        assert_eq!(id.as_str(), "usr_1");

        let id: UserId = String::from("usr_2").into();
        let s: String = id.into();
        assert_eq!(s, "usr_2");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = AgentId::new("agt_7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"agt_7\"");

        let parsed: AgentId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Equality only compiles within the same ID type; this is a
        // compile-time guarantee, so just exercise both constructors.
        let user = UserId::new("1");
        let agent = AgentId::new("1");
        assert_eq!(user.as_str(), agent.as_str());
    }
}
