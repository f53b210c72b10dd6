//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use xeinst_core::{Email, Role, UserId};

/// Session-stored user identity.
///
/// Minimal data the Identity Provider issues for a signed-in user.
/// Built once per request and threaded through render calls as an
/// explicit value; never held in module-level state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Provider-issued user ID.
    pub id: UserId,
    /// Optional display name.
    pub name: Option<String>,
    /// User's email address.
    pub email: Email,
    /// Marketplace role (gates additive UI affordances only).
    pub role: Role,
}

impl CurrentUser {
    /// The name to greet the user with: display name, or email as fallback.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.email.as_str())
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current signed-in user.
    pub const CURRENT_USER: &str = "current_user";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> CurrentUser {
        CurrentUser {
            id: UserId::new("usr_1"),
            name: name.map(String::from),
            email: Email::parse("ada@example.com").unwrap(),
            role: Role::Consumer,
        }
    }

    #[test]
    fn test_greeting_name_prefers_display_name() {
        assert_eq!(user(Some("Ada")).greeting_name(), "Ada");
    }

    #[test]
    fn test_greeting_name_falls_back_to_email() {
        assert_eq!(user(None).greeting_name(), "ada@example.com");
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = user(Some("Ada"));
        let json = serde_json::to_string(&original).unwrap();
        let parsed: CurrentUser = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, original.id);
        assert_eq!(parsed.role, original.role);
    }
}
