//! Marketplace user roles.

use serde::{Deserialize, Serialize};

/// Role assigned to a marketplace user by the Identity Provider.
///
/// The role gates only additive UI affordances (e.g., the analytics link
/// on the dashboard); it never changes which data rows are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Publishes agents to the marketplace.
    Creator,
    /// Consumes agents published by others.
    #[default]
    Consumer,
}

impl Role {
    /// Whether this role carries the creator affordances.
    #[must_use]
    pub const fn is_creator(self) -> bool {
        matches!(self, Self::Creator)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Creator => write!(f, "CREATOR"),
            Self::Consumer => write!(f, "CONSUMER"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATOR" => Ok(Self::Creator),
            "CONSUMER" => Ok(Self::Consumer),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
