//! External provider interfaces.
//!
//! The marketplace site owns no data. Everything it shows comes from two
//! external collaborators, consumed behind these traits:
//!
//! - [`IdentityProvider`] - resolves the current session and handles
//!   sign-out. Credentials are opaque to this layer; the provider reads
//!   whatever it stored in the session.
//! - [`CatalogProvider`] - lists marketplace agents and produces per-user
//!   dashboard summaries.
//!
//! Both are read-only from the site's perspective except for the
//! sign-in/sign-out commands on the identity side. Provider failures are
//! surfaced as [`ProviderError`] and converted into degraded display
//! models at the view-assembly boundary; they never abort a render.

pub mod mock;
pub mod types;

use async_trait::async_trait;
use tower_sessions::Session;

use xeinst_core::{Email, Role, UserId};

use crate::models::CurrentUser;
use types::{AgentListing, DashboardSummary, ListingFilter};

/// Errors from an external provider call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not be reached or failed internally.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// A referenced entity does not exist at the provider.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Supplies the current session, if any, and handles sign-in/sign-out.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the user attached to this request's session.
    ///
    /// Returns `Ok(None)` for an anonymous request. Callers treat any
    /// error the same as `None` (fail-closed to a sign-in prompt).
    async fn get_session(&self, session: &Session) -> Result<Option<CurrentUser>, ProviderError>;

    /// Issue a session for the given identity.
    async fn sign_in(
        &self,
        session: &Session,
        email: Email,
        name: Option<String>,
        role: Role,
    ) -> Result<CurrentUser, ProviderError>;

    /// Invalidate the current session. Idempotent: signing out an
    /// already-anonymous session is a no-op, not an error.
    async fn sign_out(&self, session: &Session) -> Result<(), ProviderError>;
}

/// Supplies the listable agents and per-user dashboard summaries.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// List agents matching the filter, in the provider's display order.
    async fn list_agents(&self, filter: &ListingFilter) -> Result<Vec<AgentListing>, ProviderError>;

    /// Assemble the dashboard summary for one user.
    async fn dashboard_summary(&self, user_id: &UserId) -> Result<DashboardSummary, ProviderError>;

    /// The closed set of known categories, excluding the "All" pseudo-category.
    fn categories(&self) -> Vec<String>;
}
