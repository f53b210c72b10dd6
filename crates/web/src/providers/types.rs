//! Catalog Provider data types.
//!
//! Read-only, request-scoped copies of what the Catalog Provider owns.
//! Nothing here is persisted or cached by this layer; each render gets a
//! fresh copy with a lifetime of one request.

use chrono::{DateTime, Utc};
use url::Url;

use xeinst_core::{AgentId, Price, Rating};

/// One marketplace-offered agent's display metadata.
#[derive(Debug, Clone)]
pub struct AgentListing {
    pub id: AgentId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Monthly subscription price.
    pub price: Price,
    pub rating: Rating,
    pub user_count: u64,
    pub creator_name: String,
    /// Endpoint invoked when the agent runs. Opaque to this layer.
    pub invocation_endpoint: Url,
}

/// Filter applied by `CatalogProvider::list_agents`.
///
/// The category `"All"` (or no category) selects every category. The
/// search term matches name or description, case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// The category value that selects every category.
pub const ALL_CATEGORIES: &str = "All";

impl ListingFilter {
    /// Whether this filter selects the given listing.
    ///
    /// Category match is exact (unless "All"); search match is a
    /// case-insensitive substring match on name or description. Both
    /// conditions must hold when both are set.
    #[must_use]
    pub fn matches(&self, listing: &AgentListing) -> bool {
        let category_ok = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => listing.category == category,
        };

        let search_ok = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                listing.name.to_lowercase().contains(&term)
                    || listing.description.to_lowercase().contains(&term)
            }
        };

        category_ok && search_ok
    }
}

/// Row in the dashboard's recent-agents list.
#[derive(Debug, Clone)]
pub struct RecentAgent {
    pub id: AgentId,
    pub name: String,
    pub category: String,
    pub status: AgentStatus,
    pub run_count: u64,
    pub revenue: Price,
}

/// Publication status of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStatus {
    Active,
    Inactive,
}

impl AgentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Entry in the dashboard's recent-activity feed.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub outcome: ActivityOutcome,
}

/// What kind of event an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    AgentRun,
    Payment,
}

/// How an activity entry concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityOutcome {
    Success,
    Pending,
}

impl ActivityOutcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Per-user dashboard summary, assembled fresh per request by the
/// Catalog Provider.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub agent_count: u64,
    pub revenue_total: Price,
    pub user_total: u64,
    pub run_total: u64,
    pub recent_agents: Vec<RecentAgent>,
    pub recent_activity: Vec<ActivityEntry>,
}
