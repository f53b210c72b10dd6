//! Dashboard page display model.
//!
//! Only assembled for authenticated sessions; the access guard has
//! already run by the time this module is reached, so the assembler
//! takes a `CurrentUser` rather than a `SessionState`.

use chrono::{DateTime, Utc};

use crate::models::CurrentUser;
use crate::providers::types::{ActivityEntry, RecentAgent};
use crate::providers::CatalogProvider;

/// Row in the recent-agents card.
#[derive(Debug, Clone)]
pub struct RecentAgentRow {
    pub name: String,
    pub category: String,
    pub status: String,
    pub active: bool,
    pub run_count: u64,
    pub revenue: String,
}

impl From<&RecentAgent> for RecentAgentRow {
    fn from(agent: &RecentAgent) -> Self {
        Self {
            name: agent.name.clone(),
            category: agent.category.clone(),
            status: agent.status.as_str().to_owned(),
            active: agent.status == crate::providers::types::AgentStatus::Active,
            run_count: agent.run_count,
            revenue: agent.revenue.to_string(),
        }
    }
}

/// Row in the recent-activity feed.
#[derive(Debug, Clone)]
pub struct ActivityRow {
    pub message: String,
    pub timestamp: String,
    pub success: bool,
}

/// Dashboard display model.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub greeting_name: String,
    /// Computed once here from the session role and passed to the
    /// template as inert data; gates only the analytics link.
    pub is_creator: bool,
    pub agent_count: u64,
    pub revenue_total: String,
    pub user_total: u64,
    pub run_total: u64,
    pub recent_agents: Vec<RecentAgentRow>,
    pub recent_activity: Vec<ActivityRow>,
    /// Set when the Catalog Provider could not be reached.
    pub unavailable: bool,
}

/// Assemble the dashboard model for a signed-in user.
///
/// Fetches the per-user summary from the Catalog Provider. A catalog
/// failure degrades to zeroed stats and empty lists with the
/// `unavailable` flag set.
pub async fn assemble(catalog: &dyn CatalogProvider, user: &CurrentUser) -> DashboardView {
    let greeting_name = user.greeting_name().to_owned();
    let is_creator = user.role.is_creator();

    match catalog.dashboard_summary(&user.id).await {
        Ok(summary) => {
            let now = Utc::now();
            DashboardView {
                greeting_name,
                is_creator,
                agent_count: summary.agent_count,
                revenue_total: summary.revenue_total.to_string(),
                user_total: summary.user_total,
                run_total: summary.run_total,
                recent_agents: summary.recent_agents.iter().map(RecentAgentRow::from).collect(),
                recent_activity: summary
                    .recent_activity
                    .iter()
                    .map(|entry| activity_row(entry, now))
                    .collect(),
                unavailable: false,
            }
        }
        Err(e) => {
            tracing::warn!("Catalog provider unavailable for dashboard: {e}");
            DashboardView {
                greeting_name,
                is_creator,
                agent_count: 0,
                revenue_total: String::new(),
                user_total: 0,
                run_total: 0,
                recent_agents: Vec::new(),
                recent_activity: Vec::new(),
                unavailable: true,
            }
        }
    }
}

fn activity_row(entry: &ActivityEntry, now: DateTime<Utc>) -> ActivityRow {
    ActivityRow {
        message: entry.message.clone(),
        timestamp: relative_time(entry.timestamp, now),
        success: entry.outcome.is_success(),
    }
}

/// Render a timestamp as a coarse relative phrase ("2 minutes ago").
fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_owned();
    }
    if minutes == 1 {
        return "1 minute ago".to_owned();
    }
    if minutes < 60 {
        return format!("{minutes} minutes ago");
    }

    let hours = elapsed.num_hours();
    if hours == 1 {
        return "1 hour ago".to_owned();
    }
    if hours < 24 {
        return format!("{hours} hours ago");
    }

    let days = elapsed.num_days();
    if days == 1 {
        return "1 day ago".to_owned();
    }
    format!("{days} days ago")
}
