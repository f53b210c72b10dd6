//! Mock provider implementations.
//!
//! The real Identity and Catalog Providers are external systems. Until
//! they are wired up, these mocks stand in for them with the same
//! contracts, serving the fixture data the site launched with. The mock
//! catalog can also be constructed in an unavailable state to exercise
//! the degraded rendering path.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tower_sessions::Session;
use url::Url;
use uuid::Uuid;

use xeinst_core::{AgentId, Email, Price, Rating, Role, UserId};

use crate::models::{CurrentUser, session_keys};
use crate::providers::types::{
    ActivityEntry, ActivityKind, ActivityOutcome, AgentListing, AgentStatus, DashboardSummary,
    ListingFilter, RecentAgent,
};
use crate::providers::{CatalogProvider, IdentityProvider, ProviderError};

/// The closed set of known agent categories.
const CATEGORIES: &[&str] = &[
    "E-commerce",
    "Marketing",
    "Customer Support",
    "Data Analysis",
    "Content Creation",
    "Automation",
];

/// Mock Identity Provider backed by the request session store.
///
/// Sessions issued here carry a freshly generated user id; a real
/// provider would return its own identifiers.
#[derive(Debug, Clone, Default)]
pub struct MockIdentity;

impl MockIdentity {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IdentityProvider for MockIdentity {
    async fn get_session(&self, session: &Session) -> Result<Option<CurrentUser>, ProviderError> {
        session
            .get::<CurrentUser>(session_keys::CURRENT_USER)
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))
    }

    async fn sign_in(
        &self,
        session: &Session,
        email: Email,
        name: Option<String>,
        role: Role,
    ) -> Result<CurrentUser, ProviderError> {
        let user = CurrentUser {
            id: UserId::new(format!("usr_{}", Uuid::new_v4())),
            name,
            email,
            role,
        };

        session
            .insert(session_keys::CURRENT_USER, &user)
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        Ok(user)
    }

    async fn sign_out(&self, session: &Session) -> Result<(), ProviderError> {
        // Removing an absent key succeeds, which makes this idempotent.
        session
            .remove::<CurrentUser>(session_keys::CURRENT_USER)
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        Ok(())
    }
}

/// Mock Catalog Provider serving fixture listings.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    available: bool,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    /// A catalog that answers every call.
    #[must_use]
    pub const fn new() -> Self {
        Self { available: true }
    }

    /// A catalog that fails every call, simulating an outage.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { available: false }
    }

    fn check_available(&self) -> Result<(), ProviderError> {
        if self.available {
            Ok(())
        } else {
            Err(ProviderError::Unavailable("catalog offline".to_owned()))
        }
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn list_agents(&self, filter: &ListingFilter) -> Result<Vec<AgentListing>, ProviderError> {
        self.check_available()?;
        Ok(fixture_listings()
            .into_iter()
            .filter(|listing| filter.matches(listing))
            .collect())
    }

    async fn dashboard_summary(&self, _user_id: &UserId) -> Result<DashboardSummary, ProviderError> {
        self.check_available()?;
        Ok(fixture_summary())
    }

    fn categories(&self) -> Vec<String> {
        CATEGORIES.iter().map(|&c| c.to_owned()).collect()
    }
}

fn endpoint(raw: &str) -> Url {
    Url::parse(raw).expect("valid fixture endpoint url")
}

fn fixture_listings() -> Vec<AgentListing> {
    vec![
        AgentListing {
            id: AgentId::new("1"),
            name: "E-commerce Analyzer".to_owned(),
            description: "Analyze your e-commerce performance and get actionable insights"
                .to_owned(),
            category: "E-commerce".to_owned(),
            price: Price::from_cents(2999),
            rating: Rating::new(4.8),
            user_count: 1_247,
            creator_name: "DataFlow AI".to_owned(),
            invocation_endpoint: endpoint("https://api.dataflow.ai/ecommerce-analyzer"),
        },
        AgentListing {
            id: AgentId::new("2"),
            name: "Social Media Scheduler".to_owned(),
            description: "Automatically schedule and post content across all social platforms"
                .to_owned(),
            category: "Marketing".to_owned(),
            price: Price::from_cents(1999),
            rating: Rating::new(4.6),
            user_count: 892,
            creator_name: "SocialBot Pro".to_owned(),
            invocation_endpoint: endpoint("https://api.socialbot.pro/scheduler"),
        },
        AgentListing {
            id: AgentId::new("3"),
            name: "Customer Support Bot".to_owned(),
            description: "Handle customer inquiries 24/7 with intelligent responses".to_owned(),
            category: "Customer Support".to_owned(),
            price: Price::from_cents(3999),
            rating: Rating::new(4.9),
            user_count: 2_156,
            creator_name: "SupportAI".to_owned(),
            invocation_endpoint: endpoint("https://api.supportai.com/bot"),
        },
        AgentListing {
            id: AgentId::new("4"),
            name: "Data Visualization Generator".to_owned(),
            description: "Create beautiful charts and reports from your data automatically"
                .to_owned(),
            category: "Data Analysis".to_owned(),
            price: Price::from_cents(2499),
            rating: Rating::new(4.7),
            user_count: 1_567,
            creator_name: "VizAI".to_owned(),
            invocation_endpoint: endpoint("https://api.vizai.com/generator"),
        },
        AgentListing {
            id: AgentId::new("5"),
            name: "Content Writer".to_owned(),
            description: "Generate high-quality blog posts, emails, and marketing copy".to_owned(),
            category: "Content Creation".to_owned(),
            price: Price::from_cents(3499),
            rating: Rating::new(4.5),
            user_count: 2_341,
            creator_name: "WriteAI".to_owned(),
            invocation_endpoint: endpoint("https://api.writeai.com/writer"),
        },
        AgentListing {
            id: AgentId::new("6"),
            name: "Workflow Automator".to_owned(),
            description: "Automate repetitive tasks and streamline your business processes"
                .to_owned(),
            category: "Automation".to_owned(),
            price: Price::from_cents(4499),
            rating: Rating::new(4.8),
            user_count: 1_892,
            creator_name: "AutoFlow".to_owned(),
            invocation_endpoint: endpoint("https://api.autoflow.com/automator"),
        },
    ]
}

fn fixture_summary() -> DashboardSummary {
    let now = Utc::now();

    DashboardSummary {
        agent_count: 12,
        revenue_total: Price::from_cents(284_750),
        user_total: 1_247,
        run_total: 15_420,
        recent_agents: vec![
            RecentAgent {
                id: AgentId::new("1"),
                name: "E-commerce Analyzer".to_owned(),
                category: "E-commerce".to_owned(),
                status: AgentStatus::Active,
                run_count: 1_247,
                revenue: Price::from_cents(84_750),
            },
            RecentAgent {
                id: AgentId::new("2"),
                name: "Social Media Scheduler".to_owned(),
                category: "Marketing".to_owned(),
                status: AgentStatus::Active,
                run_count: 892,
                revenue: Price::from_cents(45_620),
            },
        ],
        recent_activity: vec![
            ActivityEntry {
                kind: ActivityKind::AgentRun,
                message: "E-commerce Analyzer executed successfully".to_owned(),
                timestamp: now - Duration::minutes(2),
                outcome: ActivityOutcome::Success,
            },
            ActivityEntry {
                kind: ActivityKind::Payment,
                message: "Payment received for Social Media Scheduler".to_owned(),
                timestamp: now - Duration::hours(1),
                outcome: ActivityOutcome::Success,
            },
        ],
    }
}
