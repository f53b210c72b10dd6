//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::state::AppState;
use crate::views::NavView;

/// A feature card in the "Why Choose Xeinst?" section.
#[derive(Clone)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// Static feature copy for the landing page.
fn feature_cards() -> Vec<FeatureCard> {
    vec![
        FeatureCard {
            title: "Lightning Fast",
            description: "Execute AI agents instantly with webhook-based architecture",
        },
        FeatureCard {
            title: "Secure & Reliable",
            description: "Enterprise-grade security with HMAC verification and role-based access",
        },
        FeatureCard {
            title: "Creator Economy",
            description: "Monetize your AI agents with Stripe Connect integration",
        },
        FeatureCard {
            title: "Global Marketplace",
            description: "Discover agents from creators worldwide with category filtering",
        },
        FeatureCard {
            title: "Premium Quality",
            description: "Curated agents with detailed descriptions and usage examples",
        },
        FeatureCard {
            title: "Easy Integration",
            description: "Simple webhook endpoints for seamless agent execution",
        },
    ]
}

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: NavView,
    pub features: Vec<FeatureCard>,
    /// Popular categories grid, from the catalog's closed category set.
    pub categories: Vec<String>,
}

/// Display the landing page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(session): OptionalAuth,
) -> impl IntoResponse {
    HomeTemplate {
        nav: NavView::from_session(&session),
        features: feature_cards(),
        categories: state.catalog().categories(),
    }
}
