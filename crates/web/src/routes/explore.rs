//! Explore page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::state::AppState;
use crate::views::explore::{self, ExploreView};
use crate::views::NavView;

/// Explore page query parameters.
#[derive(Debug, Deserialize)]
pub struct ExploreQuery {
    /// Free-text search term.
    pub q: Option<String>,
    /// Category filter; "All" or absent selects every category.
    pub category: Option<String>,
}

/// Explore page template.
#[derive(Template, WebTemplate)]
#[template(path = "explore.html")]
pub struct ExploreTemplate {
    pub nav: NavView,
    pub view: ExploreView,
}

/// Display the explore page.
#[instrument(skip(state, session))]
pub async fn explore(
    State(state): State<AppState>,
    OptionalAuth(session): OptionalAuth,
    Query(query): Query<ExploreQuery>,
) -> impl IntoResponse {
    let view = explore::assemble(state.catalog(), query.category, query.q).await;

    ExploreTemplate {
        nav: NavView::from_session(&session),
        view,
    }
}
