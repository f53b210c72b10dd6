//! Dashboard route handler.
//!
//! This route requires authentication: the `RequireAuth` extractor
//! redirects anonymous requests to the sign-in page before the handler
//! body runs, so the Catalog Provider is never called for them.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::{RequireAuth, SessionState};
use crate::state::AppState;
use crate::views::dashboard::{self, DashboardView};
use crate::views::NavView;

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub nav: NavView,
    pub view: DashboardView,
}

/// Display the dashboard for the signed-in user.
#[instrument(skip(state, user))]
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> impl IntoResponse {
    let view = dashboard::assemble(state.catalog(), &user).await;

    DashboardTemplate {
        nav: NavView::from_session(&SessionState::Authenticated(user)),
        view,
    }
}
