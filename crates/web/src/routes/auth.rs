//! Authentication route handlers.
//!
//! Sign-in issues a session through the Identity Provider (currently the
//! mock, which accepts an email and role directly); sign-out invalidates
//! it. Both are commands, not renders: sign-out is the one side effect
//! this layer owns, and it is idempotent.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use xeinst_core::{Email, Role};

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::state::AppState;
use crate::views::NavView;

// =============================================================================
// Form and Query Types
// =============================================================================

/// Sign-in form data.
#[derive(Debug, Deserialize)]
pub struct SigninForm {
    pub email: String,
    pub name: Option<String>,
    pub role: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Sign-in page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signin.html")]
pub struct SigninTemplate {
    pub nav: NavView,
    pub error: Option<String>,
}

/// Verify-request notice page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/verify_request.html")]
pub struct VerifyRequestTemplate {
    pub nav: NavView,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the sign-in page.
///
/// Already signed-in visitors are sent straight to the dashboard.
pub async fn signin_page(
    OptionalAuth(session): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if session.user().is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    let error = query.error.as_deref().map(|code| {
        match code {
            "email" => "Please enter a valid email address.",
            "role" => "Please choose a valid role.",
            _ => "Sign-in failed, please try again.",
        }
        .to_owned()
    });

    SigninTemplate {
        nav: NavView::from_session(&session),
        error,
    }
    .into_response()
}

/// Handle sign-in form submission.
///
/// Asks the Identity Provider to issue a session for the given identity.
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SigninForm>,
) -> Response {
    let Ok(email) = Email::parse(form.email.trim()) else {
        return Redirect::to("/auth/signin?error=email").into_response();
    };

    let Ok(role) = form.role.parse::<Role>() else {
        return Redirect::to("/auth/signin?error=role").into_response();
    };

    let name = form
        .name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty());

    match state.identity().sign_in(&session, email, name, role).await {
        Ok(user) => {
            set_sentry_user(&user.id, Some(user.email.as_str()));
            tracing::info!(user_id = %user.id, "User signed in");
            Redirect::to("/dashboard").into_response()
        }
        Err(e) => {
            tracing::warn!("Sign-in failed: {e}");
            Redirect::to("/auth/signin?error=provider").into_response()
        }
    }
}

/// Handle sign-out.
///
/// Invalidates the session at the Identity Provider, then navigates to
/// the landing page. Navigation proceeds even if invalidation fails;
/// signing out an anonymous session is a no-op.
pub async fn signout(State(state): State<AppState>, session: Session) -> Response {
    if let Err(e) = state.identity().sign_out(&session).await {
        tracing::warn!("Identity provider sign-out failed: {e}");
    }

    // Also destroy the session record itself (best effort)
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }

    clear_sentry_user();

    Redirect::to("/").into_response()
}

/// Display the verify-request notice ("check your email").
pub async fn verify_request(OptionalAuth(session): OptionalAuth) -> impl IntoResponse {
    VerifyRequestTemplate {
        nav: NavView::from_session(&session),
    }
}
