//! HTTP route handlers for the marketplace site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                     - Landing page (public)
//! GET  /health               - Health check
//!
//! # Marketplace
//! GET  /explore              - Agent discovery with category/search filters (public)
//! GET  /dashboard            - User dashboard (requires auth)
//!
//! # Auth
//! GET  /auth/signin          - Sign-in page (public, redirect target for gated pages)
//! POST /auth/signin          - Sign-in action (mock Identity Provider)
//! POST /auth/signout         - Sign-out action (idempotent)
//! GET  /auth/verify-request  - "Check your email" notice (public)
//!
//! # Payment outcomes (completed externally)
//! GET  /success              - Payment success notice (public)
//! GET  /cancel               - Payment cancelled notice (public)
//! ```

pub mod auth;
pub mod dashboard;
pub mod explore;
pub mod home;
pub mod payment;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signin", get(auth::signin_page).post(auth::signin))
        .route("/signout", post(auth::signout))
        .route("/verify-request", get(auth::verify_request))
}

/// Create all routes for the marketplace site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Marketplace pages
        .route("/explore", get(explore::explore))
        .route("/dashboard", get(dashboard::dashboard))
        // Payment outcome pages
        .route("/success", get(payment::success))
        .route("/cancel", get(payment::cancel))
        // Auth routes
        .nest("/auth", auth_routes())
        .fallback(not_found)
}

/// Fallback handler for unmatched paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}
