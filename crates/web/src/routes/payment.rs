//! Payment outcome route handlers.
//!
//! Payments complete at the external payment provider; these pages only
//! acknowledge the outcome. Fixed display models, no data fetch.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::views::NavView;

/// Payment success page template.
#[derive(Template, WebTemplate)]
#[template(path = "payment/success.html")]
pub struct SuccessTemplate {
    pub nav: NavView,
}

/// Payment cancelled page template.
#[derive(Template, WebTemplate)]
#[template(path = "payment/cancel.html")]
pub struct CancelTemplate {
    pub nav: NavView,
}

/// Display the payment success page.
pub async fn success(OptionalAuth(session): OptionalAuth) -> impl IntoResponse {
    SuccessTemplate {
        nav: NavView::from_session(&session),
    }
}

/// Display the payment cancelled page.
pub async fn cancel(OptionalAuth(session): OptionalAuth) -> impl IntoResponse {
    CancelTemplate {
        nav: NavView::from_session(&session),
    }
}
