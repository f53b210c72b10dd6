//! Session resolution and page-access guarding.
//!
//! Every render starts by resolving the request's [`SessionState`] from
//! the Identity Provider, then running the [`guard`] against the page's
//! requirement. Gated pages use the [`RequireAuth`] extractor, which
//! rejects with a redirect before the handler body runs, so no data is
//! ever fetched for an anonymous request to a gated page.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::CurrentUser;
use crate::providers::IdentityProvider;
use crate::state::AppState;

/// Where anonymous requests to gated pages are sent.
pub const SIGNIN_PATH: &str = "/auth/signin";

/// The resolved identity for one request.
///
/// Built per request and immutable for its lifetime. Threaded through
/// render calls as an explicit value.
#[derive(Debug, Clone)]
pub enum SessionState {
    Anonymous,
    Authenticated(CurrentUser),
}

impl SessionState {
    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&CurrentUser> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }
}

/// Access requirement of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequirement {
    Public,
    RequiresAuth,
}

/// Outcome of guarding a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Proceed to view assembly.
    Proceed,
    /// Short-circuit to a redirect; no partial rendering occurs.
    RedirectTo(&'static str),
}

/// Decide whether a session may proceed to a page.
///
/// Total and deterministic: every (session, requirement) pair maps to
/// exactly one outcome. Public pages always proceed; gated pages redirect
/// anonymous sessions to the sign-in page.
#[must_use]
pub const fn guard(session: &SessionState, requirement: PageRequirement) -> GuardOutcome {
    match (requirement, session) {
        (PageRequirement::Public, _) | (PageRequirement::RequiresAuth, SessionState::Authenticated(_)) => {
            GuardOutcome::Proceed
        }
        (PageRequirement::RequiresAuth, SessionState::Anonymous) => {
            GuardOutcome::RedirectTo(SIGNIN_PATH)
        }
    }
}

/// Resolve the request's session from the Identity Provider.
///
/// Never fails: a missing or expired credential resolves to
/// [`SessionState::Anonymous`], and so does any provider error
/// (fail-closed, favoring a visible sign-in prompt over a broken page).
pub async fn resolve(identity: &dyn IdentityProvider, session: &Session) -> SessionState {
    match identity.get_session(session).await {
        Ok(Some(user)) => SessionState::Authenticated(user),
        Ok(None) => SessionState::Anonymous,
        Err(e) => {
            tracing::warn!("Identity provider error, treating as anonymous: {e}");
            SessionState::Anonymous
        }
    }
}

/// Extractor that requires an authenticated session.
///
/// If the request is anonymous, rejects with a redirect to the sign-in
/// page; the handler body never runs.
///
/// # Example
///
/// ```rust,ignore
/// async fn gated_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.greeting_name())
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Rejection for [`RequireAuth`]: silent redirect to the sign-in page.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        Redirect::to(SIGNIN_PATH).into_response()
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer; absent means no session middleware,
        // which resolves to anonymous like every other failure.
        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            return Err(AuthRejection);
        };

        let resolved = resolve(state.identity(), &session).await;
        match guard(&resolved, PageRequirement::RequiresAuth) {
            GuardOutcome::Proceed => match resolved {
                SessionState::Authenticated(user) => Ok(Self(user)),
                SessionState::Anonymous => Err(AuthRejection),
            },
            GuardOutcome::RedirectTo(_) => Err(AuthRejection),
        }
    }
}

/// Extractor that resolves the session without gating.
///
/// Public pages use this to render session-aware chrome (the navigation
/// bar) for both anonymous and signed-in visitors.
pub struct OptionalAuth(pub SessionState);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let resolved = match parts.extensions.get::<Session>().cloned() {
            Some(session) => resolve(state.identity(), &session).await,
            None => SessionState::Anonymous,
        };

        Ok(Self(resolved))
    }
}
