//! Request middleware: session management and authentication.

pub mod auth;
pub mod session;

pub use auth::{
    GuardOutcome, OptionalAuth, PageRequirement, RequireAuth, SIGNIN_PATH, SessionState, guard,
    resolve,
};
pub use session::create_session_layer;
