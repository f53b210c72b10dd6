//! Navigation bar display model.

use crate::middleware::SessionState;

/// Signed-in user data shown in the navigation user menu.
#[derive(Debug, Clone)]
pub struct NavUser {
    pub name: String,
    pub email: String,
}

/// Session-aware navigation bar model, threaded through every page.
#[derive(Debug, Clone, Default)]
pub struct NavView {
    pub user: Option<NavUser>,
}

impl NavView {
    /// Build the navigation model from the resolved session.
    #[must_use]
    pub fn from_session(session: &SessionState) -> Self {
        Self {
            user: session.user().map(|user| NavUser {
                name: user.greeting_name().to_owned(),
                email: user.email.to_string(),
            }),
        }
    }

    /// Whether the visitor is signed in (controls the Dashboard link and
    /// user menu vs. the sign-in buttons).
    #[must_use]
    pub const fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use xeinst_core::{Email, Role, UserId};

    use crate::models::CurrentUser;

    use super::*;

    #[test]
    fn test_anonymous_nav_has_no_user() {
        let nav = NavView::from_session(&SessionState::Anonymous);
        assert!(!nav.signed_in());
        assert!(nav.user.is_none());
    }

    #[test]
    fn test_signed_in_nav_shows_name_and_email() {
        let session = SessionState::Authenticated(CurrentUser {
            id: UserId::new("usr_1"),
            name: Some("Ada".to_owned()),
            email: Email::parse("ada@example.com").unwrap(),
            role: Role::Consumer,
        });

        let nav = NavView::from_session(&session);
        assert!(nav.signed_in());
        let user = nav.user.unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_nameless_user_falls_back_to_email() {
        let session = SessionState::Authenticated(CurrentUser {
            id: UserId::new("usr_1"),
            name: None,
            email: Email::parse("ada@example.com").unwrap(),
            role: Role::Consumer,
        });

        let nav = NavView::from_session(&session);
        assert_eq!(nav.user.unwrap().name, "ada@example.com");
    }
}
