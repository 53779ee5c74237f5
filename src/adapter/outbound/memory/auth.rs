//! Fixed-session authentication provider.

use crate::domain::UserId;
use crate::port::outbound::auth::AuthProvider;

/// Auth provider whose signed-in user never changes.
#[derive(Debug, Clone, Default)]
pub struct StaticAuth {
    user: Option<UserId>,
}

impl StaticAuth {
    /// A session signed in as `user`.
    pub fn signed_in(user: impl Into<UserId>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    /// A visitor with no session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    /// Session for an optional configured user.
    #[must_use]
    pub fn from_option(user: Option<UserId>) -> Self {
        Self { user }
    }
}

impl AuthProvider for StaticAuth {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}
