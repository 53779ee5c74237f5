//! Authentication provider port.

use crate::domain::UserId;
use crate::error::BackendError;

/// Source of the signed-in user's opaque identifier.
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<UserId>;

    /// The signed-in user, or [`BackendError::Unauthenticated`].
    fn require_user(&self) -> Result<UserId, BackendError> {
        self.current_user().ok_or(BackendError::Unauthenticated)
    }
}
