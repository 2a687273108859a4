//! User repository trait.

use crate::error::Result;
use crate::state::{User, UserId};

/// User repository.
///
/// Query-only view of the user persistence model, used to resolve a session
/// principal back into a full user record.
pub trait UserRepository: Send + Sync {
    /// Find a user by ID.
    ///
    /// # Returns
    ///
    /// `None` if no user has this ID.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup itself fails; implementations should use
    /// `AuthError::UserLookupFailed`.
    fn find_by_id(
        &self,
        id: &UserId,
    ) -> impl std::future::Future<Output = Result<Option<User>>> + Send;
}
