//! Social login service trait.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::profile::SocialUserData;
use crate::state::{ProviderKind, User};

/// Response of a successful social login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLoginResponse {
    /// The resolved (found or newly created) user.
    pub user: User,
}

/// Social login service.
///
/// This trait abstracts over the application service that finds or creates
/// the local account for a provider identity. Its business rules live
/// outside this crate.
pub trait SocialLoginService: Send + Sync {
    /// Find or create the user for a provider identity.
    ///
    /// # Errors
    ///
    /// Returns error if the service rejects the login or its storage fails;
    /// implementations should use `AuthError::SocialLoginFailed`.
    fn social_login(
        &self,
        provider: ProviderKind,
        user_data: &SocialUserData,
    ) -> impl std::future::Future<Output = Result<SocialLoginResponse>> + Send;
}
