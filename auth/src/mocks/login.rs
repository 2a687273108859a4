//! Mock social login service for testing.

use crate::error::{AuthError, Result};
use crate::profile::SocialUserData;
use crate::providers::{SocialLoginResponse, SocialLoginService};
use crate::state::{ProviderKind, User, UserId};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock social login service.
///
/// By default resolves every login to a user derived from the login data.
/// Records each call so tests can assert on what was sent.
#[derive(Debug, Clone)]
pub struct MockSocialLoginService {
    outcome: Outcome,
    calls: Arc<Mutex<Vec<(ProviderKind, SocialUserData)>>>,
}

#[derive(Debug, Clone)]
enum Outcome {
    Derive,
    Fixed(User),
    Fail(AuthError),
}

impl MockSocialLoginService {
    /// Create a mock that derives a user from the login data.
    #[must_use]
    pub fn new() -> Self {
        Self::with_outcome(Outcome::Derive)
    }

    /// Create a mock that always returns this user.
    #[must_use]
    pub fn returning(user: User) -> Self {
        Self::with_outcome(Outcome::Fixed(user))
    }

    /// Create a mock that fails every login.
    #[must_use]
    pub fn failing() -> Self {
        Self::failing_with(AuthError::SocialLoginFailed("mock failure".to_string()))
    }

    /// Create a mock that fails every login with this error.
    #[must_use]
    pub fn failing_with(error: AuthError) -> Self {
        Self::with_outcome(Outcome::Fail(error))
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Logins received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<(ProviderKind, SocialUserData)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Default for MockSocialLoginService {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialLoginService for MockSocialLoginService {
    fn social_login(
        &self,
        provider: ProviderKind,
        user_data: &SocialUserData,
    ) -> impl Future<Output = Result<SocialLoginResponse>> + Send {
        let calls = Arc::clone(&self.calls);
        let outcome = self.outcome.clone();
        let user_data = user_data.clone();

        async move {
            calls
                .lock()
                .map_err(|_| AuthError::InternalError("mock lock poisoned".to_string()))?
                .push((provider, user_data.clone()));

            let user = match outcome {
                Outcome::Derive => User {
                    id: UserId(format!("{provider}-{}", user_data.provider_id)),
                    email: user_data.email,
                    name: user_data.name,
                    provider: Some(provider),
                    provider_id: Some(user_data.provider_id),
                    created_at: chrono::Utc::now(),
                },
                Outcome::Fixed(user) => user,
                Outcome::Fail(error) => return Err(error),
            };

            Ok(SocialLoginResponse { user })
        }
    }
}
