//! Social login bootstrap.
//!
//! [`configure`] is called once while the process starts. It builds the
//! strategy registry (Google, Facebook) and the session bridge, and returns
//! them as one owned [`SocialAuth`] value for the application to hold.
//!
//! ```text
//! authorization_url ─► provider consent ─► callback(code)
//!                                              │
//!                   exchange_code ◄────────────┘
//!                         │
//!                   fetch_profile ─► verify ─► social_login ─► User
//!                                                               │
//!                                        serialize_user ◄───────┘
//!                                              │
//!                          session ─► deserialize_user ─► find_by_id
//! ```

use crate::config::SocialAuthConfig;
use crate::error::Result;
use crate::profile::{RawProfile, normalize_profile};
use crate::providers::{
    FacebookStrategy, GoogleStrategy, SocialLoginService, Strategy, StrategyOptions,
    TokenResponse, UserRepository,
};
use crate::registry::StrategyRegistry;
use crate::state::{ProviderKind, SessionPrincipal, User};

/// Register the Google and Facebook strategies and install the session
/// bridge.
///
/// Each call builds an independent registry; nothing process-wide is
/// mutated.
///
/// # Errors
///
/// Returns `AuthError::StrategyAlreadyRegistered` if two strategies end up
/// under the same name.
pub fn configure<L, U>(config: &SocialAuthConfig, login: L, users: U) -> Result<SocialAuth<L, U>>
where
    L: SocialLoginService,
    U: UserRepository,
{
    let mut registry = StrategyRegistry::new();
    registry.register(GoogleStrategy::new(StrategyOptions::google(
        config.google.clone(),
    )))?;
    registry.register(FacebookStrategy::new(StrategyOptions::facebook(
        config.facebook.clone(),
    )))?;

    Ok(SocialAuth::new(config.base_url.clone(), registry, login, users))
}

/// Configured social login: strategies plus session bridging.
///
/// # Type Parameters
///
/// - `L`: Social login service
/// - `U`: User repository
#[derive(Debug)]
pub struct SocialAuth<L, U>
where
    L: SocialLoginService,
    U: UserRepository,
{
    base_url: String,
    registry: StrategyRegistry,
    login: L,
    users: U,
}

impl<L, U> SocialAuth<L, U>
where
    L: SocialLoginService,
    U: UserRepository,
{
    /// Assemble from an already populated registry.
    #[must_use]
    pub fn new(base_url: String, registry: StrategyRegistry, login: L, users: U) -> Self {
        Self {
            base_url,
            registry,
            login,
            users,
        }
    }

    /// The strategy registry.
    #[must_use]
    pub const fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Public base URL used for redirect URIs.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute callback URL for a provider.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StrategyNotRegistered` if the provider has no
    /// strategy.
    pub fn redirect_uri(&self, provider: ProviderKind) -> Result<String> {
        let strategy = self.registry.get(provider.as_str())?;
        Ok(self.redirect_uri_for(strategy))
    }

    fn redirect_uri_for(&self, strategy: &dyn Strategy) -> String {
        format!("{}{}", self.base_url, strategy.callback_path())
    }

    /// Consent URL to redirect the user to.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StrategyNotRegistered` if the provider has no
    /// strategy, or `AuthError::InternalError` if the URL cannot be built.
    pub fn authorization_url(&self, provider: ProviderKind, state: &str) -> Result<String> {
        let strategy = self.registry.get(provider.as_str())?;
        strategy.authorization_url(state, &self.redirect_uri_for(strategy))
    }

    /// Complete the callback phase: redeem the code, fetch the profile and
    /// verify it.
    ///
    /// # Errors
    ///
    /// Returns the first failure of the chain: unknown strategy, token
    /// exchange, profile fetch, profile validation or social login.
    pub async fn authenticate_callback(&self, provider: ProviderKind, code: &str) -> Result<User> {
        let strategy = self.registry.get(provider.as_str())?;
        let redirect_uri = self.redirect_uri_for(strategy);

        let tokens = strategy.exchange_code(code, &redirect_uri).await?;
        let profile = strategy.fetch_profile(&tokens.access_token).await?;

        self.verify(provider, &tokens, profile).await
    }

    /// Verify a provider profile and resolve it to a user.
    ///
    /// Normalizes the profile and hands it to the social login service;
    /// returns exactly the user the service resolved. Tokens are accepted but
    /// not used.
    ///
    /// # Errors
    ///
    /// - `AuthError::ProfileMissingEmail` if the profile has no email
    /// - any error returned by the social login service, unchanged
    pub async fn verify(
        &self,
        provider: ProviderKind,
        _tokens: &TokenResponse,
        profile: RawProfile,
    ) -> Result<User> {
        let user_data = normalize_profile(&profile).inspect_err(|e| {
            tracing::warn!(%provider, provider_id = %profile.id, "rejecting profile: {e}");
        })?;

        tracing::debug!(%provider, provider_id = %user_data.provider_id, "verifying social login");

        let response = self
            .login
            .social_login(provider, &user_data)
            .await
            .inspect_err(|e| tracing::warn!(%provider, "social login failed: {e}"))?;

        tracing::info!(%provider, user_id = %response.user.id, "social login succeeded");
        Ok(response.user)
    }

    /// Reduce a user to the principal stored in the session.
    #[must_use]
    pub fn serialize_user(&self, user: &User) -> SessionPrincipal {
        SessionPrincipal(user.id.clone())
    }

    /// Resolve a session principal back into a user.
    ///
    /// # Returns
    ///
    /// `None` if the user no longer exists. That is not an error.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the user repository, unchanged.
    pub async fn deserialize_user(&self, principal: &SessionPrincipal) -> Result<Option<User>> {
        let user = self.users.find_by_id(principal.user_id()).await?;
        if user.is_none() {
            tracing::debug!(user_id = %principal.user_id(), "session user not found");
        }
        Ok(user)
    }
}
