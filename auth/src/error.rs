//! Error types for social login configuration and verification.

use thiserror::Error;

/// Result type alias for social authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Error taxonomy for the social-auth configurator.
///
/// Upstream failures (provider endpoints, malformed profiles) and downstream
/// collaborator failures (login service, user lookup) are both surfaced as
/// values. Nothing in this crate retries or recovers locally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    // ═══════════════════════════════════════════════════════════
    // Configuration Errors
    // ═══════════════════════════════════════════════════════════

    /// A required environment variable is missing or empty.
    #[error("Missing required configuration: {var}")]
    MissingConfig {
        /// Name of the environment variable
        var: String,
    },

    /// A strategy with this name was already registered.
    #[error("Strategy already registered: {0}")]
    StrategyAlreadyRegistered(String),

    /// No strategy is registered under this name.
    #[error("Strategy not registered: {0}")]
    StrategyNotRegistered(String),

    /// The provider name is not one we know how to handle.
    #[error("Invalid OAuth provider: {0}")]
    InvalidOAuthProvider(String),

    // ═══════════════════════════════════════════════════════════
    // Upstream (Provider) Errors
    // ═══════════════════════════════════════════════════════════

    /// The provider profile carries no email address.
    #[error("Profile from {provider} has no email address")]
    ProfileMissingEmail {
        /// Provider name
        provider: String,
    },

    /// Exchanging the authorization code for tokens failed.
    #[error("OAuth token exchange failed: {0}")]
    OAuthTokenExchangeFailed(String),

    /// Fetching the provider profile failed.
    #[error("OAuth user info fetch failed: {0}")]
    OAuthUserInfoFailed(String),

    // ═══════════════════════════════════════════════════════════
    // Downstream (Collaborator) Errors
    // ═══════════════════════════════════════════════════════════

    /// The social login service rejected or failed the login.
    #[error("Social login failed: {0}")]
    SocialLoginFailed(String),

    /// Looking up the session user failed.
    #[error("User lookup failed: {0}")]
    UserLookupFailed(String),

    /// Internal error (should not be exposed to users).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AuthError {
    /// Returns `true` if this error stems from the remote identity provider
    /// (endpoints or profile shape).
    ///
    /// # Examples
    ///
    /// ```
    /// # use campaign_hub_auth::AuthError;
    /// let err = AuthError::ProfileMissingEmail { provider: "google".to_string() };
    /// assert!(err.is_upstream_error());
    /// assert!(!AuthError::UserLookupFailed("timeout".to_string()).is_upstream_error());
    /// ```
    pub const fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            Self::ProfileMissingEmail { .. }
                | Self::OAuthTokenExchangeFailed(_)
                | Self::OAuthUserInfoFailed(_)
        )
    }

    /// Returns `true` if this error was raised by a collaborator
    /// (login service or user repository).
    pub const fn is_collaborator_error(&self) -> bool {
        matches!(self, Self::SocialLoginFailed(_) | Self::UserLookupFailed(_))
    }

    /// Returns `true` if this error is a startup configuration problem.
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::MissingConfig { .. }
                | Self::StrategyAlreadyRegistered(_)
                | Self::InvalidOAuthProvider(_)
        )
    }
}
