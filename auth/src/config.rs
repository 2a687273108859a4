//! Social login configuration.
//!
//! Provider credentials are constant for the process lifetime and are read
//! from the environment once, at startup.

use crate::constants::{DEFAULT_BASE_URL, env_vars};
use crate::error::{AuthError, Result};

/// OAuth client credentials for a single provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    /// OAuth client ID (Facebook: app ID).
    pub client_id: String,

    /// OAuth client secret (Facebook: app secret). Keep confidential.
    pub client_secret: String,
}

impl ProviderCredentials {
    /// Create credentials from an ID/secret pair.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Configuration for [`crate::configure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAuthConfig {
    /// Public base URL of the application (e.g., "https://app.example.com").
    ///
    /// Redirect URIs are `{base_url}{callback_path}`.
    pub base_url: String,

    /// Google credentials.
    pub google: ProviderCredentials,

    /// Facebook credentials.
    pub facebook: ProviderCredentials,
}

impl SocialAuthConfig {
    /// Create a configuration with the default base URL.
    #[must_use]
    pub fn new(google: ProviderCredentials, facebook: ProviderCredentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            google,
            facebook,
        }
    }

    /// Set the public base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingConfig` naming the first required variable
    /// that is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingConfig` naming the first required variable
    /// that is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String> {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AuthError::MissingConfig {
                    var: var.to_string(),
                })
        };

        let google = ProviderCredentials::new(
            required(env_vars::GOOGLE_CLIENT_ID)?,
            required(env_vars::GOOGLE_CLIENT_SECRET)?,
        );
        let facebook = ProviderCredentials::new(
            required(env_vars::FACEBOOK_APP_ID)?,
            required(env_vars::FACEBOOK_APP_SECRET)?,
        );

        let config = Self::new(google, facebook);
        Ok(match lookup(env_vars::AUTH_BASE_URL).filter(|url| !url.trim().is_empty()) {
            Some(base_url) => config.with_base_url(base_url.trim()),
            None => config,
        })
    }
}
