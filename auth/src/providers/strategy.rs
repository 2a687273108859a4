//! Strategy trait and the options every provider strategy is built from.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::ProviderCredentials;
use crate::constants::{callback_paths, facebook, google};
use crate::error::{AuthError, Result};
use crate::profile::RawProfile;
use crate::state::ProviderKind;

/// A registered, provider-specific authentication flow.
///
/// A strategy knows where to send the user (consent URL), how to redeem the
/// authorization code on its callback path, and how to fetch and parse the
/// provider profile. What happens with the profile afterwards is up to
/// [`crate::SocialAuth::verify`].
#[async_trait]
pub trait Strategy: Send + Sync {
    /// The provider this strategy authenticates against.
    fn provider(&self) -> ProviderKind;

    /// Registry key. Defaults to the provider name.
    fn name(&self) -> &'static str {
        self.provider().as_str()
    }

    /// Path the provider redirects back to (e.g., `/auth/google/callback`).
    fn callback_path(&self) -> &str;

    /// Scopes requested on the consent screen.
    fn scopes(&self) -> &[String];

    /// Build the consent URL for this provider.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InternalError` if the query cannot be encoded.
    fn authorization_url(&self, state: &str, redirect_uri: &str) -> Result<String>;

    /// Redeem an authorization code for tokens.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::OAuthTokenExchangeFailed` if the request fails or
    /// the provider rejects the code.
    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenResponse>;

    /// Fetch the provider profile for an access token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::OAuthUserInfoFailed` if the request fails or the
    /// response is malformed.
    async fn fetch_profile(&self, access_token: &str) -> Result<RawProfile>;
}

/// Tokens returned by a provider's token endpoint.
///
/// Handed to verification alongside the profile, but not used by it.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,

    /// Refresh token (if issued).
    pub refresh_token: Option<String>,

    /// Expiration timestamp (if provided).
    pub expires_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Raw token endpoint body shared by Google and Facebook.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderTokenBody {
    access_token: String,
    /// Lifetime in seconds. Out-of-range values fail to deserialize.
    expires_in: Option<u32>,
    refresh_token: Option<String>,
}

impl From<ProviderTokenBody> for TokenResponse {
    fn from(body: ProviderTokenBody) -> Self {
        Self {
            access_token: body.access_token,
            refresh_token: body.refresh_token,
            expires_at: body.expires_in.map(|seconds| {
                Utc::now() + chrono::Duration::seconds(i64::from(seconds))
            }),
        }
    }
}

/// Provider endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Consent screen URL.
    pub authorize_url: String,

    /// Token endpoint URL.
    pub token_url: String,

    /// Profile endpoint URL.
    pub profile_url: String,
}

/// Everything a strategy needs to be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOptions {
    /// Provider.
    pub provider: ProviderKind,

    /// Client credentials.
    pub credentials: ProviderCredentials,

    /// Callback path bound to the strategy.
    pub callback_path: String,

    /// Requested scopes.
    pub scopes: Vec<String>,

    /// Requested profile fields (Facebook only).
    pub profile_fields: Vec<String>,

    /// Provider endpoints.
    pub endpoints: Endpoints,
}

impl StrategyOptions {
    /// Google defaults: scopes `profile email`, callback `/auth/google/callback`.
    #[must_use]
    pub fn google(credentials: ProviderCredentials) -> Self {
        Self {
            provider: ProviderKind::Google,
            credentials,
            callback_path: callback_paths::GOOGLE.to_string(),
            scopes: to_strings(google::SCOPES),
            profile_fields: Vec::new(),
            endpoints: Endpoints {
                authorize_url: google::AUTHORIZE_URL.to_string(),
                token_url: google::TOKEN_URL.to_string(),
                profile_url: google::PROFILE_URL.to_string(),
            },
        }
    }

    /// Facebook defaults: scope `email`, profile fields `id emails name`,
    /// callback `/auth/facebook/callback`.
    #[must_use]
    pub fn facebook(credentials: ProviderCredentials) -> Self {
        Self {
            provider: ProviderKind::Facebook,
            credentials,
            callback_path: callback_paths::FACEBOOK.to_string(),
            scopes: to_strings(facebook::SCOPES),
            profile_fields: to_strings(facebook::PROFILE_FIELDS),
            endpoints: Endpoints {
                authorize_url: facebook::AUTHORIZE_URL.to_string(),
                token_url: facebook::TOKEN_URL.to_string(),
                profile_url: facebook::PROFILE_URL.to_string(),
            },
        }
    }

    /// Set custom scopes.
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Set custom profile fields.
    #[must_use]
    pub fn with_profile_fields(mut self, fields: Vec<String>) -> Self {
        self.profile_fields = fields;
        self
    }

    /// Point the strategy at different endpoints (used against local test servers).
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set a custom callback path.
    #[must_use]
    pub fn with_callback_path(mut self, path: impl Into<String>) -> Self {
        self.callback_path = path.into();
        self
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Build `{authorize_url}?client_id=..&redirect_uri=..&response_type=code&scope=..&state=..`
/// plus provider-specific `extra` parameters.
pub(crate) fn build_authorization_url(
    options: &StrategyOptions,
    state: &str,
    redirect_uri: &str,
    scope_separator: &str,
    extra: &[(&str, &str)],
) -> Result<String> {
    let scope = options.scopes.join(scope_separator);
    let mut params = vec![
        ("client_id", options.credentials.client_id.as_str()),
        ("redirect_uri", redirect_uri),
        ("response_type", "code"),
        ("scope", scope.as_str()),
        ("state", state),
    ];
    params.extend_from_slice(extra);

    let query = serde_urlencoded::to_string(&params)
        .map_err(|e| AuthError::InternalError(format!("Failed to build URL: {e}")))?;

    Ok(format!("{}?{query}", options.endpoints.authorize_url))
}

/// Parse a token endpoint response, logging the body of a rejection.
pub(crate) async fn read_token_response(
    provider: ProviderKind,
    response: reqwest::Response,
) -> Result<TokenResponse> {
    if !response.status().is_success() {
        let status = response.status();
        let error_body = response.text().await.unwrap_or_default();
        tracing::error!(%provider, %status, "token exchange failed: {}", error_body);
        return Err(AuthError::OAuthTokenExchangeFailed(format!(
            "{provider} token endpoint returned {status}"
        )));
    }

    let body: ProviderTokenBody = response
        .json()
        .await
        .map_err(|e| AuthError::OAuthTokenExchangeFailed(e.to_string()))?;

    Ok(body.into())
}

/// Ensure a profile response succeeded, logging the body otherwise.
pub(crate) async fn ensure_profile_success(
    provider: ProviderKind,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_body = response.text().await.unwrap_or_default();
    tracing::error!(%provider, %status, "profile request failed: {}", error_body);
    Err(AuthError::OAuthUserInfoFailed(format!(
        "{provider} profile endpoint returned {status}"
    )))
}
