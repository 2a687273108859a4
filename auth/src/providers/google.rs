//! Google OAuth 2.0 strategy.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::strategy::{
    Strategy, StrategyOptions, TokenResponse, build_authorization_url, ensure_profile_success,
    read_token_response,
};
use crate::error::{AuthError, Result};
use crate::profile::{ProfileEmail, ProfileName, RawProfile};
use crate::state::ProviderKind;

/// Google strategy.
///
/// Requests the `profile` and `email` scopes and reads the OIDC userinfo
/// endpoint.
///
/// # Example
///
/// ```no_run
/// use campaign_hub_auth::config::ProviderCredentials;
/// use campaign_hub_auth::providers::{GoogleStrategy, StrategyOptions};
///
/// let google = GoogleStrategy::new(StrategyOptions::google(
///     ProviderCredentials::new("your-client-id", "your-client-secret"),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct GoogleStrategy {
    options: StrategyOptions,
    http_client: Client,
}

impl GoogleStrategy {
    /// Create a Google strategy from options.
    #[must_use]
    pub fn new(options: StrategyOptions) -> Self {
        Self {
            options,
            http_client: Client::new(),
        }
    }

    /// Options this strategy was built from.
    #[must_use]
    pub const fn options(&self) -> &StrategyOptions {
        &self.options
    }
}

#[async_trait]
impl Strategy for GoogleStrategy {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Google
    }

    fn callback_path(&self) -> &str {
        &self.options.callback_path
    }

    fn scopes(&self) -> &[String] {
        &self.options.scopes
    }

    fn authorization_url(&self, state: &str, redirect_uri: &str) -> Result<String> {
        build_authorization_url(&self.options, state, redirect_uri, " ", &[])
    }

    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenResponse> {
        let params = [
            ("code", code),
            ("client_id", self.options.credentials.client_id.as_str()),
            ("client_secret", self.options.credentials.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http_client
            .post(&self.options.endpoints.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::OAuthTokenExchangeFailed(e.to_string()))?;

        read_token_response(ProviderKind::Google, response).await
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<RawProfile> {
        let response = self
            .http_client
            .get(&self.options.endpoints.profile_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::OAuthUserInfoFailed(e.to_string()))?;

        let google_user: GoogleUserInfo = ensure_profile_success(ProviderKind::Google, response)
            .await?
            .json()
            .await
            .map_err(|e| AuthError::OAuthUserInfoFailed(e.to_string()))?;

        Ok(google_user.into())
    }
}

/// Google's userinfo response.
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    /// Stable Google account ID.
    sub: String,
    name: Option<String>,
    given_name: Option<String>,
    family_name: Option<String>,
    picture: Option<String>,
    /// Absent when the `email` scope was not granted.
    email: Option<String>,
    email_verified: Option<bool>,
}

impl From<GoogleUserInfo> for RawProfile {
    fn from(info: GoogleUserInfo) -> Self {
        let name = (info.given_name.is_some() || info.family_name.is_some()).then(|| ProfileName {
            given_name: info.given_name,
            family_name: info.family_name,
        });

        Self {
            provider: ProviderKind::Google,
            id: info.sub,
            display_name: info.name,
            name,
            emails: info.email.map(|value| {
                vec![ProfileEmail {
                    value,
                    verified: info.email_verified,
                }]
            }),
            photos: info.picture.map(|url| vec![url]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderCredentials;

    fn strategy() -> GoogleStrategy {
        GoogleStrategy::new(StrategyOptions::google(ProviderCredentials::new(
            "test_client_id",
            "test_secret",
        )))
    }

    #[test]
    fn test_strategy_identity() {
        let google = strategy();
        assert_eq!(google.provider(), ProviderKind::Google);
        assert_eq!(google.name(), "google");
        assert_eq!(google.callback_path(), "/auth/google/callback");
        assert_eq!(google.scopes(), ["profile", "email"]);
    }

    #[test]
    fn test_authorization_url() {
        let url = strategy()
            .authorization_url("test_state_123", "http://localhost:3000/auth/google/callback")
            .unwrap();

        assert!(url.contains("client_id=test_client_id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=profile+email"));
        assert!(url.contains("state=test_state_123"));
    }

    #[test]
    fn test_userinfo_conversion() {
        let info: GoogleUserInfo = serde_json::from_str(
            r#"{
                "sub": "110169484474386276334",
                "name": "Ada Lovelace",
                "given_name": "Ada",
                "family_name": "Lovelace",
                "picture": "https://example.com/ada.png",
                "email": "ada@example.com",
                "email_verified": true,
                "locale": "en"
            }"#,
        )
        .unwrap();

        let profile = RawProfile::from(info);
        assert_eq!(profile.id, "110169484474386276334");
        assert_eq!(profile.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.primary_email(), Some("ada@example.com"));
        assert_eq!(profile.photos, Some(vec!["https://example.com/ada.png".to_string()]));
    }

    #[test]
    fn test_userinfo_without_email_has_no_emails() {
        let info: GoogleUserInfo = serde_json::from_str(r#"{"sub": "1"}"#).unwrap();
        let profile = RawProfile::from(info);

        assert!(profile.emails.is_none());
        assert!(profile.name.is_none());
    }
}
