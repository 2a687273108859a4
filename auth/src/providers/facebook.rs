//! Facebook Login strategy.

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

/// Facebook strategy.
///
/// Profile fields are requested under their portable names (`id`, `emails`,
/// `name`, `displayName`, `photos`) and translated to Graph API fields.
#[derive(Debug, Clone)]
pub struct FacebookStrategy {
    options: StrategyOptions,
    http_client: Client,
}

impl FacebookStrategy {
    /// Create a Facebook strategy from options.
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

    /// Graph API `fields` parameter for the configured profile fields.
    #[must_use]
    pub fn graph_fields(&self) -> String {
        let mut fields: Vec<&str> = Vec::new();
        for field in &self.options.profile_fields {
            let mapped: &[&str] = match field.as_str() {
                "id" => &["id"],
                "emails" => &["email"],
                "name" => &["last_name", "first_name", "middle_name"],
                "displayName" => &["name"],
                "photos" => &["picture.type(large)"],
                other => {
                    tracing::debug!(field = other, "passing unmapped profile field through");
                    fields.push(other);
                    continue;
                }
            };
            fields.extend_from_slice(mapped);
        }
        fields.dedup();
        fields.join(",")
    }
}

#[async_trait]
impl Strategy for FacebookStrategy {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Facebook
    }

    fn callback_path(&self) -> &str {
        &self.options.callback_path
    }

    fn scopes(&self) -> &[String] {
        &self.options.scopes
    }

    fn authorization_url(&self, state: &str, redirect_uri: &str) -> Result<String> {
        build_authorization_url(&self.options, state, redirect_uri, ",", &[])
    }

    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenResponse> {
        let params = [
            ("client_id", self.options.credentials.client_id.as_str()),
            ("client_secret", self.options.credentials.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("code", code),
        ];

        let response = self
            .http_client
            .get(&self.options.endpoints.token_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| AuthError::OAuthTokenExchangeFailed(e.to_string()))?;

        read_token_response(ProviderKind::Facebook, response).await
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<RawProfile> {
        let fields = self.graph_fields();
        let response = self
            .http_client
            .get(&self.options.endpoints.profile_url)
            .query(&[("fields", fields.as_str()), ("access_token", access_token)])
            .send()
            .await
            .map_err(|e| AuthError::OAuthUserInfoFailed(e.to_string()))?;

        let facebook_user: FacebookUser = ensure_profile_success(ProviderKind::Facebook, response)
            .await?
            .json()
            .await
            .map_err(|e| AuthError::OAuthUserInfoFailed(e.to_string()))?;

        Ok(facebook_user.into())
    }
}

/// Graph API `/me` response.
#[derive(Debug, Deserialize)]
struct FacebookUser {
    id: String,
    name: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    /// Absent when the user declined the `email` permission.
    email: Option<String>,
    picture: Option<FacebookPicture>,
}

#[derive(Debug, Deserialize)]
struct FacebookPicture {
    data: FacebookPictureData,
}

#[derive(Debug, Deserialize)]
struct FacebookPictureData {
    url: String,
}

impl From<FacebookUser> for RawProfile {
    fn from(user: FacebookUser) -> Self {
        let name = (user.first_name.is_some() || user.last_name.is_some()).then(|| ProfileName {
            given_name: user.first_name,
            family_name: user.last_name,
        });

        Self {
            provider: ProviderKind::Facebook,
            id: user.id,
            display_name: user.name,
            name,
            emails: user.email.map(|value| {
                vec![ProfileEmail {
                    value,
                    verified: None,
                }]
            }),
            photos: user.picture.map(|picture| vec![picture.data.url]),
        }
    }
}
