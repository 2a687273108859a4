//! Identity types shared by strategies, the login service and the session
//! bridge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AuthError;

// ═══════════════════════════════════════════════════════════════════════
// Providers
// ═══════════════════════════════════════════════════════════════════════

/// Supported social login providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Google Identity Platform.
    Google,

    /// Facebook Login.
    Facebook,
}

impl ProviderKind {
    /// All supported providers, in registration order.
    pub const ALL: [Self; 2] = [Self::Google, Self::Facebook];

    /// Get the provider name used as registry key and login-service argument.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            _ => Err(AuthError::InvalidOAuthProvider(s.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Users and Sessions
// ═══════════════════════════════════════════════════════════════════════

/// Opaque identifier of a user record owned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Wrap an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User record as returned by the social login service and user repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    pub id: UserId,

    /// Email address.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Provider the account was created through (if social).
    pub provider: Option<ProviderKind>,

    /// Provider-assigned account ID (if social).
    pub provider_id: Option<String>,

    /// Account created timestamp.
    pub created_at: DateTime<Utc>,
}

/// Minimal identity persisted in the session between requests.
///
/// Created at successful login, resolved back into a [`User`] on every
/// request that needs identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionPrincipal(pub UserId);

impl SessionPrincipal {
    /// The user ID carried by this principal.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.0
    }
}

impl From<UserId> for SessionPrincipal {
    fn from(id: UserId) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names() {
        assert_eq!(ProviderKind::Google.as_str(), "google");
        assert_eq!(ProviderKind::Facebook.to_string(), "facebook");
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("google".parse::<ProviderKind>(), Ok(ProviderKind::Google));
        assert_eq!("Facebook".parse::<ProviderKind>(), Ok(ProviderKind::Facebook));
        assert_eq!(
            "github".parse::<ProviderKind>(),
            Err(AuthError::InvalidOAuthProvider("github".to_string()))
        );
    }

    #[test]
    fn test_session_principal_serializes_as_plain_id() {
        let principal = SessionPrincipal::from(UserId::new("u1"));
        let json = serde_json::to_string(&principal).unwrap();
        assert_eq!(json, "\"u1\"");
    }
}
