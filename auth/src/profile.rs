//! Provider profiles and their normalization into login data.
//!
//! Each strategy converts its provider's JSON into a [`RawProfile`]; the
//! verification step then derives a [`SocialUserData`] from it with the
//! provider-specific rules below.
//!
//! | Provider | email              | name                          |
//! |----------|--------------------|-------------------------------|
//! | Google   | `emails[0].value`  | `display_name`                |
//! | Facebook | `emails[0].value`  | `given_name` + `family_name`  |

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};
use crate::state::ProviderKind;

/// Structured name parts of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    /// First name.
    pub given_name: Option<String>,

    /// Last name.
    pub family_name: Option<String>,
}

/// One email address attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEmail {
    /// The address.
    pub value: String,

    /// Whether the provider asserts the address is verified.
    pub verified: Option<bool>,
}

/// Provider profile after strategy-level parsing, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    /// Provider that issued this profile.
    pub provider: ProviderKind,

    /// Provider-assigned account ID.
    pub id: String,

    /// Full display name.
    pub display_name: Option<String>,

    /// Structured name.
    pub name: Option<ProfileName>,

    /// Email addresses, primary first.
    pub emails: Option<Vec<ProfileEmail>>,

    /// Profile picture URLs.
    pub photos: Option<Vec<String>>,
}

impl RawProfile {
    /// Create a bare profile with only an ID.
    #[must_use]
    pub fn new(provider: ProviderKind, id: impl Into<String>) -> Self {
        Self {
            provider,
            id: id.into(),
            display_name: None,
            name: None,
            emails: None,
            photos: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the structured name.
    #[must_use]
    pub fn with_name(mut self, given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        self.name = Some(ProfileName {
            given_name: Some(given_name.into()),
            family_name: Some(family_name.into()),
        });
        self
    }

    /// Append an email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.emails.get_or_insert_with(Vec::new).push(ProfileEmail {
            value: email.into(),
            verified: None,
        });
        self
    }

    /// The first (primary) email address, if any.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .as_deref()
            .and_then(<[ProfileEmail]>::first)
            .map(|email| email.value.as_str())
            .filter(|value| !value.trim().is_empty())
    }
}

/// Normalized login data handed to the social login service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialUserData {
    /// Primary email address.
    pub email: String,

    /// Display name derived per provider.
    pub name: String,

    /// Provider name.
    pub provider: ProviderKind,

    /// Provider-assigned account ID.
    pub provider_id: String,
}

/// Derive login data from a provider profile.
///
/// # Errors
///
/// Returns `AuthError::ProfileMissingEmail` if the profile has no usable
/// email address.
pub fn normalize_profile(profile: &RawProfile) -> Result<SocialUserData> {
    let email = profile
        .primary_email()
        .ok_or_else(|| AuthError::ProfileMissingEmail {
            provider: profile.provider.as_str().to_string(),
        })?;

    let name = match profile.provider {
        ProviderKind::Google => profile
            .display_name
            .clone()
            .unwrap_or_else(|| structured_name(profile)),
        ProviderKind::Facebook => structured_name(profile),
    };

    Ok(SocialUserData {
        email: email.to_string(),
        name,
        provider: profile.provider,
        provider_id: profile.id.clone(),
    })
}

/// `"{given} {family}"`, skipping absent parts.
fn structured_name(profile: &RawProfile) -> String {
    let Some(name) = &profile.name else {
        return String::new();
    };

    [name.given_name.as_deref(), name.family_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_google_profile_uses_display_name() {
        let profile = RawProfile::new(ProviderKind::Google, "g-123")
            .with_display_name("Ada Lovelace")
            .with_name("Augusta", "King")
            .with_email("ada@example.com")
            .with_email("ada@work.example.com");

        let data = normalize_profile(&profile).unwrap();
        assert_eq!(
            data,
            SocialUserData {
                email: "ada@example.com".to_string(),
                name: "Ada Lovelace".to_string(),
                provider: ProviderKind::Google,
                provider_id: "g-123".to_string(),
            }
        );
    }

    #[test]
    fn test_facebook_profile_joins_name_parts() {
        let profile = RawProfile::new(ProviderKind::Facebook, "fb-9")
            .with_display_name("ignored")
            .with_name("Grace", "Hopper")
            .with_email("grace@example.com");

        let data = normalize_profile(&profile).unwrap();
        assert_eq!(data.name, "Grace Hopper");
        assert_eq!(data.email, "grace@example.com");
        assert_eq!(data.provider, ProviderKind::Facebook);
        assert_eq!(data.provider_id, "fb-9");
    }

    #[test]
    fn test_missing_emails_is_validation_error() {
        let profile = RawProfile::new(ProviderKind::Google, "g-1").with_display_name("No Mail");

        assert_eq!(
            normalize_profile(&profile),
            Err(AuthError::ProfileMissingEmail {
                provider: "google".to_string()
            })
        );
    }

    #[test]
    fn test_empty_emails_array_is_validation_error() {
        let mut profile = RawProfile::new(ProviderKind::Facebook, "fb-1");
        profile.emails = Some(Vec::new());

        assert!(matches!(
            normalize_profile(&profile),
            Err(AuthError::ProfileMissingEmail { provider }) if provider == "facebook"
        ));
    }

    #[test]
    fn test_google_without_display_name_falls_back_to_name_parts() {
        let profile = RawProfile::new(ProviderKind::Google, "g-2")
            .with_name("Alan", "Turing")
            .with_email("alan@example.com");

        assert_eq!(normalize_profile(&profile).unwrap().name, "Alan Turing");
    }

    #[test]
    fn test_user_data_serializes_camel_case() {
        let data = SocialUserData {
            email: "a@example.com".to_string(),
            name: "A".to_string(),
            provider: ProviderKind::Facebook,
            provider_id: "42".to_string(),
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["providerId"], "42");
        assert_eq!(json["provider"], "facebook");
    }

    proptest! {
        #[test]
        fn prop_facebook_name_has_no_stray_whitespace(
            given in "[A-Za-z ]{0,12}",
            family in "[A-Za-z ]{0,12}",
        ) {
            let profile = RawProfile::new(ProviderKind::Facebook, "fb")
                .with_name(given, family)
                .with_email("x@example.com");

            let name = normalize_profile(&profile).unwrap().name;
            prop_assert_eq!(name.trim(), name.as_str());
        }
    }
}
