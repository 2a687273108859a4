//! Integration tests for verification and session bridging.

use campaign_hub_auth::{
    AuthError, ProviderCredentials, ProviderKind, RawProfile, SessionPrincipal, SocialAuth,
    SocialAuthConfig, SocialUserData, UserId, configure,
    mocks::{MockSocialLoginService, MockUserRepository},
    providers::TokenResponse,
};

fn test_config() -> SocialAuthConfig {
    SocialAuthConfig::new(
        ProviderCredentials::new("google-client", "google-secret"),
        ProviderCredentials::new("facebook-app", "facebook-secret"),
    )
}

fn create_test_auth(
    login: MockSocialLoginService,
    users: MockUserRepository,
) -> SocialAuth<MockSocialLoginService, MockUserRepository> {
    configure(&test_config(), login, users).unwrap()
}

fn unused_tokens() -> TokenResponse {
    TokenResponse {
        access_token: "access".to_string(),
        refresh_token: Some("refresh".to_string()),
        expires_at: None,
    }
}

fn google_profile() -> RawProfile {
    RawProfile::new(ProviderKind::Google, "google-42")
        .with_display_name("Ada Lovelace")
        .with_name("Ada", "Lovelace")
        .with_email("ada@example.com")
}

fn facebook_profile() -> RawProfile {
    RawProfile::new(ProviderKind::Facebook, "facebook-7")
        .with_name("Grace", "Hopper")
        .with_email("grace@example.com")
        .with_email("hopper@navy.example.com")
}

#[tokio::test]
async fn test_google_profile_is_normalized_for_login_service() {
    let login = MockSocialLoginService::new();
    let auth = create_test_auth(login.clone(), MockUserRepository::new());

    auth.verify(ProviderKind::Google, &unused_tokens(), google_profile())
        .await
        .unwrap();

    assert_eq!(
        login.calls(),
        vec![(
            ProviderKind::Google,
            SocialUserData {
                email: "ada@example.com".to_string(),
                name: "Ada Lovelace".to_string(),
                provider: ProviderKind::Google,
                provider_id: "google-42".to_string(),
            }
        )]
    );
}

#[tokio::test]
async fn test_facebook_profile_is_normalized_for_login_service() {
    let login = MockSocialLoginService::new();
    let auth = create_test_auth(login.clone(), MockUserRepository::new());

    auth.verify(ProviderKind::Facebook, &unused_tokens(), facebook_profile())
        .await
        .unwrap();

    let (provider, data) = login.calls().remove(0);
    assert_eq!(provider, ProviderKind::Facebook);
    assert_eq!(data.email, "grace@example.com");
    assert_eq!(data.name, "Grace Hopper");
    assert_eq!(data.provider, ProviderKind::Facebook);
    assert_eq!(data.provider_id, "facebook-7");
}

#[tokio::test]
async fn test_verify_returns_exactly_the_service_user() {
    let expected = MockUserRepository::sample_user("u-google");
    let auth = create_test_auth(
        MockSocialLoginService::returning(expected.clone()),
        MockUserRepository::new(),
    );

    let user = auth
        .verify(ProviderKind::Google, &unused_tokens(), google_profile())
        .await
        .unwrap();

    assert_eq!(user, expected);
}

#[tokio::test]
async fn test_verify_propagates_service_error() {
    let error = AuthError::SocialLoginFailed("account suspended".to_string());
    let auth = create_test_auth(
        MockSocialLoginService::failing_with(error.clone()),
        MockUserRepository::new(),
    );

    let result = auth
        .verify(ProviderKind::Facebook, &unused_tokens(), facebook_profile())
        .await;

    assert_eq!(result, Err(error));
}

#[tokio::test]
async fn test_verify_profile_without_emails_fails_without_panicking() {
    let login = MockSocialLoginService::new();
    let auth = create_test_auth(login.clone(), MockUserRepository::new());
    let profile = RawProfile::new(ProviderKind::Google, "google-1").with_display_name("Nobody");

    let result = auth.verify(ProviderKind::Google, &unused_tokens(), profile).await;

    assert_eq!(
        result,
        Err(AuthError::ProfileMissingEmail {
            provider: "google".to_string()
        })
    );
    assert!(login.calls().is_empty());
}

#[tokio::test]
async fn test_session_round_trip() {
    let users = MockUserRepository::new();
    let stored = MockUserRepository::sample_user("u1");
    users.insert(stored.clone());
    let auth = create_test_auth(MockSocialLoginService::new(), users);

    let principal = auth.serialize_user(&stored);
    assert_eq!(principal, SessionPrincipal(UserId::new("u1")));

    let resolved = auth.deserialize_user(&principal).await.unwrap();
    assert_eq!(resolved, Some(stored));
}

#[tokio::test]
async fn test_deserialize_unknown_user_is_none_not_error() {
    let auth = create_test_auth(MockSocialLoginService::new(), MockUserRepository::new());

    let resolved = auth
        .deserialize_user(&SessionPrincipal(UserId::new("u1")))
        .await;

    assert_eq!(resolved, Ok(None));
}

#[tokio::test]
async fn test_deserialize_propagates_lookup_error() {
    let auth = create_test_auth(MockSocialLoginService::new(), MockUserRepository::failing());

    let resolved = auth
        .deserialize_user(&SessionPrincipal(UserId::new("u1")))
        .await;

    assert_eq!(
        resolved,
        Err(AuthError::UserLookupFailed("mock failure".to_string()))
    );
}

#[test]
fn test_unregistered_provider_is_rejected() {
    let auth = create_test_auth(MockSocialLoginService::new(), MockUserRepository::new());

    assert!(auth.registry().get("twitter").is_err());
    assert!("twitter".parse::<ProviderKind>().is_err());
}
