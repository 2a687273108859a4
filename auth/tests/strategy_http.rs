//! Callback-phase tests against a local stand-in for the provider endpoints.

use campaign_hub_auth::{
    AuthError, ProviderCredentials, ProviderKind, SocialAuth, StrategyRegistry,
    mocks::{MockSocialLoginService, MockUserRepository},
    providers::{Endpoints, FacebookStrategy, GoogleStrategy, StrategyOptions},
};
use mockito::{Matcher, Server};

const BASE_URL: &str = "https://campaigns.example.com";

fn endpoints(server: &Server) -> Endpoints {
    Endpoints {
        authorize_url: format!("{}/authorize", server.url()),
        token_url: format!("{}/token", server.url()),
        profile_url: format!("{}/me", server.url()),
    }
}

fn auth_against(
    server: &Server,
    login: MockSocialLoginService,
) -> SocialAuth<MockSocialLoginService, MockUserRepository> {
    let mut registry = StrategyRegistry::new();
    registry
        .register(GoogleStrategy::new(
            StrategyOptions::google(ProviderCredentials::new("g-id", "g-secret"))
                .with_endpoints(endpoints(server)),
        ))
        .unwrap();
    registry
        .register(FacebookStrategy::new(
            StrategyOptions::facebook(ProviderCredentials::new("fb-id", "fb-secret"))
                .with_endpoints(endpoints(server)),
        ))
        .unwrap();

    SocialAuth::new(BASE_URL.to_string(), registry, login, MockUserRepository::new())
}

#[tokio::test]
async fn test_google_callback_exchanges_code_and_logs_in() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("POST", "/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("code".into(), "google-code".into()),
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded(
                "redirect_uri".into(),
                "https://campaigns.example.com/auth/google/callback".into(),
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"google-at","token_type":"Bearer","expires_in":3599}"#)
        .create_async()
        .await;
    let profile = server
        .mock("GET", "/me")
        .match_header("authorization", "Bearer google-at")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"sub":"1101","name":"Ada Lovelace","email":"ada@example.com","email_verified":true}"#,
        )
        .create_async()
        .await;

    let login = MockSocialLoginService::new();
    let auth = auth_against(&server, login.clone());
    let user = auth
        .authenticate_callback(ProviderKind::Google, "google-code")
        .await
        .unwrap();

    token.assert_async().await;
    profile.assert_async().await;
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.provider_id.as_deref(), Some("1101"));
    assert_eq!(login.calls().len(), 1);
}

#[tokio::test]
async fn test_facebook_callback_requests_graph_fields() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("GET", "/token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("code".into(), "fb-code".into()),
            Matcher::UrlEncoded("client_id".into(), "fb-id".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"fb-at","token_type":"bearer","expires_in":5183944}"#)
        .create_async()
        .await;
    let profile = server
        .mock("GET", "/me")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("access_token".into(), "fb-at".into()),
            Matcher::UrlEncoded(
                "fields".into(),
                "id,email,last_name,first_name,middle_name".into(),
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id":"10158","first_name":"Grace","last_name":"Hopper","email":"grace@example.com"}"#,
        )
        .create_async()
        .await;

    let login = MockSocialLoginService::new();
    let auth = auth_against(&server, login.clone());
    let user = auth
        .authenticate_callback(ProviderKind::Facebook, "fb-code")
        .await
        .unwrap();

    token.assert_async().await;
    profile.assert_async().await;
    assert_eq!(user.name, "Grace Hopper");
    assert_eq!(user.provider, Some(ProviderKind::Facebook));
}

#[tokio::test]
async fn test_rejected_code_surfaces_token_exchange_error() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant"}"#)
        .create_async()
        .await;

    let login = MockSocialLoginService::new();
    let auth = auth_against(&server, login.clone());
    let result = auth
        .authenticate_callback(ProviderKind::Google, "stale-code")
        .await;

    assert!(matches!(result, Err(AuthError::OAuthTokenExchangeFailed(_))));
    assert!(login.calls().is_empty());
}

#[tokio::test]
async fn test_out_of_range_token_lifetime_is_an_exchange_error() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"at","expires_in":9223372036854775807}"#)
        .create_async()
        .await;

    let login = MockSocialLoginService::new();
    let auth = auth_against(&server, login.clone());
    let result = auth.authenticate_callback(ProviderKind::Google, "c").await;

    assert!(matches!(result, Err(AuthError::OAuthTokenExchangeFailed(_))));
    assert!(login.calls().is_empty());
}

#[tokio::test]
async fn test_facebook_profile_without_email_is_rejected() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("GET", "/token")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"fb-at"}"#)
        .create_async()
        .await;
    let _profile = server
        .mock("GET", "/me")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"10158","first_name":"Grace","last_name":"Hopper"}"#)
        .create_async()
        .await;

    let login = MockSocialLoginService::new();
    let auth = auth_against(&server, login.clone());
    let result = auth
        .authenticate_callback(ProviderKind::Facebook, "fb-code")
        .await;

    assert_eq!(
        result,
        Err(AuthError::ProfileMissingEmail {
            provider: "facebook".to_string()
        })
    );
    assert!(login.calls().is_empty());
}

#[tokio::test]
async fn test_profile_endpoint_failure_surfaces_user_info_error() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"google-at"}"#)
        .create_async()
        .await;
    let _profile = server
        .mock("GET", "/me")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let auth = auth_against(&server, MockSocialLoginService::new());
    let result = auth
        .authenticate_callback(ProviderKind::Google, "google-code")
        .await;

    assert!(matches!(result, Err(AuthError::OAuthUserInfoFailed(_))));
}
