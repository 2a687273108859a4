//! Social login constants.
//!
//! Environment variable names, callback paths and provider endpoints.

/// Environment variables read by [`crate::config::SocialAuthConfig::from_env`].
pub mod env_vars {
    /// Google OAuth client ID.
    pub const GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";

    /// Google OAuth client secret.
    pub const GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";

    /// Facebook app ID.
    pub const FACEBOOK_APP_ID: &str = "FACEBOOK_APP_ID";

    /// Facebook app secret.
    pub const FACEBOOK_APP_SECRET: &str = "FACEBOOK_APP_SECRET";

    /// Public base URL used to build absolute callback URLs (optional).
    pub const AUTH_BASE_URL: &str = "AUTH_BASE_URL";
}

/// Callback paths bound to each strategy.
pub mod callback_paths {
    /// Google OAuth callback.
    pub const GOOGLE: &str = "/auth/google/callback";

    /// Facebook OAuth callback.
    pub const FACEBOOK: &str = "/auth/facebook/callback";
}

/// Default base URL when `AUTH_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Google endpoints and defaults.
pub mod google {
    /// Consent screen.
    pub const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

    /// Token endpoint.
    pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

    /// OIDC userinfo endpoint.
    pub const PROFILE_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

    /// Requested scopes.
    pub const SCOPES: &[&str] = &["profile", "email"];
}

/// Facebook endpoints and defaults.
pub mod facebook {
    /// Login dialog.
    pub const AUTHORIZE_URL: &str = "https://www.facebook.com/v18.0/dialog/oauth";

    /// Token endpoint.
    pub const TOKEN_URL: &str = "https://graph.facebook.com/v18.0/oauth/access_token";

    /// Graph API profile endpoint.
    pub const PROFILE_URL: &str = "https://graph.facebook.com/v18.0/me";

    /// Requested scopes.
    pub const SCOPES: &[&str] = &["email"];

    /// Profile fields requested from the Graph API.
    pub const PROFILE_FIELDS: &[&str] = &["id", "emails", "name"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_paths() {
        assert_eq!(callback_paths::GOOGLE, "/auth/google/callback");
        assert_eq!(callback_paths::FACEBOOK, "/auth/facebook/callback");
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(env_vars::GOOGLE_CLIENT_ID, "GOOGLE_CLIENT_ID");
        assert_eq!(env_vars::GOOGLE_CLIENT_SECRET, "GOOGLE_CLIENT_SECRET");
        assert_eq!(env_vars::FACEBOOK_APP_ID, "FACEBOOK_APP_ID");
        assert_eq!(env_vars::FACEBOOK_APP_SECRET, "FACEBOOK_APP_SECRET");
    }
}
