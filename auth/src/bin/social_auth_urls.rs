//! Print the consent and callback URLs of every configured strategy.
//!
//! Reads provider credentials from the environment (or a `.env` file) and
//! configures the strategies with in-memory collaborators, so it can be run
//! to sanity-check OAuth client settings before deploying.
//!
//! ```bash
//! GOOGLE_CLIENT_ID=... GOOGLE_CLIENT_SECRET=... \
//! FACEBOOK_APP_ID=... FACEBOOK_APP_SECRET=... \
//! cargo run -p campaign-hub-auth --bin social-auth-urls
//! ```

use anyhow::Context;
use campaign_hub_auth::mocks::{MockSocialLoginService, MockUserRepository};
use campaign_hub_auth::{ProviderKind, SocialAuthConfig, configure};
use rand::Rng;
use rand::distributions::Alphanumeric;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Missing .env is fine; variables may come from the real environment.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = SocialAuthConfig::from_env().context("loading social auth configuration")?;
    let auth = configure(&config, MockSocialLoginService::new(), MockUserRepository::new())
        .context("registering strategies")?;

    info!(
        base_url = auth.base_url(),
        strategies = ?auth.registry().names().collect::<Vec<_>>(),
        "social auth configured"
    );

    for provider in ProviderKind::ALL {
        let state: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        println!("{provider}");
        println!("  callback:  {}", auth.redirect_uri(provider)?);
        println!("  authorize: {}", auth.authorization_url(provider, &state)?);
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_hub_auth=info,social_auth_urls=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
