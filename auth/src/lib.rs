//! # Campaign Hub Social Authentication
//!
//! Social login for Campaign Hub: Google and Facebook OAuth 2.0 strategies,
//! profile normalization, and the bridge between authenticated users and
//! session principals.
//!
//! ## Features
//!
//! - **Explicit registry**: strategies live in an owned [`StrategyRegistry`],
//!   not in process-wide state
//! - **Delegated accounts**: user lookup/creation is the job of a
//!   [`providers::SocialLoginService`]
//! - **Result-based**: every failure comes back as an [`AuthError`]
//! - **Testable**: in-memory collaborators in [`mocks`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use campaign_hub_auth::{configure, SocialAuthConfig, ProviderKind};
//!
//! let config = SocialAuthConfig::from_env()?;
//! let auth = configure(&config, login_service, user_repository)?;
//!
//! // 1. Redirect to the provider
//! let url = auth.authorization_url(ProviderKind::Google, &state)?;
//!
//! // 2. Handle /auth/google/callback
//! let user = auth.authenticate_callback(ProviderKind::Google, &code).await?;
//!
//! // 3. Store the principal, resolve it on later requests
//! let principal = auth.serialize_user(&user);
//! let user = auth.deserialize_user(&principal).await?;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod config;
pub mod constants;
pub mod error;
pub mod profile;
pub mod providers;
pub mod registry;
pub mod social_auth;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use config::{ProviderCredentials, SocialAuthConfig};
pub use error::{AuthError, Result};
pub use profile::{RawProfile, SocialUserData, normalize_profile};
pub use registry::StrategyRegistry;
pub use social_auth::{SocialAuth, configure};
pub use state::{ProviderKind, SessionPrincipal, User, UserId};
