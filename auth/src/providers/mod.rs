//! Authentication providers.
//!
//! This module holds the provider strategies (Google, Facebook) and the
//! traits for the two external collaborators this crate calls into:
//!
//! - [`SocialLoginService`]: finds or creates the account for a provider
//!   identity
//! - [`UserRepository`]: resolves a session principal back into a user
//!
//! Collaborators are **interfaces**, not implementations. Tests use the
//! in-memory versions from [`crate::mocks`].

pub mod facebook;
pub mod google;
pub mod login;
pub mod strategy;
pub mod user;

pub use facebook::FacebookStrategy;
pub use google::GoogleStrategy;
pub use login::{SocialLoginResponse, SocialLoginService};
pub use strategy::{Endpoints, Strategy, StrategyOptions, TokenResponse};
pub use user::UserRepository;
