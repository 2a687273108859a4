//! Mock collaborator implementations for testing.
//!
//! In-memory versions of [`crate::providers::SocialLoginService`] and
//! [`crate::providers::UserRepository`] for unit and integration tests and
//! local demos.

pub mod login;
pub mod user;

pub use login::MockSocialLoginService;
pub use user::MockUserRepository;
