//! Mock user repository for testing.

use crate::error::{AuthError, Result};
use crate::providers::UserRepository;
use crate::state::{User, UserId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock user repository.
///
/// Uses in-memory storage for testing.
#[derive(Debug, Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
    failure: Option<AuthError>,
}

impl MockUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            failure: None,
        }
    }

    /// Create a repository whose lookups always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failure: Some(AuthError::UserLookupFailed("mock failure".to_string())),
            ..Self::new()
        }
    }

    /// Store a user.
    pub fn insert(&self, user: User) {
        if let Ok(mut users) = self.users.lock() {
            users.insert(user.id.clone(), user);
        }
    }

    /// A plain user record with the given ID.
    #[must_use]
    pub fn sample_user(id: &str) -> User {
        User {
            id: UserId::new(id),
            email: format!("{id}@example.com"),
            name: format!("User {id}"),
            provider: None,
            provider_id: None,
            created_at: chrono::Utc::now(),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for MockUserRepository {
    fn find_by_id(&self, id: &UserId) -> impl Future<Output = Result<Option<User>>> + Send {
        let users = Arc::clone(&self.users);
        let failure = self.failure.clone();
        let id = id.clone();

        async move {
            if let Some(error) = failure {
                return Err(error);
            }

            Ok(users
                .lock()
                .map_err(|_| AuthError::InternalError("mock lock poisoned".to_string()))?
                .get(&id)
                .cloned())
        }
    }
}
