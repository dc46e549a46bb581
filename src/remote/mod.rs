//! Remote service clients.
//!
//! This module provides the HTTP clients for the two external services the
//! application talks to: the user directory (authentication lookups) and the
//! recipe catalog (collection and single-record fetches).

pub mod catalog;
pub mod directory;

use crate::error::{LarderError, Result};
use crate::types::{Recipe, User};

pub use catalog::CatalogClient;
pub use directory::DirectoryClient;

/// Lookup interface for the user directory service.
pub trait DirectoryProvider: Send + Sync {
    /// Find the directory record whose username matches exactly, if any.
    fn find_user(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>>> + Send;
}

/// Fetch interface for the recipe catalog service.
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full recipe collection.
    fn fetch_catalog(&self) -> impl std::future::Future<Output = Result<Vec<Recipe>>> + Send;

    /// Fetch a single recipe by identifier.
    fn fetch_recipe(&self, id: u64) -> impl std::future::Future<Output = Result<Recipe>> + Send;
}

/// Authenticate a user against the directory.
///
/// The directory exposes no credential check, so a username match plus a
/// non-empty password is accepted as-is and the matched record becomes the
/// session identity.
pub async fn authenticate<D: DirectoryProvider>(
    directory: &D,
    username: &str,
    password: &str,
) -> Result<User> {
    if password.trim().is_empty() {
        return Err(LarderError::Validation(
            "Password cannot be empty".to_string(),
        ));
    }

    match directory.find_user(username).await? {
        Some(user) => Ok(user),
        None => Err(LarderError::InvalidCredentials),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct FakeDirectory {
        users: Vec<User>,
        lookups: AtomicUsize,
    }

    impl FakeDirectory {
        fn with_users(users: Vec<User>) -> Self {
            Self {
                users,
                lookups: AtomicUsize::new(0),
            }
        }
    }

    impl DirectoryProvider for FakeDirectory {
        async fn find_user(&self, username: &str) -> Result<Option<User>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.users.iter().find(|u| u.username == username).cloned())
        }
    }

    struct FailingDirectory;

    impl DirectoryProvider for FailingDirectory {
        async fn find_user(&self, _username: &str) -> Result<Option<User>> {
            Err(LarderError::Connectivity("connection refused".to_string()))
        }
    }

    fn emily() -> User {
        User {
            username: "emilys".to_string(),
            first_name: "Emily".to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_matching_username_any_password() {
        let directory = FakeDirectory::with_users(vec![emily()]);
        let user = authenticate(&directory, "emilys", "x").await.unwrap();
        assert_eq!(user.first_name, "Emily");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_username() {
        let directory = FakeDirectory::with_users(vec![emily()]);
        let err = authenticate(&directory, "nobody", "secret").await.unwrap_err();
        assert!(matches!(err, LarderError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_empty_password_skips_lookup() {
        let directory = FakeDirectory::with_users(vec![emily()]);
        let err = authenticate(&directory, "emilys", "").await.unwrap_err();
        assert!(matches!(err, LarderError::Validation(_)));
        assert_eq!(directory.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_authenticate_whitespace_password_skips_lookup() {
        let directory = FakeDirectory::with_users(vec![emily()]);
        let err = authenticate(&directory, "emilys", "   ").await.unwrap_err();
        assert!(matches!(err, LarderError::Validation(_)));
        assert_eq!(directory.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_authenticate_username_match_is_exact() {
        let directory = FakeDirectory::with_users(vec![emily()]);
        let err = authenticate(&directory, "EmilyS", "x").await.unwrap_err();
        assert!(matches!(err, LarderError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_directory_failure_is_connectivity() {
        let err = authenticate(&FailingDirectory, "emilys", "x").await.unwrap_err();
        assert!(matches!(err, LarderError::Connectivity(_)));
    }
}
