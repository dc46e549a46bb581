//! Authentication gate and session lifecycle tests.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use common::mock_data::mock_user;
use larder::error::LarderError;
use larder::remote::{DirectoryProvider, authenticate};
use larder::session::{Session, SessionStore};
use larder::types::User;

/// Directory stub that records how many lookups were issued.
struct StubDirectory {
    users: Vec<User>,
    lookups: AtomicUsize,
    fail_with: Option<String>,
}

impl StubDirectory {
    fn new(users: Vec<User>) -> Self {
        Self {
            users,
            lookups: AtomicUsize::new(0),
            fail_with: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            users: vec![],
            lookups: AtomicUsize::new(0),
            fail_with: Some(message.to_string()),
        }
    }
}

impl DirectoryProvider for StubDirectory {
    async fn find_user(&self, username: &str) -> larder::Result<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            return Err(LarderError::Connectivity(message.clone()));
        }
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}

#[tokio::test]
async fn test_known_username_with_any_nonempty_password_succeeds() {
    let directory = StubDirectory::new(vec![mock_user("emilys", "Emily")]);
    let user = authenticate(&directory, "emilys", "x").await.unwrap();
    assert_eq!(user.first_name, "Emily");
    assert_eq!(directory.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_blank_password_is_rejected_before_any_lookup() {
    let directory = StubDirectory::new(vec![mock_user("emilys", "Emily")]);
    for password in ["", " ", "\t", "  \n "] {
        let err = authenticate(&directory, "emilys", password)
            .await
            .unwrap_err();
        assert!(matches!(err, LarderError::Validation(_)));
    }
    assert_eq!(directory.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unknown_username_reports_invalid_credentials() {
    let directory = StubDirectory::new(vec![mock_user("emilys", "Emily")]);
    let err = authenticate(&directory, "michaelw", "secret")
        .await
        .unwrap_err();
    assert!(matches!(err, LarderError::InvalidCredentials));
}

#[tokio::test]
async fn test_directory_outage_is_distinct_from_bad_credentials() {
    let directory = StubDirectory::failing("connection refused");
    let err = authenticate(&directory, "emilys", "x").await.unwrap_err();
    match err {
        LarderError::Connectivity(message) => assert!(message.contains("connection refused")),
        other => panic!("expected Connectivity, got {:?}", other),
    }
    // The message a user sees must differ from the invalid-credentials one.
    assert_ne!(
        LarderError::Connectivity("connection refused".to_string()).to_string(),
        LarderError::InvalidCredentials.to_string()
    );
}

#[test]
fn test_login_then_logout_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at(dir.path().join("session.yaml"));

    // Login success persists the directory record's first name.
    store
        .save(&Session {
            first_name: "Emily".to_string(),
        })
        .unwrap();
    assert_eq!(store.load().unwrap().unwrap().first_name, "Emily");

    // Logout clears the identity; a later gate check sees logged-out.
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}
