//! Session identity persistence.
//!
//! The session store holds exactly one fact: the display name of the
//! authenticated user. Its presence is what gates the browse view; it is
//! written on login success and removed on logout, and nothing else ever
//! touches it.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

/// The persisted session identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name of the authenticated user.
    pub first_name: String,
}

/// File-backed store for the session identity.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location next to the config file.
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: Config::config_dir()?.join("session.yaml"),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the current identity. Absence means logged out.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let session: Session = serde_yaml_ng::from_str(&content)?;
        Ok(Some(session))
    }

    /// Record a new identity, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(session)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Clear the identity. A no-op when already logged out.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
