//! User directory client.

use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{LarderError, Result};
use crate::types::User;

use super::DirectoryProvider;

/// Wire shape of the directory listing.
#[derive(Debug, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<User>,
}

/// HTTP client for the user directory service.
pub struct DirectoryClient {
    http: Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a new directory client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.remote_timeout())
            .build()
            .map_err(|e| LarderError::Other(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.directory_url.clone(),
        })
    }
}

impl DirectoryProvider for DirectoryClient {
    async fn find_user(&self, username: &str) -> Result<Option<User>> {
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| LarderError::Connectivity(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LarderError::Connectivity(format!(
                "directory returned HTTP {}",
                response.status()
            )));
        }

        let listing: UsersResponse = response
            .json()
            .await
            .map_err(|e| LarderError::Connectivity(e.to_string()))?;

        Ok(listing.users.into_iter().find(|u| u.username == username))
    }
}
