//! Recipe catalog client.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{LarderError, Result};
use crate::types::Recipe;

use super::CatalogProvider;

/// Wire shape of the collection endpoint. A response with no `recipes`
/// field is an empty catalog, not an error.
#[derive(Debug, Deserialize)]
struct RecipesResponse {
    #[serde(default)]
    recipes: Vec<Recipe>,
}

/// HTTP client for the recipe catalog service.
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.remote_timeout())
            .build()
            .map_err(|e| LarderError::Other(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.catalog_url.clone(),
        })
    }
}

impl CatalogProvider for CatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<Recipe>> {
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| LarderError::Connectivity(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LarderError::Connectivity(format!(
                "catalog returned HTTP {}",
                response.status()
            )));
        }

        let listing: RecipesResponse = response
            .json()
            .await
            .map_err(|e| LarderError::Connectivity(e.to_string()))?;

        Ok(listing.recipes)
    }

    async fn fetch_recipe(&self, id: u64) -> Result<Recipe> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LarderError::Connectivity(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LarderError::RecipeNotFound(id));
        }
        if !response.status().is_success() {
            return Err(LarderError::Connectivity(format!(
                "catalog returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LarderError::Connectivity(e.to_string()))
    }
}
