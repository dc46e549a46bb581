//! Core data types shared across the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How many recipes each "reveal more" step adds to the visible slice.
pub const LOAD_INCREMENT: usize = 6;

/// How many recipes the favorites view shows.
pub const FAVORITES_COUNT: usize = 10;

/// One catalog entry as returned by the catalog service.
///
/// Immutable once fetched; the catalog owns every `Recipe` for the lifetime
/// of a browse session and derived views only borrow or clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    /// URI of the recipe image.
    pub image: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub calories_per_serving: u32,
    /// 0.0 to 5.0 inclusive.
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Total time from counter to table.
    pub fn total_minutes(&self) -> u32 {
        self.prep_time_minutes + self.cook_time_minutes
    }
}

/// Recipe difficulty as reported by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Any value the service reports that we don't know about.
    Other(String),
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Other(s),
        }
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        d.to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Other(s) => write!(f, "{}", s),
        }
    }
}

/// One directory record. Only the fields the authentication gate needs are
/// kept; the directory returns many more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub first_name: String,
}
