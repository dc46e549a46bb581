pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod remote;
pub mod session;
pub mod tui;
pub mod types;
pub mod utils;

pub use catalog::{CatalogView, ViewCriteria, compute_view, cuisines, popular_recipes, recipe_matches};
pub use config::Config;
pub use error::{LarderError, Result};
pub use remote::{CatalogClient, CatalogProvider, DirectoryClient, DirectoryProvider, authenticate};
pub use session::{Session, SessionStore};
pub use types::{Difficulty, FAVORITES_COUNT, LOAD_INCREMENT, Recipe, User};
