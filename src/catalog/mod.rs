//! The in-memory recipe catalog and its derived views.
//!
//! The catalog is fetched once per browse session and never mutated in
//! place; everything here derives fresh values from the loaded slice.

pub mod filter;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::types::{FAVORITES_COUNT, Recipe};

pub use filter::{CatalogView, ViewCriteria, compute_view, recipe_matches};

/// Distinct cuisines present in the catalog, sorted lexicographically.
///
/// Recomputed once per catalog load, not per keystroke.
pub fn cuisines(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .map(|r| r.cuisine.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Top-rated selection for the favorites view.
///
/// Sorted by rating descending; ties keep catalog order (stable sort).
/// Independent of any search or filter criteria.
pub fn popular_recipes(recipes: &[Recipe]) -> Vec<Recipe> {
    let mut sorted = recipes.to_vec();
    sorted.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    sorted.truncate(FAVORITES_COUNT);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    fn recipe(id: u64, name: &str, cuisine: &str, rating: f64) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{id}.png"),
            cuisine: cuisine.to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 10,
            cook_time_minutes: 20,
            servings: 4,
            calories_per_serving: 250,
            rating,
            review_count: 10,
            ingredients: vec![],
            instructions: vec![],
            tags: vec![],
        }
    }

    #[test]
    fn test_cuisines_distinct_and_sorted() {
        let recipes = vec![
            recipe(1, "a", "Italian", 4.0),
            recipe(2, "b", "Asian", 4.0),
            recipe(3, "c", "Italian", 4.0),
            recipe(4, "d", "Mexican", 4.0),
        ];
        assert_eq!(cuisines(&recipes), vec!["Asian", "Italian", "Mexican"]);
    }

    #[test]
    fn test_cuisines_empty_catalog() {
        assert!(cuisines(&[]).is_empty());
    }

    #[test]
    fn test_popular_sorted_by_rating_descending() {
        let recipes = vec![
            recipe(1, "low", "Italian", 2.0),
            recipe(2, "high", "Asian", 4.9),
            recipe(3, "mid", "Mexican", 3.5),
        ];
        let popular = popular_recipes(&recipes);
        let ids: Vec<u64> = popular.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_popular_caps_at_ten() {
        let recipes: Vec<Recipe> = (0..25)
            .map(|i| recipe(i, &format!("r{i}"), "Italian", i as f64 / 10.0))
            .collect();
        assert_eq!(popular_recipes(&recipes).len(), 10);
    }

    #[test]
    fn test_popular_ties_keep_catalog_order() {
        let recipes = vec![
            recipe(1, "first", "Italian", 4.5),
            recipe(2, "second", "Asian", 4.5),
            recipe(3, "third", "Mexican", 4.5),
        ];
        let ids: Vec<u64> = popular_recipes(&recipes).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_popular_empty_catalog() {
        assert!(popular_recipes(&[]).is_empty());
    }
}
