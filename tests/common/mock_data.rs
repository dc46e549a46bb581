//! Mock data builders for creating test recipes and users.
//!
//! This module provides builder patterns for creating test data without
//! needing a live catalog service.

use larder::types::{Difficulty, Recipe, User};

/// Builder for creating test recipes
pub struct RecipeBuilder {
    recipe: Recipe,
}

impl RecipeBuilder {
    /// Create a new recipe builder with the given id and name
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            recipe: Recipe {
                id,
                name: name.to_string(),
                image: format!("https://example.com/{id}.png"),
                cuisine: "Italian".to_string(),
                difficulty: Difficulty::Easy,
                prep_time_minutes: 10,
                cook_time_minutes: 20,
                servings: 4,
                calories_per_serving: 300,
                rating: 4.0,
                review_count: 25,
                ingredients: vec![],
                instructions: vec!["Cook.".to_string()],
                tags: vec![],
            },
        }
    }

    pub fn cuisine(mut self, cuisine: &str) -> Self {
        self.recipe.cuisine = cuisine.to_string();
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.recipe.difficulty = difficulty;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.recipe.rating = rating;
        self
    }

    pub fn ingredients(mut self, ingredients: &[&str]) -> Self {
        self.recipe.ingredients = ingredients.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.recipe.tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Recipe {
        self.recipe
    }
}

/// Shorthand for a recipe with just an id, name, and cuisine
pub fn mock_recipe(id: u64, name: &str, cuisine: &str) -> Recipe {
    RecipeBuilder::new(id, name).cuisine(cuisine).build()
}

/// The eight-recipe catalog used across the integration tests: three
/// Italian entries, one of which lists chicken as an ingredient.
pub fn sample_catalog() -> Vec<Recipe> {
    vec![
        RecipeBuilder::new(1, "Margherita Pizza")
            .cuisine("Italian")
            .rating(4.5)
            .ingredients(&["Pizza dough", "Tomato sauce", "Mozzarella"])
            .tags(&["Pizza", "Comfort food"])
            .build(),
        RecipeBuilder::new(2, "Chicken Alfredo")
            .cuisine("Italian")
            .rating(4.2)
            .ingredients(&["Chicken breast", "Fettuccine", "Cream"])
            .tags(&["Pasta"])
            .build(),
        RecipeBuilder::new(3, "Tacos al Pastor")
            .cuisine("Mexican")
            .rating(4.8)
            .ingredients(&["Pork shoulder", "Pineapple"])
            .tags(&["Street food"])
            .build(),
        RecipeBuilder::new(4, "Lasagna")
            .cuisine("Italian")
            .rating(3.9)
            .difficulty(Difficulty::Medium)
            .ingredients(&["Ground beef", "Pasta sheets"])
            .build(),
        RecipeBuilder::new(5, "Pad Thai")
            .cuisine("Thai")
            .rating(4.8)
            .ingredients(&["Rice noodles", "Peanuts"])
            .tags(&["Noodles"])
            .build(),
        RecipeBuilder::new(6, "Sushi Rolls")
            .cuisine("Japanese")
            .rating(4.1)
            .difficulty(Difficulty::Hard)
            .ingredients(&["Sushi rice", "Nori"])
            .tags(&["Seafood"])
            .build(),
        RecipeBuilder::new(7, "Butter Chicken")
            .cuisine("Indian")
            .rating(4.7)
            .ingredients(&["Chicken thighs", "Butter", "Tomato"])
            .tags(&["Curry"])
            .build(),
        RecipeBuilder::new(8, "Caesar Salad")
            .cuisine("American")
            .rating(3.5)
            .ingredients(&["Romaine", "Croutons", "Parmesan"])
            .tags(&["Salad"])
            .build(),
    ]
}

/// Create a test directory user
pub fn mock_user(username: &str, first_name: &str) -> User {
    User {
        username: username.to_string(),
        first_name: first_name.to_string(),
    }
}
