//! Search, cuisine filtering, and the incremental reveal cursor.
//!
//! Filtering is a pure, order-preserving selection over the catalog: it
//! never re-sorts, only picks. The reveal cursor bounds how much of the
//! filtered subset is visible and snaps back to one increment whenever
//! either criterion changes.

use crate::types::Recipe;

/// Current search term, cuisine filter, and reveal cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCriteria {
    search_term: String,
    cuisine_filter: String,
    reveal_limit: usize,
    increment: usize,
}

impl ViewCriteria {
    /// Fresh criteria: empty search, all cuisines, one increment revealed.
    pub fn new(increment: usize) -> Self {
        let increment = increment.max(1);
        Self {
            search_term: String::new(),
            cuisine_filter: String::new(),
            reveal_limit: increment,
            increment,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Empty means "all cuisines".
    pub fn cuisine_filter(&self) -> &str {
        &self.cuisine_filter
    }

    pub fn reveal_limit(&self) -> usize {
        self.reveal_limit
    }

    /// Update the search term and snap the reveal cursor back.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.reveal_limit = self.increment;
    }

    /// Update the cuisine filter and snap the reveal cursor back.
    pub fn set_cuisine_filter(&mut self, cuisine: impl Into<String>) {
        self.cuisine_filter = cuisine.into();
        self.reveal_limit = self.increment;
    }

    /// Reveal one more increment of the filtered subset.
    pub fn reveal_more(&mut self) {
        self.reveal_limit += self.increment;
    }
}

/// Whether a recipe matches the given criteria.
///
/// The cuisine filter is an exact, case-sensitive match; the search term is
/// a case-insensitive substring match against the name, the cuisine, any
/// ingredient, or any tag.
pub fn recipe_matches(recipe: &Recipe, search_term: &str, cuisine_filter: &str) -> bool {
    if !cuisine_filter.is_empty() && recipe.cuisine != cuisine_filter {
        return false;
    }
    if search_term.is_empty() {
        return true;
    }

    let needle = search_term.to_lowercase();
    recipe.name.to_lowercase().contains(&needle)
        || recipe.cuisine.to_lowercase().contains(&needle)
        || recipe
            .ingredients
            .iter()
            .any(|ing| ing.to_lowercase().contains(&needle))
        || recipe
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// The visible slice of the catalog under the current criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Prefix of the filtered subset, in catalog order.
    pub visible: Vec<Recipe>,
    /// Size of the whole filtered subset.
    pub total_filtered: usize,
    /// Whether more of the filtered subset remains beyond the cursor.
    pub has_more: bool,
    /// Whether the filtered subset is empty.
    pub is_empty: bool,
}

/// Apply the criteria to the catalog and slice off the revealed prefix.
pub fn compute_view(recipes: &[Recipe], criteria: &ViewCriteria) -> CatalogView {
    let filtered: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| recipe_matches(r, criteria.search_term(), criteria.cuisine_filter()))
        .collect();

    let total_filtered = filtered.len();
    let shown = criteria.reveal_limit().min(total_filtered);

    CatalogView {
        visible: filtered[..shown].iter().map(|r| (*r).clone()).collect(),
        total_filtered,
        has_more: criteria.reveal_limit() < total_filtered,
        is_empty: total_filtered == 0,
    }
}
