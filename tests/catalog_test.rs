//! Catalog filtering, pagination, and popularity properties.
//!
//! These tests exercise the pure catalog engine against the behaviors the
//! browse view depends on: order-preserving filtering, the reveal cursor
//! reset rules, and the criteria-independent favorites selection.

mod common;

use common::mock_data::{RecipeBuilder, mock_recipe, sample_catalog};
use larder::catalog::{ViewCriteria, compute_view, cuisines, popular_recipes, recipe_matches};

// ============================================================================
// Order preservation
// ============================================================================

#[test]
fn test_visible_is_order_preserving_subsequence_for_many_criteria() {
    let catalog = sample_catalog();
    let search_terms = ["", "chicken", "a", "Pizza", "RICE", "zzz", "&"];
    let cuisine_filters = ["", "Italian", "Mexican", "italian", "Nowhere"];

    for term in search_terms {
        for cuisine in cuisine_filters {
            let mut criteria = ViewCriteria::new(6);
            criteria.set_cuisine_filter(cuisine);
            criteria.set_search_term(term);
            let view = compute_view(&catalog, &criteria);

            // Every visible record matches the predicate.
            for r in &view.visible {
                assert!(
                    recipe_matches(r, term, cuisine),
                    "{} should match ({term:?}, {cuisine:?})",
                    r.name
                );
            }

            // Visible ids appear in catalog order.
            let catalog_ids: Vec<u64> = catalog.iter().map(|r| r.id).collect();
            let mut last_pos = 0;
            for r in &view.visible {
                let pos = catalog_ids.iter().position(|id| *id == r.id).unwrap();
                assert!(pos >= last_pos, "filtering must not reorder records");
                last_pos = pos;
            }

            // The slice is a prefix of the filtered subset.
            assert_eq!(
                view.visible.len(),
                view.total_filtered.min(criteria.reveal_limit())
            );
        }
    }
}

// ============================================================================
// Reveal cursor
// ============================================================================

#[test]
fn test_criteria_change_resets_reveal_after_deep_reveal() {
    // Grow the catalog so several increments stay available.
    let catalog: Vec<_> = (1..=30)
        .map(|i| mock_recipe(i, &format!("Recipe {i}"), if i % 2 == 0 { "Italian" } else { "Thai" }))
        .collect();

    let mut criteria = ViewCriteria::new(6);
    criteria.reveal_more();
    criteria.reveal_more();
    criteria.reveal_more();
    assert_eq!(compute_view(&catalog, &criteria).visible.len(), 24);

    criteria.set_cuisine_filter("Italian");
    let view = compute_view(&catalog, &criteria);
    assert!(view.visible.len() <= 6);
}

#[test]
fn test_reveal_more_is_monotonic() {
    let catalog = sample_catalog();
    let mut criteria = ViewCriteria::new(3);
    let mut previous = 0;
    for _ in 0..5 {
        let view = compute_view(&catalog, &criteria);
        assert!(view.visible.len() >= previous);
        previous = view.visible.len();
        criteria.reveal_more();
    }
    assert_eq!(previous, catalog.len());
}

#[test]
fn test_has_more_reflects_the_clamp() {
    let catalog = sample_catalog();
    let mut criteria = ViewCriteria::new(6);
    assert!(compute_view(&catalog, &criteria).has_more);
    criteria.reveal_more();
    assert!(!compute_view(&catalog, &criteria).has_more);
    criteria.reveal_more();
    assert!(!compute_view(&catalog, &criteria).has_more);
}

// ============================================================================
// Popularity selection
// ============================================================================

#[test]
fn test_popular_is_rating_sorted_stable_and_capped() {
    let mut catalog = sample_catalog();
    catalog.extend((9..=20).map(|i| {
        RecipeBuilder::new(i, &format!("Filler {i}"))
            .cuisine("Fusion")
            .rating(3.0)
            .build()
    }));

    let popular = popular_recipes(&catalog);
    assert_eq!(popular.len(), 10);
    for pair in popular.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
    // Both 4.8-rated recipes keep catalog order: Tacos (3) before Pad Thai (5).
    assert_eq!(popular[0].id, 3);
    assert_eq!(popular[1].id, 5);
}

#[test]
fn test_popular_ignores_view_criteria() {
    let catalog = sample_catalog();
    // Whatever the current criteria, the favorites derivation only sees the
    // catalog itself.
    let before = popular_recipes(&catalog);
    let mut criteria = ViewCriteria::new(6);
    criteria.set_search_term("pizza");
    criteria.set_cuisine_filter("Italian");
    let after = popular_recipes(&catalog);
    assert_eq!(before, after);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_catalog_is_empty_with_no_more() {
    let criteria = ViewCriteria::new(6);
    let view = compute_view(&[], &criteria);
    assert!(view.is_empty);
    assert!(!view.has_more);
    assert_eq!(cuisines(&[]).len(), 0);
}

#[test]
fn test_search_against_empty_ingredient_and_tag_lists() {
    let catalog = vec![
        RecipeBuilder::new(1, "Plain Toast")
            .cuisine("British")
            .ingredients(&[])
            .tags(&[])
            .build(),
    ];
    let mut criteria = ViewCriteria::new(6);
    criteria.set_search_term("toast");
    assert_eq!(compute_view(&catalog, &criteria).visible.len(), 1);
    criteria.set_search_term("jam");
    assert!(compute_view(&catalog, &criteria).is_empty);
}

#[test]
fn test_cuisines_offered_as_sorted_distinct_set() {
    let catalog = sample_catalog();
    let options = cuisines(&catalog);
    assert_eq!(
        options,
        vec!["American", "Indian", "Italian", "Japanese", "Mexican", "Thai"]
    );
}
