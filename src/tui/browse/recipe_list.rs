//! Scrollable recipe list component
//!
//! Displays the visible slice of the catalog with selection highlighting
//! and scrolling support.

use iocraft::prelude::*;

use crate::tui::components::rating_stars;
use crate::tui::theme::theme;
use crate::types::Recipe;

/// Props for the RecipeList component
#[derive(Default, Props)]
pub struct RecipeListProps {
    /// Rows to display, in display order
    pub rows: Vec<Recipe>,
    /// Index of the currently selected row
    pub selected_index: usize,
    /// Current scroll offset (first visible row index)
    pub scroll_offset: usize,
    /// Number of visible rows
    pub visible_height: usize,
    /// Whether the catalog fetch is still outstanding
    pub is_loading: bool,
    /// Error message when the catalog failed to load
    pub error: Option<String>,
}

/// Scrollable recipe list with selection
#[component]
pub fn RecipeList(props: &RecipeListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    if props.is_loading {
        return element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "Loading recipes...", color: theme.text_dimmed)
            }
        };
    }

    if let Some(error) = &props.error {
        let message = error.clone();
        return element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                border_style: BorderStyle::Round,
                border_color: theme.error,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: format!("Failed to load recipes: {}", message), color: theme.error)
            }
        };
    }

    if props.rows.is_empty() {
        return element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(
                    content: "No recipes found matching your criteria.",
                    color: theme.text_dimmed,
                )
            }
        };
    }

    let start = props.scroll_offset.min(props.rows.len());
    let end = (start + props.visible_height.max(1)).min(props.rows.len());
    let selected_index = props.selected_index;
    let row_theme = theme.clone();

    let window: Vec<(usize, Recipe)> = props.rows[start..end]
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, r)| (start + i, r))
        .collect();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
        ) {
            #(window.into_iter().map(move |(index, recipe)| {
                let theme = row_theme.clone();
                let is_selected = index == selected_index;
                let name_color = if is_selected { theme.highlight } else { theme.text };
                let marker = if is_selected { "▸ " } else { "  " };
                let meta = format!(
                    " {} · {} mins · {} · {} ({:.1})",
                    recipe.cuisine,
                    recipe.total_minutes(),
                    recipe.difficulty,
                    rating_stars(recipe.rating),
                    recipe.rating,
                );
                element! {
                    View(
                        width: 100pct,
                        height: 1,
                        flex_direction: FlexDirection::Row,
                    ) {
                        Text(content: marker, color: theme.highlight)
                        Text(
                            content: recipe.name.clone(),
                            color: name_color,
                            weight: if is_selected { Weight::Bold } else { Weight::Normal },
                        )
                        Text(content: meta, color: theme.text_dimmed)
                    }
                }
            }))
        }
    }
}
