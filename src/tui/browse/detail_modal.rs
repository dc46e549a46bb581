//! Recipe detail modal
//!
//! Shows the full recipe fetched on demand: a waiting indicator while the
//! fetch is outstanding, the complete record on success, or an error message
//! inside the modal on failure.

use iocraft::prelude::*;

use crate::tui::components::{ModalOverlay, rating_stars};
use crate::tui::theme::theme;
use crate::types::Recipe;

use super::model::DetailState;

/// Props for the DetailModal component
#[derive(Default, Props)]
pub struct DetailModalProps {
    /// Detail modal state; `None` or `Hidden` renders nothing
    pub detail: Option<DetailState>,
}

/// Modal overlay for the recipe detail view
#[component]
pub fn DetailModal(props: &DetailModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let detail = match &props.detail {
        Some(d) if d.is_open() => d.clone(),
        _ => return element!(View()),
    };

    element! {
        View() {
            ModalOverlay(show_backdrop: true) {
                View(
                    width: 70,
                    max_height: 90pct,
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Double,
                    border_color: theme.border_focused,
                    padding: 1,
                ) {
                    #(match detail {
                        DetailState::Loading { .. } => vec![element! {
                            View(justify_content: JustifyContent::Center) {
                                Text(content: "Loading recipe...", color: theme.text_dimmed)
                            }
                        }.into_any()],
                        DetailState::Failed(message) => vec![element! {
                            View(flex_direction: FlexDirection::Column) {
                                Text(content: "Failed to load recipe details.", color: theme.error, weight: Weight::Bold)
                                Text(content: message.clone(), color: theme.text_dimmed)
                                Text(content: "Press Esc to close", color: theme.text_dimmed)
                            }
                        }.into_any()],
                        DetailState::Ready(recipe) => vec![render_recipe(&recipe)],
                        DetailState::Hidden => vec![],
                    })
                }
            }
        }
    }
}

fn render_recipe(recipe: &Recipe) -> AnyElement<'static> {
    let theme = theme();
    let recipe = recipe.clone();

    let stats = vec![
        ("PREP TIME", format!("{} mins", recipe.prep_time_minutes)),
        ("COOK TIME", format!("{} mins", recipe.cook_time_minutes)),
        ("SERVINGS", recipe.servings.to_string()),
        ("DIFFICULTY", recipe.difficulty.to_string()),
        ("CUISINE", recipe.cuisine.clone()),
        ("CALORIES", format!("{} cal/serving", recipe.calories_per_serving)),
    ];

    let rating_line = format!(
        "{} ({:.1}) {} reviews",
        rating_stars(recipe.rating),
        recipe.rating,
        recipe.review_count,
    );

    let tags_line = if recipe.tags.is_empty() {
        None
    } else {
        Some(recipe.tags.join(" · "))
    };

    let ingredients = recipe.ingredients.clone();
    let instructions = recipe.instructions.clone();

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: recipe.name.clone(), color: theme.highlight, weight: Weight::Bold)

            View(flex_direction: FlexDirection::Row, flex_wrap: FlexWrap::Wrap, column_gap: 3, margin_top: 1) {
                #(stats.into_iter().map(|(label, value)| element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(content: format!("{}: ", label), color: theme.text_dimmed)
                        Text(content: value, color: theme.text)
                    }
                }))
            }

            View(margin_top: 1) {
                Text(content: rating_line, color: theme.rating)
            }

            #(tags_line.map(|tags| element! {
                View() {
                    Text(content: tags, color: theme.cuisine)
                }
            }))

            View(margin_top: 1) {
                Text(content: "Ingredients", color: theme.text, weight: Weight::Bold)
            }
            #(ingredients.into_iter().map(|ing| element! {
                View() {
                    Text(content: format!("  • {}", ing), color: theme.text)
                }
            }))

            View(margin_top: 1) {
                Text(content: "Instructions", color: theme.text, weight: Weight::Bold)
            }
            #(instructions.into_iter().enumerate().map(|(i, step)| element! {
                View() {
                    Text(content: format!("  {}. {}", i + 1, step), color: theme.text)
                }
            }))

            View(margin_top: 1) {
                Text(content: "Press Esc to close", color: theme.text_dimmed)
            }
        }
    }
    .into_any()
}
