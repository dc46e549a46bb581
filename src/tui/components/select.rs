//! Compact inline selector component
//!
//! Cycles through a list of options with left/right keys.
//! Displays as: Label: ◀ value ▶

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    /// List of options to choose from
    pub options: Vec<String>,
    /// Index of the currently selected option
    pub selected_index: usize,
    /// Optional color for the value
    pub value_color: Option<Color>,
}

/// Compact inline selector with arrow indicators
///
/// Renders as: Label: ◀ value ▶
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let current_value = props
        .options
        .get(props.selected_index)
        .cloned()
        .unwrap_or_default();

    let value_color = props.value_color.unwrap_or(theme.text);

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(
                    content: format!("{}:", label),
                    color: theme.text_dimmed,
                )
            }))
            Text(content: "◀", color: theme.text_dimmed)
            Text(content: current_value, color: value_color, weight: Weight::Bold)
            Text(content: "▶", color: theme.text_dimmed)
        }
    }
}
