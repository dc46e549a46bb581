//! Modal overlay component
//!
//! Provides a base positioning component for modals with optional backdrop.

use iocraft::prelude::*;

/// Standard backdrop color for all modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Whether to show a solid backdrop that hides content behind the modal
    pub show_backdrop: Option<bool>,
    /// Children elements to render inside the overlay
    pub children: Vec<AnyElement<'a>>,
}

/// Modal overlay component that handles centering and optional backdrop
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let show_backdrop = props.show_backdrop.unwrap_or(false);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: if show_backdrop { Some(MODAL_BACKDROP) } else { None },
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}
