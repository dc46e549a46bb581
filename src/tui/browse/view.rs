//! Main browse TUI view component
//!
//! Wires the pure browse model to iocraft: terminal events become actions,
//! async work (catalog fetch, detail fetch, search debounce, toast expiry)
//! runs in handlers that feed their outcomes back in as actions.

use std::time::Duration;

use iocraft::prelude::*;

use crate::config::Config;
use crate::remote::{CatalogClient, CatalogProvider};
use crate::tui::components::{Footer, InlineSearchBox, Select};
use crate::tui::theme::theme;
use crate::types::Recipe;

use super::detail_modal::DetailModal;
use super::model::{
    BrowseAction, BrowseState, BrowseTab, SEARCH_DEBOUNCE_MS, TOAST_TTL_MS, compute_browse_view_model,
    key_to_action, reduce_browse_state,
};
use super::recipe_list::RecipeList;

/// Rows taken up by header, tabs, search, filter, status, and footer.
const CHROME_HEIGHT: u16 = 8;

/// Fetch the full recipe collection, with errors flattened to user-facing
/// messages for the model.
async fn fetch_catalog_snapshot() -> Result<Vec<Recipe>, String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    let client = CatalogClient::from_config(&config).map_err(|e| e.to_string())?;
    client.fetch_catalog().await.map_err(|e| {
        tracing::warn!("catalog fetch failed: {e}");
        e.to_string()
    })
}

/// Fetch a single recipe for the detail modal.
async fn fetch_recipe_detail(id: u64) -> Result<Box<Recipe>, String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    let client = CatalogClient::from_config(&config).map_err(|e| e.to_string())?;
    match client.fetch_recipe(id).await {
        Ok(recipe) => Ok(Box::new(recipe)),
        Err(e) => {
            tracing::warn!("detail fetch for recipe {id} failed: {e}");
            Err(e.to_string())
        }
    }
}

/// Apply an action to the shared state.
fn dispatch(mut state: State<BrowseState>, action: BrowseAction, list_height: usize) {
    let current = state.read().clone();
    state.set(reduce_browse_state(current, action, list_height));
}

/// Props for the BrowseTui component
#[derive(Default, Props)]
pub struct BrowseTuiProps {
    /// Display name of the authenticated user
    pub welcome_name: String,
    /// Reveal increment for the catalog listing
    pub page_size: usize,
}

/// Main browse TUI component
#[component]
pub fn BrowseTui(props: &BrowseTuiProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let welcome_name = props.welcome_name.clone();
    let page_size = props.page_size;
    let state: State<BrowseState> =
        hooks.use_state(move || BrowseState::new(welcome_name, page_size));

    // Raw search box text; mirrored into the model with a debounce window.
    let mut search_text: State<String> = hooks.use_state(String::new);

    let mut fetch_started = hooks.use_state(|| false);
    let mut expiry_armed_for: State<u64> = hooks.use_state(|| 0u64);

    let list_height = height.saturating_sub(CHROME_HEIGHT) as usize;

    // Async catalog fetch
    let fetch_handler: Handler<()> = hooks.use_async_handler({
        let state = state;
        move |_: ()| {
            let state = state;
            async move {
                let result = fetch_catalog_snapshot().await;
                dispatch(state, BrowseAction::CatalogLoaded(result), 0);
            }
        }
    });

    // Async detail fetch; the token makes overlapping requests resolve
    // latest-wins.
    let detail_handler: Handler<(u64, u64)> = hooks.use_async_handler({
        let state = state;
        move |(token, id): (u64, u64)| {
            let state = state;
            async move {
                let result = fetch_recipe_detail(id).await;
                dispatch(state, BrowseAction::DetailLoaded { token, result }, 0);
            }
        }
    });

    // Debounced search apply; stale epochs are discarded by the reducer.
    let search_apply_handler: Handler<(u64, String)> = hooks.use_async_handler({
        let state = state;
        move |(epoch, term): (u64, String)| {
            let state = state;
            async move {
                tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
                dispatch(state, BrowseAction::ApplySearch { epoch, term }, 0);
            }
        }
    });

    // Toast expiry; a newer toast bumps the sequence and survives.
    let toast_expiry_handler: Handler<u64> = hooks.use_async_handler({
        let state = state;
        move |seq: u64| {
            let state = state;
            async move {
                tokio::time::sleep(Duration::from_millis(TOAST_TTL_MS)).await;
                dispatch(state, BrowseAction::ToastExpired(seq), 0);
            }
        }
    });

    // Trigger the initial catalog fetch on startup.
    if !fetch_started.get() {
        fetch_started.set(true);
        dispatch(state, BrowseAction::CatalogRequested, list_height);
        fetch_handler.clone()(());
    }

    // Mirror search box edits into the model and schedule a debounced apply.
    let typed = search_text.to_string();
    if typed != state.read().search_input {
        dispatch(
            state,
            BrowseAction::SearchInputChanged(typed.clone()),
            list_height,
        );
        let epoch = state.read().search_epoch;
        search_apply_handler.clone()((epoch, typed));
    }

    // Arm an expiry timer for each new toast.
    {
        let snapshot = state.read();
        if snapshot.toast.is_some() && expiry_armed_for.get() != snapshot.toast_seq {
            let seq = snapshot.toast_seq;
            drop(snapshot);
            expiry_armed_for.set(seq);
            toast_expiry_handler.clone()(seq);
        }
    }

    // Keyboard event handling
    hooks.use_terminal_events({
        let fetch_handler = fetch_handler.clone();
        let detail_handler = detail_handler.clone();
        move |event| {
            if let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
                && kind != KeyEventKind::Release
            {
                let Some(action) = key_to_action(code, modifiers, &state.read()) else {
                    return;
                };

                match action {
                    BrowseAction::CatalogRequested => {
                        // The in-flight guard: no second fetch while one is
                        // outstanding.
                        if !state.read().is_fetching {
                            dispatch(state, BrowseAction::CatalogRequested, list_height);
                            fetch_handler.clone()(());
                        }
                    }
                    BrowseAction::DetailRequested(id) => {
                        dispatch(state, BrowseAction::DetailRequested(id), list_height);
                        let token = state.read().detail_token;
                        detail_handler.clone()((token, id));
                    }
                    BrowseAction::ClearSearchAndExit => {
                        dispatch(state, BrowseAction::ClearSearchAndExit, list_height);
                        search_text.set(String::new());
                    }
                    other => dispatch(state, other, list_height),
                }
            }
        }
    });

    if state.read().should_exit {
        system.exit();
    }

    let vm = compute_browse_view_model(&state.read());

    let tab_label = |tab: BrowseTab, label: &str| -> (String, Color, Weight) {
        if vm.active_tab == tab {
            (format!("[ {} ]", label), theme.highlight, Weight::Bold)
        } else {
            (format!("  {}  ", label), theme.text_dimmed, Weight::Normal)
        }
    };
    let (catalog_label, catalog_color, catalog_weight) = tab_label(BrowseTab::Catalog, "Recipes");
    let (favorites_label, favorites_color, favorites_weight) =
        tab_label(BrowseTab::Favorites, "Favorites");

    let status_line = match vm.active_tab {
        BrowseTab::Catalog => {
            let mut line = format!("Showing {} of {} recipes.", vm.showing, vm.total_filtered);
            if vm.has_more {
                line.push_str("  [m] shows more");
            }
            line
        }
        BrowseTab::Favorites => format!("Top {} recipes by rating.", vm.showing),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header row
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: "larder", color: theme.highlight, weight: Weight::Bold)
                Text(content: format!("Welcome, {}!", vm.welcome_name), color: theme.text)
            }

            // Tab bar
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                padding_left: 1,
                column_gap: 1,
            ) {
                Text(content: catalog_label, color: catalog_color, weight: catalog_weight)
                Text(content: favorites_label, color: favorites_color, weight: favorites_weight)
            }

            // Search bar
            View(width: 100pct, height: 1, padding_left: 1, padding_right: 1) {
                InlineSearchBox(
                    value: Some(search_text),
                    has_focus: vm.search_focused,
                )
            }

            // Cuisine filter
            View(width: 100pct, height: 1, padding_left: 1) {
                Select(
                    label: "Cuisine",
                    options: vm.cuisine_options.clone(),
                    selected_index: vm.cuisine_index,
                    value_color: theme.cuisine,
                )
            }

            // Main listing
            RecipeList(
                rows: vm.rows.clone(),
                selected_index: vm.selected_index,
                scroll_offset: vm.scroll_offset,
                visible_height: list_height,
                is_loading: vm.is_loading,
                error: vm.catalog_error.clone(),
            )

            // Status line
            View(width: 100pct, height: 1, padding_left: 1) {
                Text(content: status_line, color: theme.text_dimmed)
            }

            // Footer
            Footer(shortcuts: vm.shortcuts.clone())

            // Toast notification
            #(vm.toast.as_ref().map(|toast| element! {
                View(
                    width: 100pct,
                    height: 3,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    background_color: Color::Black,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: toast.color(),
                ) {
                    Text(content: toast.message.clone(), color: toast.color())
                }
            }))

            // Detail modal overlay
            DetailModal(detail: Some(vm.detail.clone()))
        }
    }
}
