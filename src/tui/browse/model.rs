//! Browse TUI model types for testable state management
//!
//! This module separates state (BrowseState) from view (BrowseViewModel)
//! enabling comprehensive unit testing without the iocraft framework. All
//! interaction rules of the catalog browser live here: the one-shot catalog
//! load with its in-flight guard, the debounced search term, the cuisine
//! filter, the incremental reveal cursor, and the superseded-request rule
//! for detail fetches.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::catalog::{CatalogView, ViewCriteria, compute_view, cuisines, popular_recipes};
use crate::tui::components::Shortcut;
use crate::types::Recipe;

use super::toast::Toast;

/// Quiet period for coalescing search keystrokes, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_TTL_MS: u64 = 5000;

// ============================================================================
// State Types
// ============================================================================

/// Which listing the main pane shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseTab {
    #[default]
    Catalog,
    Favorites,
}

impl BrowseTab {
    pub fn toggle(self) -> Self {
        match self {
            BrowseTab::Catalog => BrowseTab::Favorites,
            BrowseTab::Favorites => BrowseTab::Catalog,
        }
    }
}

/// Lifecycle of the detail modal, decoupled from the catalog's lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Hidden,
    Loading { id: u64 },
    Ready(Box<Recipe>),
    Failed(String),
}

impl DetailState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DetailState::Hidden)
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct BrowseState {
    // Catalog data
    /// The full recipe collection, loaded at most once per session.
    pub recipes: Vec<Recipe>,
    /// Distinct cuisines, recomputed once per catalog load.
    pub cuisines: Vec<String>,
    /// In-flight guard for the catalog fetch.
    pub is_fetching: bool,
    /// User-facing message when the catalog fetch failed.
    pub catalog_error: Option<String>,

    // View criteria
    /// Search term, cuisine filter, and reveal cursor.
    pub criteria: ViewCriteria,
    /// Index into the cuisine options (0 = all cuisines).
    pub cuisine_index: usize,

    // Search input
    /// Live text in the search box; applied to the criteria only after the
    /// debounce window passes.
    pub search_input: String,
    /// Whether the search box is focused.
    pub search_focused: bool,
    /// Bumped on every keystroke; a scheduled apply only lands if its epoch
    /// is still current.
    pub search_epoch: u64,

    // View state
    /// Currently active tab (catalog or favorites).
    pub active_tab: BrowseTab,
    /// Index of the selected row in the visible list.
    pub selected_index: usize,
    /// Scroll offset for the visible list.
    pub scroll_offset: usize,

    // Detail modal
    /// Current detail modal state.
    pub detail: DetailState,
    /// Monotonically increasing request token; only the completion carrying
    /// the latest token may update the modal.
    pub detail_token: u64,

    // Feedback
    /// Optional toast notification to display.
    pub toast: Option<Toast>,
    /// Bumped whenever a toast is set, so expiry tasks only clear their own.
    pub toast_seq: u64,

    /// Whether the application should exit.
    pub should_exit: bool,

    /// Display name shown in the header.
    pub welcome_name: String,
}

impl BrowseState {
    /// Fresh state for an authenticated user.
    pub fn new(welcome_name: impl Into<String>, increment: usize) -> Self {
        Self {
            recipes: Vec::new(),
            cuisines: Vec::new(),
            is_fetching: false,
            catalog_error: None,
            criteria: ViewCriteria::new(increment),
            cuisine_index: 0,
            search_input: String::new(),
            search_focused: false,
            search_epoch: 0,
            active_tab: BrowseTab::default(),
            selected_index: 0,
            scroll_offset: 0,
            detail: DetailState::Hidden,
            detail_token: 0,
            toast: None,
            toast_seq: 0,
            should_exit: false,
            welcome_name: welcome_name.into(),
        }
    }

    /// The cuisine options offered by the selector.
    pub fn cuisine_options(&self) -> Vec<String> {
        let mut options = vec!["All Cuisines".to_string()];
        options.extend(self.cuisines.iter().cloned());
        options
    }

    /// The rows the active tab currently shows.
    pub fn current_rows(&self) -> Vec<Recipe> {
        match self.active_tab {
            BrowseTab::Catalog => compute_view(&self.recipes, &self.criteria).visible,
            BrowseTab::Favorites => popular_recipes(&self.recipes),
        }
    }

    /// The recipe under the cursor, if any.
    pub fn selected_recipe(&self) -> Option<Recipe> {
        self.current_rows().get(self.selected_index).cloned()
    }

    fn set_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
        self.toast_seq += 1;
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the browse TUI
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction {
    // Catalog lifecycle
    /// Request the catalog fetch; a no-op while one is outstanding.
    CatalogRequested,
    /// Catalog fetch finished, successfully or not.
    CatalogLoaded(Result<Vec<Recipe>, String>),

    // Search
    /// Focus the search box.
    FocusSearch,
    /// The search box text changed (schedules a debounced apply).
    SearchInputChanged(String),
    /// A debounce task finished its quiet period; applied only when `epoch`
    /// is still the latest.
    ApplySearch { epoch: u64, term: String },
    /// Exit search mode, keeping the query.
    ExitSearch,
    /// Clear the search query and exit search mode.
    ClearSearchAndExit,

    // Cuisine filter
    /// Cycle the cuisine filter forward.
    CuisineNext,
    /// Cycle the cuisine filter backward.
    CuisinePrev,

    // Pagination
    /// Reveal one more increment of the filtered subset.
    RevealMore,

    // Navigation
    /// Move selection up one row.
    MoveUp,
    /// Move selection down one row.
    MoveDown,
    /// Jump to the first row.
    GoToTop,
    /// Jump to the last row.
    GoToBottom,

    // Tabs
    /// Switch between the catalog and favorites tabs.
    ToggleTab,

    // Detail modal
    /// Open the detail modal for a recipe; supersedes any in-flight fetch.
    DetailRequested(u64),
    /// A detail fetch finished; discarded unless `token` is the latest.
    DetailLoaded {
        token: u64,
        result: Result<Box<Recipe>, String>,
    },
    /// Close the detail modal.
    CloseDetail,

    // Feedback
    /// A toast's display period elapsed; clears it only if still current.
    ToastExpired(u64),

    // App
    /// Quit the application.
    Quit,
}

// ============================================================================
// Reducer
// ============================================================================

/// Pure function: apply action to state (reducer pattern)
///
/// Contains only pure state transitions. Side effects (network fetches,
/// debounce timers, toast expiry timers) are spawned by the component and
/// feed their outcomes back in as actions.
pub fn reduce_browse_state(
    mut state: BrowseState,
    action: BrowseAction,
    list_height: usize,
) -> BrowseState {
    match action {
        // Catalog lifecycle
        BrowseAction::CatalogRequested => {
            // In-flight guard: a second request while one is outstanding
            // must not start another fetch.
            if !state.is_fetching {
                state.is_fetching = true;
                state.catalog_error = None;
            }
        }
        BrowseAction::CatalogLoaded(result) => {
            // The loading flag clears on every exit path.
            state.is_fetching = false;
            match result {
                Ok(recipes) => {
                    state.cuisines = cuisines(&recipes);
                    state.recipes = recipes;
                    state.catalog_error = None;
                    state.reset_selection();

                    // Re-anchor the cuisine filter against the fresh option
                    // set; a filter value that disappeared falls back to all.
                    let filter = state.criteria.cuisine_filter().to_string();
                    match state.cuisines.iter().position(|c| *c == filter) {
                        Some(pos) if !filter.is_empty() => state.cuisine_index = pos + 1,
                        _ => {
                            state.cuisine_index = 0;
                            if !filter.is_empty() {
                                state.criteria.set_cuisine_filter("");
                            }
                        }
                    }

                    state.set_toast(Toast::info(format!(
                        "Loaded {} recipes",
                        state.recipes.len()
                    )));
                }
                Err(message) => {
                    state.catalog_error = Some(message.clone());
                    state.set_toast(Toast::error(message));
                }
            }
        }

        // Search
        BrowseAction::FocusSearch => {
            state.search_focused = true;
        }
        BrowseAction::SearchInputChanged(text) => {
            state.search_input = text;
            state.search_epoch += 1;
        }
        BrowseAction::ApplySearch { epoch, term } => {
            // A keystroke after this task was scheduled bumped the epoch;
            // stale tasks change nothing.
            if epoch == state.search_epoch {
                state.criteria.set_search_term(term.trim());
                state.reset_selection();
            }
        }
        BrowseAction::ExitSearch => {
            state.search_focused = false;
        }
        BrowseAction::ClearSearchAndExit => {
            state.search_input = String::new();
            state.search_focused = false;
            state.search_epoch += 1;
            state.criteria.set_search_term("");
            state.reset_selection();
        }

        // Cuisine filter
        BrowseAction::CuisineNext | BrowseAction::CuisinePrev => {
            let options = state.cuisine_options();
            let count = options.len();
            if count > 1 {
                state.cuisine_index = if action == BrowseAction::CuisineNext {
                    (state.cuisine_index + 1) % count
                } else {
                    (state.cuisine_index + count - 1) % count
                };
                let filter = if state.cuisine_index == 0 {
                    String::new()
                } else {
                    options[state.cuisine_index].clone()
                };
                state.criteria.set_cuisine_filter(filter);
                state.reset_selection();
            }
        }

        // Pagination
        BrowseAction::RevealMore => {
            if state.active_tab == BrowseTab::Catalog {
                let view = compute_view(&state.recipes, &state.criteria);
                if view.has_more {
                    state.criteria.reveal_more();
                }
            }
        }

        // Navigation
        BrowseAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        BrowseAction::MoveDown => {
            let count = state.current_rows().len();
            if count > 0 {
                state.selected_index = (state.selected_index + 1).min(count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        BrowseAction::GoToTop => {
            state.reset_selection();
        }
        BrowseAction::GoToBottom => {
            let count = state.current_rows().len();
            if count > 0 {
                state.selected_index = count - 1;
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }

        // Tabs
        BrowseAction::ToggleTab => {
            state.active_tab = state.active_tab.toggle();
            state.reset_selection();
        }

        // Detail modal
        BrowseAction::DetailRequested(id) => {
            state.detail_token += 1;
            state.detail = DetailState::Loading { id };
        }
        BrowseAction::DetailLoaded { token, result } => {
            // Only the completion for the most recent request may update the
            // modal, and only while it is still waiting.
            if token == state.detail_token && matches!(state.detail, DetailState::Loading { .. }) {
                state.detail = match result {
                    Ok(recipe) => DetailState::Ready(recipe),
                    Err(message) => DetailState::Failed(message),
                };
            }
        }
        BrowseAction::CloseDetail => {
            state.detail = DetailState::Hidden;
        }

        // Feedback
        BrowseAction::ToastExpired(seq) => {
            if seq == state.toast_seq {
                state.toast = None;
            }
        }

        // App
        BrowseAction::Quit => {
            state.should_exit = true;
        }
    }

    state
}

/// Adjust scroll offset to keep the selected row visible.
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }
    if selected_index < scroll_offset {
        return selected_index;
    }
    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }
    scroll_offset
}

// ============================================================================
// View Model Types
// ============================================================================

/// Computed view model for rendering the browse TUI
#[derive(Debug, Clone)]
pub struct BrowseViewModel {
    /// Display name shown in the header.
    pub welcome_name: String,
    /// Currently active tab.
    pub active_tab: BrowseTab,
    /// Whether the catalog fetch is still outstanding.
    pub is_loading: bool,
    /// Error message when the catalog failed to load.
    pub catalog_error: Option<String>,
    /// Rows of the active tab, in display order.
    pub rows: Vec<Recipe>,
    /// Index of the selected row.
    pub selected_index: usize,
    /// Scroll offset for the row list.
    pub scroll_offset: usize,
    /// How many rows are shown out of the filtered subset.
    pub showing: usize,
    /// Size of the whole filtered subset.
    pub total_filtered: usize,
    /// Whether more filtered rows remain beyond the reveal cursor.
    pub has_more: bool,
    /// Whether the filtered subset is empty.
    pub is_empty: bool,
    /// Cuisine options for the selector.
    pub cuisine_options: Vec<String>,
    /// Index of the selected cuisine option.
    pub cuisine_index: usize,
    /// Live search box text.
    pub search_input: String,
    /// Whether the search box is focused.
    pub search_focused: bool,
    /// Detail modal state.
    pub detail: DetailState,
    /// Toast notification to display.
    pub toast: Option<Toast>,
    /// Keyboard shortcuts for the footer.
    pub shortcuts: Vec<Shortcut>,
}

/// Pure function: compute view model from state
pub fn compute_browse_view_model(state: &BrowseState) -> BrowseViewModel {
    let (rows, total_filtered, has_more) = match state.active_tab {
        BrowseTab::Catalog => {
            let CatalogView {
                visible,
                total_filtered,
                has_more,
                ..
            } = compute_view(&state.recipes, &state.criteria);
            (visible, total_filtered, has_more)
        }
        BrowseTab::Favorites => {
            let favorites = popular_recipes(&state.recipes);
            let count = favorites.len();
            (favorites, count, false)
        }
    };

    let showing = rows.len();
    let is_empty = total_filtered == 0;

    BrowseViewModel {
        welcome_name: state.welcome_name.clone(),
        active_tab: state.active_tab,
        is_loading: state.is_fetching,
        catalog_error: state.catalog_error.clone(),
        rows,
        selected_index: state.selected_index,
        scroll_offset: state.scroll_offset,
        showing,
        total_filtered,
        has_more,
        is_empty,
        cuisine_options: state.cuisine_options(),
        cuisine_index: state.cuisine_index,
        search_input: state.search_input.clone(),
        search_focused: state.search_focused,
        detail: state.detail.clone(),
        toast: state.toast.clone(),
        shortcuts: compute_shortcuts(state, has_more),
    }
}

fn compute_shortcuts(state: &BrowseState, has_more: bool) -> Vec<Shortcut> {
    if state.detail.is_open() {
        return vec![Shortcut::new("Esc", "close")];
    }
    if state.search_focused {
        return vec![
            Shortcut::new("Enter", "apply"),
            Shortcut::new("Esc", "clear & exit"),
            Shortcut::new("C-q", "quit"),
        ];
    }

    let mut shortcuts = vec![
        Shortcut::new("q", "quit"),
        Shortcut::new("Tab", "favorites"),
        Shortcut::new("j/k", "nav"),
        Shortcut::new("/", "search"),
        Shortcut::new("←/→", "cuisine"),
        Shortcut::new("Enter", "view recipe"),
        Shortcut::new("r", "reload"),
    ];
    if has_more {
        shortcuts.push(Shortcut::new("m", "show more"));
    }
    shortcuts
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Convert a key event to a BrowseAction (pure function)
///
/// Returns `None` if the key doesn't map to any action in the current mode.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &BrowseState,
) -> Option<BrowseAction> {
    // The detail modal captures all input while open.
    if state.detail.is_open() {
        return match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(BrowseAction::CloseDetail),
            _ => None,
        };
    }

    // Search mode
    if state.search_focused {
        return match (code, modifiers) {
            (KeyCode::Esc, _) => Some(BrowseAction::ClearSearchAndExit),
            (KeyCode::Enter, _) => Some(BrowseAction::ExitSearch),
            (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => {
                Some(BrowseAction::Quit)
            }
            // Other characters are handled by the search box component
            _ => None,
        };
    }

    // Normal mode
    if modifiers.contains(KeyModifiers::SHIFT) {
        return match code {
            KeyCode::Char('G') | KeyCode::Char('g') => Some(BrowseAction::GoToBottom),
            _ => None,
        };
    }

    match (code, modifiers) {
        // Navigation
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Some(BrowseAction::MoveDown),
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Some(BrowseAction::MoveUp),
        (KeyCode::Char('g'), KeyModifiers::NONE) => Some(BrowseAction::GoToTop),
        (KeyCode::Char('G'), KeyModifiers::NONE) => Some(BrowseAction::GoToBottom),

        // View
        (KeyCode::Tab, KeyModifiers::NONE) => Some(BrowseAction::ToggleTab),

        // Search
        (KeyCode::Char('/'), KeyModifiers::NONE) => Some(BrowseAction::FocusSearch),

        // Cuisine filter
        (KeyCode::Left, KeyModifiers::NONE) => Some(BrowseAction::CuisinePrev),
        (KeyCode::Right, KeyModifiers::NONE) => Some(BrowseAction::CuisineNext),

        // Pagination
        (KeyCode::Char('m'), KeyModifiers::NONE) => Some(BrowseAction::RevealMore),

        // Detail
        (KeyCode::Enter, KeyModifiers::NONE) => state
            .selected_recipe()
            .map(|r| BrowseAction::DetailRequested(r.id)),

        // Catalog reload
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(BrowseAction::CatalogRequested),

        // App
        (KeyCode::Char('q') | KeyCode::Esc, KeyModifiers::NONE) => Some(BrowseAction::Quit),

        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
