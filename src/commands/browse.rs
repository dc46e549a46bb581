//! The fullscreen catalog browser command.

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{LarderError, Result};
use crate::session::SessionStore;
use crate::tui::browse::BrowseTui;

/// Run the browse TUI.
///
/// The session gate runs first: without a stored identity this returns
/// before any configuration or network client is touched.
pub async fn cmd_browse() -> Result<()> {
    let store = SessionStore::open_default()?;
    let Some(session) = store.load()? else {
        return Err(LarderError::NotLoggedIn);
    };

    let config = Config::load()?;

    element!(BrowseTui(
        welcome_name: session.first_name,
        page_size: config.page_size,
    ))
    .fullscreen()
    .await
    .map_err(|e| LarderError::Other(format!("TUI error: {}", e)))?;

    Ok(())
}
