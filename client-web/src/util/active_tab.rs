//! Side-panel tab persistence.
//!
//! Reads and writes the active tab name in `localStorage` so the panel
//! reopens where the user left it. Requires a browser environment; on
//! the server the default tab is used.

use crate::state::ui::ActiveTab;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "classroom_active_tab";

/// Read the persisted tab, falling back to the default.
#[must_use]
pub fn read_preference() -> ActiveTab {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        if let Some(val) = stored {
            if let Some(tab) = ActiveTab::from_name(&val) {
                return tab;
            }
        }
        ActiveTab::default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ActiveTab::default()
    }
}

/// Persist the tab choice to localStorage.
pub fn store_preference(tab: ActiveTab) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, tab.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tab;
    }
}
