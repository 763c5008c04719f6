#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use chart::selection::ScreenRect;

/// UI chrome state: side-panel tab, group-mode input, marquee overlay.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: ActiveTab,
    /// Raw group-id text from the toolbar input.
    pub group_input: String,
    /// Marquee rectangle currently being dragged, in viewport coordinates.
    pub marquee: Option<ScreenRect>,
}

impl UiState {
    /// Parse the toolbar group input; empty means "unassign".
    #[must_use]
    pub fn group_id(&self) -> Option<i64> {
        self.group_input.trim().parse().ok()
    }
}

/// Tabs in the side panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Roster,
    Suggestions,
}

impl ActiveTab {
    /// Stable name used for localStorage persistence.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roster => "roster",
            Self::Suggestions => "suggestions",
        }
    }

    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            "roster" => Some(Self::Roster),
            "suggestions" => Some(Self::Suggestions),
            _ => None,
        }
    }
}
