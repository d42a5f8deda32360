//! Active-page state for the section visibility toggle.
//!
//! DESIGN
//! ======
//! Every page section stays mounted; exactly one is active at a time. Pages
//! are addressed by stable string ids so navigation controls stay decoupled
//! from the enum itself.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// One of the page sections of the app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    /// Landing screen with links to the analysis tools.
    #[default]
    Home,
    /// Vegetation coverage analysis.
    Vegetation,
    /// Soil type analysis.
    Soil,
}

impl Page {
    /// Stable identifier used by navigation controls.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Vegetation => "vegetation",
            Self::Soil => "soil",
        }
    }

    /// Look a page up by its identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "home" => Some(Self::Home),
            "vegetation" => Some(Self::Vegetation),
            "soil" => Some(Self::Soil),
            _ => None,
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn nav_title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Vegetation => "Vegetation Coverage",
            Self::Soil => "Soil Type",
        }
    }
}

/// UI chrome state shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_page: Page,
}

impl UiState {
    /// Deactivate all page sections and activate the one matching `id`.
    /// An unknown id leaves the active page unchanged.
    pub fn show_page(&mut self, id: &str) {
        if let Some(page) = Page::from_id(id) {
            self.active_page = page;
        }
    }
}
