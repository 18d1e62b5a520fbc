//! Color Theme
//!
//! Light/dark preference and the chart colors that go with it.

use crate::config::THEME_STORAGE_KEY;
use crate::storage::BrowserStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// A stored choice wins; otherwise the system preference decides
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Chart colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub tick: &'static str,
    pub title: &'static str,
    pub ph_axis: &'static str,
    pub temp_axis: &'static str,
}

pub const PH_COLOR: &str = "rgb(59, 130, 246)";
pub const TEMP_COLOR: &str = "rgb(249, 115, 22)";

impl ChartPalette {
    pub fn for_theme(theme: Theme) -> Self {
        let (tick, title) = if theme.is_dark() {
            ("#9ca3af", "#f9fafb")
        } else {
            ("#6b7280", "#1f2937")
        };
        Self {
            tick,
            title,
            ph_axis: PH_COLOR,
            temp_axis: TEMP_COLOR,
        }
    }
}

// ========================
// Browser side
// ========================

/// Theme from local storage or `prefers-color-scheme`
pub fn initial_theme() -> Theme {
    let stored = BrowserStorage::read(THEME_STORAGE_KEY);
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    resolve_theme(stored.as_deref(), prefers_dark)
}

/// Set the `dark` class on `<html>`
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(e) = result {
            log::warn!("[THEME] failed to update root class: {:?}", e);
        }
    }
}

pub fn persist_theme(theme: Theme) {
    BrowserStorage::write(THEME_STORAGE_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_theme() {
        assert_eq!(resolve_theme(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_theme(Some("light"), true), Theme::Light);
        assert_eq!(resolve_theme(None, true), Theme::Dark);
        assert_eq!(resolve_theme(None, false), Theme::Light);
    }

    #[test]
    fn test_palette() {
        let dark = ChartPalette::for_theme(Theme::Dark);
        assert_eq!(dark.tick, "#9ca3af");
        assert_eq!(dark.title, "#f9fafb");
        let light = ChartPalette::for_theme(Theme::Light);
        assert_eq!(light.tick, "#6b7280");
        assert_eq!(light.title, "#1f2937");
        assert_eq!(light.ph_axis, PH_COLOR);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
