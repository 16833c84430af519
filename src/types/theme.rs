use serde::{Deserialize, Serialize};

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// Semantic color slots resolved from the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub secondary_background: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub tint: &'static str,
    pub cell_background: &'static str,
    pub separator: &'static str,
}
