//! Theme Service — resolves the active palette and broadcasts changes.
//!
//! Theme switches go out on a typed bus owned by the composition root
//! instead of a process-wide notification broadcast, so subscribers are
//! explicit and torn down with the app.

use tokio::sync::broadcast;

use crate::services::event_bus::EventBus;
use crate::services::preferences::{PreferencesStore, PreferencesStoreTrait};
use crate::types::errors::PreferencesError;
use crate::types::theme::{Theme, ThemePalette};

/// Light palette.
const LIGHT_PALETTE: ThemePalette = ThemePalette {
    background: "#ffffff",
    secondary_background: "#f2f2f7",
    text: "#1c1c1e",
    secondary_text: "#6e6e73",
    tint: "#ff2d55",
    cell_background: "#ffffff",
    separator: "#d1d1d6",
};

/// Dark palette.
const DARK_PALETTE: ThemePalette = ThemePalette {
    background: "#000000",
    secondary_background: "#1c1c1e",
    text: "#f2f2f7",
    secondary_text: "#8e8e93",
    tint: "#ff375f",
    cell_background: "#1c1c1e",
    separator: "#38383a",
};

/// Trait defining the theme service interface.
pub trait ThemeServiceTrait {
    /// Switches the theme, persists the choice, and broadcasts it.
    fn set_theme(
        &mut self,
        theme: Theme,
        preferences: &mut PreferencesStore,
    ) -> Result<(), PreferencesError>;
    /// Applies a theme without persisting, e.g. when restoring the
    /// saved choice at startup. Still broadcasts.
    fn apply(&mut self, theme: Theme);
    fn current(&self) -> Theme;
    fn palette(&self) -> ThemePalette;
    fn subscribe(&self) -> broadcast::Receiver<Theme>;
}

/// The theme service implementation.
pub struct ThemeService {
    current: Theme,
    bus: EventBus<Theme>,
}

impl ThemeService {
    /// Creates a theme service starting on the given theme.
    pub fn new(initial: Theme) -> Self {
        Self {
            current: initial,
            bus: EventBus::new(16),
        }
    }
}

impl ThemeServiceTrait for ThemeService {
    fn set_theme(
        &mut self,
        theme: Theme,
        preferences: &mut PreferencesStore,
    ) -> Result<(), PreferencesError> {
        preferences.set_theme(theme)?;
        self.current = theme;
        self.bus.publish(theme);
        Ok(())
    }

    fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.bus.publish(theme);
    }

    fn current(&self) -> Theme {
        self.current
    }

    fn palette(&self) -> ThemePalette {
        match self.current {
            Theme::Light => LIGHT_PALETTE,
            Theme::Dark => DARK_PALETTE,
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<Theme> {
        self.bus.subscribe()
    }
}
