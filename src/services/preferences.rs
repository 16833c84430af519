// LearnTube preferences store
// Persists app preferences (theme, signed-in user) as a JSON file at the
// platform-specific config path.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::PreferencesError;
use crate::types::preferences::AppPreferences;
use crate::types::theme::Theme;

/// Trait defining the preferences store interface.
pub trait PreferencesStoreTrait {
    fn load(&mut self) -> Result<AppPreferences, PreferencesError>;
    fn save(&self) -> Result<(), PreferencesError>;
    fn preferences(&self) -> &AppPreferences;
    fn set_theme(&mut self, theme: Theme) -> Result<(), PreferencesError>;
    fn set_logged_in_user(&mut self, username: Option<String>) -> Result<(), PreferencesError>;
    fn config_path(&self) -> &str;
}

/// Preferences store that persists as JSON on disk.
///
/// Mutators write through to disk synchronously; a failed write surfaces
/// as [`PreferencesError`] and leaves the previous file contents behind.
pub struct PreferencesStore {
    config_path: String,
    preferences: AppPreferences,
}

impl PreferencesStore {
    /// Creates a new PreferencesStore.
    ///
    /// If `path_override` is `Some`, uses that path for the preferences
    /// file. Otherwise uses `preferences.json` in the platform config dir.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("preferences.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            preferences: AppPreferences::default(),
        }
    }
}

impl PreferencesStoreTrait for PreferencesStore {
    /// Loads preferences from the JSON file.
    ///
    /// A missing file yields defaults; a malformed file is an error
    /// rather than a silent reset.
    fn load(&mut self) -> Result<AppPreferences, PreferencesError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.preferences = AppPreferences::default();
            return Ok(self.preferences.clone());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            PreferencesError::IoError(format!("Failed to read preferences file: {}", e))
        })?;

        let preferences: AppPreferences = serde_json::from_str(&content).map_err(|e| {
            PreferencesError::SerializationError(format!("Failed to parse preferences: {}", e))
        })?;

        self.preferences = preferences;
        Ok(self.preferences.clone())
    }

    /// Saves the current preferences, creating parent directories if needed.
    fn save(&self) -> Result<(), PreferencesError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PreferencesError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.preferences).map_err(|e| {
            PreferencesError::SerializationError(format!("Failed to serialize preferences: {}", e))
        })?;

        fs::write(path, json).map_err(|e| {
            PreferencesError::IoError(format!("Failed to write preferences file: {}", e))
        })?;

        Ok(())
    }

    fn preferences(&self) -> &AppPreferences {
        &self.preferences
    }

    fn set_theme(&mut self, theme: Theme) -> Result<(), PreferencesError> {
        self.preferences.theme = theme;
        self.save()
    }

    fn set_logged_in_user(&mut self, username: Option<String>) -> Result<(), PreferencesError> {
        self.preferences.logged_in_user = username;
        self.save()
    }

    fn config_path(&self) -> &str {
        &self.config_path
    }
}
