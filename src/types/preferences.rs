use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// Application preferences persisted between launches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    pub theme: Theme,
    /// Username of the signed-in account, if any.
    pub logged_in_user: Option<String>,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            logged_in_user: None,
        }
    }
}
