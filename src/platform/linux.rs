// XDG base-directory resolution on Linux: the preferences file goes
// under the config root, the library database under the data root.
// Explicit XDG overrides win; otherwise the dotted paths under $HOME
// apply.

use std::env;
use std::path::PathBuf;

fn home() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `$XDG_CONFIG_HOME/learntube`, falling back to `~/.config/learntube`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("learntube"),
        _ => home().join(".config").join("learntube"),
    }
}

/// `$XDG_DATA_HOME/learntube`, falling back to `~/.local/share/learntube`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("learntube"),
        _ => home().join(".local").join("share").join("learntube"),
    }
}
