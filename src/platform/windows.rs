// Directory resolution on Windows. Small per-user app state goes in
// the roaming profile, so both the preferences file and the library
// database sit under %APPDATA%\LearnTube.

use std::env;
use std::path::PathBuf;

fn appdata() -> PathBuf {
    let root = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(root).join("LearnTube")
}

/// `%APPDATA%\LearnTube`.
pub fn get_config_dir() -> PathBuf {
    appdata()
}

/// Same directory as config; Windows has no separate data root here.
pub fn get_data_dir() -> PathBuf {
    appdata()
}
