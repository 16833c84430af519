// Directory resolution on macOS. Per-user app state belongs in
// Application Support, and macOS does not split config from data: the
// preferences file and the library database share one directory.

use std::env;
use std::path::PathBuf;

fn app_support() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("LearnTube")
}

/// `~/Library/Application Support/LearnTube`.
pub fn get_config_dir() -> PathBuf {
    app_support()
}

/// Same directory as config; there is no separate data root here.
pub fn get_data_dir() -> PathBuf {
    app_support()
}
