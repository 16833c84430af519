// LearnTube state managers
// Managers handle stateful operations: the catalog feed and the two local library collections.

pub mod bookmark_manager;
pub mod feed_manager;
pub mod saved_video_manager;
