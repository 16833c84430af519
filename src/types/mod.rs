// LearnTube shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod events;
pub mod library;
pub mod preferences;
pub mod theme;
pub mod video;
