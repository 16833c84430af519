// LearnTube services
// Services provide core functionality: accounts, password hashing, preferences, themes, and the event bus.

pub mod auth_service;
pub mod crypto_service;
pub mod event_bus;
pub mod preferences;
pub mod theme_service;
