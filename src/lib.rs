//! LearnTube — headless client core for a video-learning app.
//!
//! Catalog browsing and search against a remote video provider, a local
//! library of bookmarks and offline-saved videos, accounts, preferences,
//! and theming. This library crate exposes all modules for use by the
//! binary and integration tests.

pub mod app;
pub mod catalog;
pub mod config;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
