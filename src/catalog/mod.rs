//! LearnTube catalog layer.
//!
//! Talks to the video provider's REST API: a thin [`Transport`] doing
//! HTTP GETs with uniform error mapping, wire models for the provider's
//! payload shapes, and the typed [`CatalogClient`] operations built on top.
//!
//! [`Transport`]: transport::Transport
//! [`CatalogClient`]: client::CatalogClient

pub mod client;
pub mod models;
pub mod transport;

pub use client::CatalogClient;
pub use transport::{HttpTransport, Transport};
