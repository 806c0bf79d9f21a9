//! Kiosk Core Library
//!
//! This crate provides the domain model, error types, and configuration
//! shared across all Kiosk components: asset descriptors, embed modes,
//! content metadata, and display options for the embeddable player.

pub mod asset;
pub mod config;
pub mod content;
pub mod error;

// Re-export commonly used types
pub use asset::{AssetDescriptor, AssetKind, EmbedMode};
pub use config::PlayerConfig;
pub use content::{Content, DisplayOptions};
pub use error::PlayerError;
