//! Kiosk extension infrastructure
//!
//! This crate provides the extension-point registry and the asset
//! aggregator the player uses to collect script and stylesheet paths
//! contributed by installed components. Components register typed
//! callbacks explicitly at load time; nothing is discovered by runtime
//! introspection.

pub mod aggregator;
pub mod extension;
pub mod registry;

pub use aggregator::AssetAggregator;
pub use extension::{AssetCallback, HookBinding};
pub use registry::ExtensionRegistry;
