//! Extension registry for asset callbacks
//!
//! Components register callbacks against an asset kind at load time. The
//! registry hands the aggregator an ordered snapshot of everything
//! registered for a kind; iteration order is registration order, both
//! across components and within a component, so aggregation output stays
//! deterministic.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use kiosk_core::{AssetKind, PlayerError};

use crate::extension::{AssetCallback, HookBinding};

/// Registry of asset extension points.
///
/// Cheap to clone; clones share the same underlying state. Registration
/// typically happens once at startup, after which the registry is only
/// read.
#[derive(Clone)]
pub struct ExtensionRegistry {
    hooks: Arc<RwLock<HashMap<AssetKind, Vec<HookBinding>>>>,
}

impl ExtensionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            hooks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a callback for `kind` on behalf of `component`.
    ///
    /// A component may register any number of callbacks for the same
    /// kind; they are invoked in registration order, before the next
    /// component's callbacks.
    pub fn register(
        &self,
        kind: AssetKind,
        component: impl Into<String>,
        callback: Arc<dyn AssetCallback>,
    ) -> Result<(), PlayerError> {
        let component = component.into();
        let mut hooks = self
            .hooks
            .write()
            .map_err(|_| PlayerError::Internal("extension registry lock poisoned".to_string()))?;

        let bindings = hooks.entry(kind).or_default();
        match bindings.iter_mut().find(|b| b.component == component) {
            Some(binding) => binding.callbacks.push(callback),
            None => {
                let mut binding = HookBinding::new(component);
                binding.callbacks.push(callback);
                bindings.push(binding);
            }
        }

        Ok(())
    }

    /// Ordered snapshot of everything registered for `kind`.
    ///
    /// Returns an empty vec when nothing is registered.
    pub fn discover(&self, kind: AssetKind) -> Result<Vec<HookBinding>, PlayerError> {
        let hooks = self
            .hooks
            .read()
            .map_err(|_| PlayerError::Internal("extension registry lock poisoned".to_string()))?;

        Ok(hooks.get(&kind).cloned().unwrap_or_default())
    }

    /// Check whether `component` registered anything for `kind`.
    pub fn contains(&self, kind: AssetKind, component: &str) -> Result<bool, PlayerError> {
        let hooks = self
            .hooks
            .read()
            .map_err(|_| PlayerError::Internal("extension registry lock poisoned".to_string()))?;

        Ok(hooks
            .get(&kind)
            .is_some_and(|bindings| bindings.iter().any(|b| b.component == component)))
    }

    /// Number of components with at least one callback for `kind`.
    pub fn component_count(&self, kind: AssetKind) -> Result<usize, PlayerError> {
        let hooks = self
            .hooks
            .read()
            .map_err(|_| PlayerError::Internal("extension registry lock poisoned".to_string()))?;

        Ok(hooks.get(&kind).map_or(0, Vec::len))
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
