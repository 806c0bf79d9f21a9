//! Extension-point interface
//!
//! Installed components contribute page assets through typed callbacks
//! registered against a hook. A callback receives the embed mode the
//! player will render with and returns the raw asset paths it wants
//! included, in the order it wants them rendered.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use kiosk_core::EmbedMode;

/// A single asset callback contributed by a component.
///
/// Callbacks must be infallible in the common case; a returned error
/// aborts the whole aggregation for the current render.
pub trait AssetCallback: Send + Sync {
    /// Raw asset paths for the given embed mode.
    fn paths(&self, mode: EmbedMode) -> Result<Vec<String>>;
}

impl<F> AssetCallback for F
where
    F: Fn(EmbedMode) -> Result<Vec<String>> + Send + Sync,
{
    fn paths(&self, mode: EmbedMode) -> Result<Vec<String>> {
        self(mode)
    }
}

/// All callbacks one component registered for a hook, in registration
/// order.
#[derive(Clone)]
pub struct HookBinding {
    /// Name of the contributing component, e.g. `mod_wordcloud`.
    pub component: String,
    pub callbacks: Vec<Arc<dyn AssetCallback>>,
}

impl HookBinding {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            callbacks: Vec::new(),
        }
    }
}

impl fmt::Debug for HookBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookBinding")
            .field("component", &self.component)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_callbacks() {
        let callback =
            |mode: EmbedMode| -> Result<Vec<String>> { Ok(vec![format!("js/{}.js", mode)]) };
        let paths = callback.paths(EmbedMode::Iframe).unwrap();
        assert_eq!(paths, vec!["js/iframe.js".to_string()]);
    }

    #[test]
    fn test_binding_debug_hides_callables() {
        let mut binding = HookBinding::new("mod_wordcloud");
        let noop = |_: EmbedMode| -> Result<Vec<String>> { Ok(Vec::new()) };
        binding.callbacks.push(Arc::new(noop) as Arc<dyn AssetCallback>);
        let debug = format!("{:?}", binding);
        assert!(debug.contains("mod_wordcloud"));
        assert!(debug.contains("callbacks: 1"));
    }
}
