//! Asset callback aggregation
//!
//! The player asks the aggregator for all asset paths contributed by
//! installed components for one kind and embed mode. Callbacks run
//! sequentially on the caller's thread; the first failure aborts the
//! whole aggregation and nothing is returned.

use kiosk_core::{AssetDescriptor, AssetKind, EmbedMode, PlayerError};

use crate::registry::ExtensionRegistry;

/// Collects extension-contributed assets for a page render.
#[derive(Clone)]
pub struct AssetAggregator {
    registry: ExtensionRegistry,
}

impl AssetAggregator {
    pub fn new(registry: ExtensionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// Collect every asset path registered for `kind`, in order.
    ///
    /// Descriptors preserve registry iteration order: all of one
    /// component's paths precede the next component's, and within a
    /// component the order each callback returned its paths. An empty
    /// registry yields an empty vec.
    pub fn collect(
        &self,
        kind: AssetKind,
        mode: EmbedMode,
    ) -> Result<Vec<AssetDescriptor>, PlayerError> {
        let bindings = self.registry.discover(kind)?;
        let mut assets = Vec::new();

        let hook = kind.hook_name();
        for binding in &bindings {
            tracing::debug!(
                component = %binding.component,
                hook = %hook,
                mode = %mode,
                callbacks = binding.callbacks.len(),
                "invoking asset callbacks"
            );

            for callback in &binding.callbacks {
                let paths = callback
                    .paths(mode)
                    .map_err(|source| PlayerError::extension(&binding.component, source))?;

                for path in paths {
                    tracing::trace!(component = %binding.component, path = %path, "collected asset path");
                    assets.push(AssetDescriptor::new(&binding.component, path)?);
                }
            }
        }

        tracing::debug!(
            kind = %kind,
            components = bindings.len(),
            assets = assets.len(),
            "asset aggregation complete"
        );

        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use anyhow::{anyhow, Result};

    use crate::extension::AssetCallback;

    fn fixed(paths: &[&str]) -> Arc<dyn AssetCallback> {
        let paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        Arc::new(move |_: EmbedMode| -> Result<Vec<String>> { Ok(paths.clone()) })
    }

    #[test]
    fn test_scripts_for_iframe_mode() {
        let registry = ExtensionRegistry::new();
        registry
            .register(AssetKind::Scripts, "mod_wordcloud", fixed(&["a.js", "b.js"]))
            .unwrap();

        let aggregator = AssetAggregator::new(registry);
        let assets = aggregator
            .collect(AssetKind::Scripts, EmbedMode::Iframe)
            .unwrap();

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].path, "a.js");
        assert_eq!(assets[1].path, "b.js");
    }

    #[test]
    fn test_styles_for_iframe_mode() {
        let registry = ExtensionRegistry::new();
        registry
            .register(AssetKind::Styles, "mod_wordcloud", fixed(&["x.css"]))
            .unwrap();

        let aggregator = AssetAggregator::new(registry);
        let assets = aggregator
            .collect(AssetKind::Styles, EmbedMode::Iframe)
            .unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].path, "x.css");
    }

    #[test]
    fn test_empty_registry_yields_no_assets() {
        let aggregator = AssetAggregator::new(ExtensionRegistry::new());
        let assets = aggregator
            .collect(AssetKind::Scripts, EmbedMode::Div)
            .unwrap();
        assert!(assets.is_empty());
    }

    #[test]
    fn test_components_keep_registration_order() {
        let registry = ExtensionRegistry::new();
        registry
            .register(AssetKind::Scripts, "local_first", fixed(&["1a.js", "1b.js"]))
            .unwrap();
        registry
            .register(AssetKind::Scripts, "local_second", fixed(&["2a.js"]))
            .unwrap();

        let aggregator = AssetAggregator::new(registry);
        let assets = aggregator
            .collect(AssetKind::Scripts, EmbedMode::Iframe)
            .unwrap();

        let paths: Vec<&str> = assets.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, vec!["1a.js", "1b.js", "2a.js"]);
    }

    #[test]
    fn test_callbacks_see_the_embed_mode() {
        let registry = ExtensionRegistry::new();
        let by_mode = |mode: EmbedMode| -> Result<Vec<String>> {
            Ok(vec![format!("js/{}.js", mode)])
        };
        registry
            .register(AssetKind::Scripts, "mod_game", Arc::new(by_mode))
            .unwrap();

        let aggregator = AssetAggregator::new(registry);
        let iframe = aggregator
            .collect(AssetKind::Scripts, EmbedMode::Iframe)
            .unwrap();
        let div = aggregator
            .collect(AssetKind::Scripts, EmbedMode::Div)
            .unwrap();

        assert_eq!(iframe[0].path, "js/iframe.js");
        assert_eq!(div[0].path, "js/div.js");
    }

    #[test]
    fn test_failing_callback_aborts_aggregation() {
        let registry = ExtensionRegistry::new();
        registry
            .register(AssetKind::Scripts, "local_ok", fixed(&["a.js"]))
            .unwrap();
        let failing =
            |_: EmbedMode| -> Result<Vec<String>> { Err(anyhow!("manifest unavailable")) };
        registry
            .register(AssetKind::Scripts, "local_broken", Arc::new(failing))
            .unwrap();

        let aggregator = AssetAggregator::new(registry);
        let err = aggregator
            .collect(AssetKind::Scripts, EmbedMode::Iframe)
            .unwrap_err();

        match err {
            PlayerError::Extension { component, .. } => assert_eq!(component, "local_broken"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_path_is_rejected() {
        let registry = ExtensionRegistry::new();
        registry
            .register(AssetKind::Styles, "local_broken", fixed(&[""]))
            .unwrap();

        let aggregator = AssetAggregator::new(registry);
        let err = aggregator
            .collect(AssetKind::Styles, EmbedMode::Iframe)
            .unwrap_err();

        assert!(matches!(err, PlayerError::MalformedAsset { .. }));
    }
}
