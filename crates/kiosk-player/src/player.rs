//! The content player
//!
//! One `Player` renders one deployed content package. Its collaborators
//! are passed in explicitly: content metadata, display options, player
//! configuration, and the extension registry assets are aggregated from.

use kiosk_core::{
    AssetDescriptor, AssetKind, Content, DisplayOptions, EmbedMode, PlayerConfig, PlayerError,
};
use kiosk_plugins::{AssetAggregator, ExtensionRegistry};

use crate::markup::render_embed;

pub struct Player {
    url: String,
    content: Content,
    options: DisplayOptions,
    config: PlayerConfig,
    aggregator: AssetAggregator,
    scripts: Vec<AssetDescriptor>,
    styles: Vec<AssetDescriptor>,
}

impl Player {
    pub fn new(
        url: impl Into<String>,
        content: Content,
        options: DisplayOptions,
        config: PlayerConfig,
        registry: ExtensionRegistry,
    ) -> Self {
        Self {
            url: url.into(),
            content,
            options,
            config,
            aggregator: AssetAggregator::new(registry),
            scripts: Vec::new(),
            styles: Vec::new(),
        }
    }

    /// Embed mode for this render.
    ///
    /// The `embed` display option forces the inline div variant;
    /// otherwise the configured default applies.
    pub fn embed_mode(&self) -> EmbedMode {
        if self.options.embed {
            EmbedMode::Div
        } else {
            self.config.default_embed_mode
        }
    }

    /// Collect extension-contributed assets for the page.
    ///
    /// Invoked once per page render; invoking it again replaces the
    /// stored asset lists. A failing or malformed contribution aborts
    /// the render and leaves the previously stored lists untouched.
    pub fn add_assets_to_page(&mut self) -> Result<(), PlayerError> {
        let mode = self.embed_mode();
        let scripts = self.aggregator.collect(AssetKind::Scripts, mode)?;
        let styles = self.aggregator.collect(AssetKind::Styles, mode)?;

        tracing::debug!(
            content_id = %self.content.id,
            mode = %mode,
            scripts = scripts.len(),
            styles = styles.len(),
            "page assets collected"
        );

        self.scripts = scripts;
        self.styles = styles;
        Ok(())
    }

    /// Title as recorded in the content metadata.
    pub fn title(&self) -> Result<String, PlayerError> {
        self.content.title()
    }

    /// Rendered page fragment for the current embed mode.
    pub fn output(&self) -> String {
        render_embed(
            self.embed_mode(),
            self.content.id,
            &self.url,
            &self.scripts,
            &self.styles,
            &self.config.asset_base_url,
        )
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn scripts(&self) -> &[AssetDescriptor] {
        &self.scripts
    }

    pub fn styles(&self) -> &[AssetDescriptor] {
        &self.styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player_with(options: DisplayOptions) -> Player {
        Player::new(
            "/content/unit",
            Content::new(json!({"title": "Unit"})),
            options,
            PlayerConfig::default(),
            ExtensionRegistry::new(),
        )
    }

    #[test]
    fn test_embed_flag_selects_div() {
        let inline = player_with(DisplayOptions {
            embed: true,
            ..DisplayOptions::default()
        });
        assert_eq!(inline.embed_mode(), EmbedMode::Div);

        let framed = player_with(DisplayOptions::default());
        assert_eq!(framed.embed_mode(), EmbedMode::Iframe);
    }

    #[test]
    fn test_output_before_asset_collection_has_no_assets() {
        let player = player_with(DisplayOptions::default());
        let html = player.output();
        assert!(!html.contains("<script"));
        assert!(!html.contains("<link"));
    }
}
