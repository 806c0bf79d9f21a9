//! Configuration module
//!
//! Environment-driven settings for the player: the base URL prepended to
//! relative asset paths and the defaults applied when a caller does not
//! supply explicit display options.

use std::env;

use crate::asset::EmbedMode;
use crate::content::DisplayOptions;
use crate::error::PlayerError;

const DEFAULT_EMBED_MODE: EmbedMode = EmbedMode::Iframe;

/// Player configuration
#[derive(Clone, Debug)]
pub struct PlayerConfig {
    /// Prefix applied to relative asset paths when rendering.
    pub asset_base_url: String,
    /// Embed mode used when display options do not force inline embedding.
    pub default_embed_mode: EmbedMode,
    /// Default display options for new player instances.
    pub display: DisplayOptions,
}

impl PlayerConfig {
    pub fn from_env() -> Result<Self, PlayerError> {
        let asset_base_url = env::var("KIOSK_ASSET_BASE_URL").unwrap_or_default();

        let default_embed_mode = match env::var("KIOSK_DEFAULT_EMBED_MODE") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_EMBED_MODE,
        };

        let defaults = DisplayOptions::default();
        let display = DisplayOptions {
            frame: env_bool("KIOSK_FRAME", defaults.frame),
            export: env_bool("KIOSK_EXPORT", defaults.export),
            embed: env_bool("KIOSK_EMBED", defaults.embed),
            copyright: env_bool("KIOSK_COPYRIGHT", defaults.copyright),
        };

        Ok(Self {
            asset_base_url,
            default_embed_mode,
            display,
        })
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            asset_base_url: String::new(),
            default_embed_mode: DEFAULT_EMBED_MODE,
            display: DisplayOptions::default(),
        }
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.to_lowercase())
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.asset_base_url, "");
        assert_eq!(config.default_embed_mode, EmbedMode::Iframe);
        assert!(config.display.frame);
        assert!(!config.display.embed);
    }
}
