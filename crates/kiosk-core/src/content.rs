//! Content metadata and player display options

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PlayerError;

/// Metadata for one deployed content package.
///
/// The content body itself (markup, media, libraries) lives with the host
/// platform; the player only needs the stored JSON metadata to report a
/// title and identify the package in rendered output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: Uuid,
    /// Decoded JSON metadata as stored by the content deployment step.
    pub json_content: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl Content {
    pub fn new(json_content: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            json_content,
            created_at: Utc::now(),
        }
    }

    /// Decode raw stored JSON into content metadata.
    pub fn from_json_str(raw: &str) -> Result<Self, PlayerError> {
        let json_content = serde_json::from_str(raw)?;
        Ok(Self::new(json_content))
    }

    /// Title as recorded in the content JSON.
    pub fn title(&self) -> Result<String, PlayerError> {
        self.json_content
            .get("title")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                PlayerError::ContentDecode("content JSON has no 'title' field".to_string())
            })
    }
}

/// Display options for one player instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Show the surrounding action frame (download, copyright, ...).
    pub frame: bool,
    /// Allow downloading the content package.
    pub export: bool,
    /// Render inline instead of in a sandboxed iframe.
    pub embed: bool,
    /// Show the copyright notice.
    pub copyright: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            frame: true,
            export: true,
            embed: false,
            copyright: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_is_decoded_from_json() {
        let content = Content::new(json!({"title": "Find the Words", "language": "en"}));
        assert_eq!(content.title().unwrap(), "Find the Words");
    }

    #[test]
    fn test_missing_title_is_a_decode_error() {
        let content = Content::new(json!({"language": "en"}));
        assert!(matches!(
            content.title(),
            Err(PlayerError::ContentDecode(_))
        ));
    }

    #[test]
    fn test_from_json_str_rejects_invalid_json() {
        assert!(Content::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_default_display_options() {
        let options = DisplayOptions::default();
        assert!(options.frame);
        assert!(options.export);
        assert!(!options.embed);
        assert!(!options.copyright);
    }
}
