//! Asset descriptors and the tags that select an extension point

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlayerError;

/// Extension-point namespace: every hook name a component can register
/// against is derived from this identity.
pub const HOOK_NAMESPACE: &str = "player";

/// Which asset extension point is being queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Scripts,
    Styles,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Scripts => "scripts",
            AssetKind::Styles => "styles",
        }
    }

    /// Conventional hook name for this kind, e.g. `extend_player_scripts`.
    pub fn hook_name(&self) -> String {
        format!("extend_{}_{}", HOOK_NAMESPACE, self.as_str())
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the player's output is embedded in a host page.
///
/// Passed through unchanged to every asset callback so an extension can
/// vary its contribution by embedding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedMode {
    Iframe,
    Div,
}

impl EmbedMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedMode::Iframe => "iframe",
            EmbedMode::Div => "div",
        }
    }
}

impl fmt::Display for EmbedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbedMode {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iframe" => Ok(EmbedMode::Iframe),
            "div" => Ok(EmbedMode::Div),
            other => Err(PlayerError::InvalidInput(format!(
                "unknown embed mode '{}'",
                other
            ))),
        }
    }
}

/// One script or stylesheet resource to include in rendered player output.
///
/// Produced by an extension callback, consumed by the player's markup
/// layer, discarded after rendering. Construction validates the path so a
/// malformed contribution is rejected at the point it enters the system
/// rather than silently rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub path: String,
}

impl AssetDescriptor {
    /// Wrap a raw path contributed by `component`.
    ///
    /// Rejects empty paths and paths containing control characters with
    /// `PlayerError::MalformedAsset` naming the contributing component.
    pub fn new(component: &str, path: impl Into<String>) -> Result<Self, PlayerError> {
        let path = path.into();
        if let Some(detail) = path_defect(&path) {
            return Err(PlayerError::MalformedAsset {
                component: component.to_string(),
                detail,
            });
        }
        Ok(Self { path })
    }
}

fn path_defect(path: &str) -> Option<String> {
    if path.is_empty() {
        return Some("empty asset path".to_string());
    }
    if path.chars().any(|c| c.is_control()) {
        return Some("asset path contains control characters".to_string());
    }
    None
}
