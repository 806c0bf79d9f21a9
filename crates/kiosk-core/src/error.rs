//! Error types module
//!
//! All player and extension errors are unified under the `PlayerError`
//! enum. Extension callback failures keep their causal chain via an
//! `anyhow::Error` source so callers can log the full chain.

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// A callback contributed an asset path that fails validation.
    #[error("malformed asset from '{component}': {detail}")]
    MalformedAsset { component: String, detail: String },

    /// A callback failed; aggregation aborts and nothing is returned.
    #[error("extension '{component}' failed")]
    Extension {
        component: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("content decode error: {0}")]
    ContentDecode(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl PlayerError {
    /// Wrap a failed extension callback, naming the component.
    pub fn extension(component: impl Into<String>, source: anyhow::Error) -> Self {
        PlayerError::Extension {
            component: component.into(),
            source,
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl From<serde_json::Error> for PlayerError {
    fn from(err: serde_json::Error) -> Self {
        PlayerError::ContentDecode(format!("JSON parsing error: {}", err))
    }
}
