//! Embed markup rendering
//!
//! Produces the HTML fragment a host page includes: the embed element
//! for the chosen mode followed by one `<link>` per stylesheet and one
//! `<script>` per script, in aggregation order.

use kiosk_core::{AssetDescriptor, EmbedMode};
use uuid::Uuid;

/// Render the embed fragment for one player instance.
pub fn render_embed(
    mode: EmbedMode,
    content_id: Uuid,
    content_url: &str,
    scripts: &[AssetDescriptor],
    styles: &[AssetDescriptor],
    asset_base_url: &str,
) -> String {
    let mut out = String::new();

    match mode {
        EmbedMode::Iframe => {
            out.push_str(&format!(
                "<iframe class=\"kiosk-player-iframe\" data-content-id=\"{}\" src=\"{}\"></iframe>\n",
                content_id,
                escape_attr(content_url)
            ));
        }
        EmbedMode::Div => {
            out.push_str(&format!(
                "<div class=\"kiosk-player\" data-content-id=\"{}\" data-content-url=\"{}\"></div>\n",
                content_id,
                escape_attr(content_url)
            ));
        }
    }

    for style in styles {
        out.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_attr(&resolve(asset_base_url, &style.path))
        ));
    }

    for script in scripts {
        out.push_str(&format!(
            "<script src=\"{}\"></script>\n",
            escape_attr(&resolve(asset_base_url, &script.path))
        ));
    }

    out
}

/// Prefix relative paths with the configured asset base URL.
///
/// Absolute URLs and root-relative paths pass through unchanged.
fn resolve(base_url: &str, path: &str) -> String {
    if base_url.is_empty()
        || path.starts_with('/')
        || path.starts_with("http://")
        || path.starts_with("https://")
    {
        return path.to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
