use lol_html::{RewriteStrSettings, element, rewrite_str};

use super::types::RenderError;

/// CSS class signalling that a code block's content went through the
/// highlighter and should pick up the theme's syntax palette rules.
pub const HIGHLIGHT_MARKER_CLASS: &str = "syntax-highlight";

/// Guarantees every `<pre><code>` opening tag carries the highlight marker
/// class, prepending it to any existing class list. Idempotent; operates on
/// the parsed element tree, so whitespace or extra attributes between `pre`
/// and `code` cannot break the match, and inline `<code>` spans never match.
pub(crate) fn ensure_highlight_marker(html: &str) -> Result<String, RenderError> {
    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!("pre > code", |el| {
                let class = el.get_attribute("class").unwrap_or_default();
                if !has_marker_class(&class) {
                    let value = if class.is_empty() {
                        HIGHLIGHT_MARKER_CLASS.to_string()
                    } else {
                        format!("{HIGHLIGHT_MARKER_CLASS} {class}")
                    };
                    el.set_attribute("class", &value)?;
                }
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|err| RenderError::PostProcess {
        message: err.to_string(),
    })
}

fn has_marker_class(class: &str) -> bool {
    class
        .split_ascii_whitespace()
        .any(|token| token == HIGHLIGHT_MARKER_CLASS)
}
