use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Theme;

/// Per-call rendering options. Immutable for the duration of a call; a fresh
/// value (or the defaults) is supplied on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Stylesheet palette paired with the rendered HTML.
    pub theme: Theme,
    /// Whether fenced/indented code blocks are syntax highlighted and tagged
    /// with the highlight marker class.
    pub highlight_code: bool,
    /// Whether the final HTML passes through the allowlist sanitizer. Callers
    /// switching this off accept whatever the parser lets through.
    pub sanitize: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            highlight_code: true,
            sanitize: true,
        }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_highlight_code(mut self, highlight_code: bool) -> Self {
        self.highlight_code = highlight_code;
        self
    }

    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }
}

/// Deterministic rendering result returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// Rendered HTML body, sanitized unless the caller opted out.
    pub html: String,
    /// Complete stylesheet text for the requested theme.
    pub css: String,
}

/// Structured errors surfaced by the rendering pipeline. These should map
/// cleanly to a host's error surface without leaking implementation details.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("markdown rendering failed: {message}")]
    Markdown { message: String },
    #[error("html post-processing failed: {message}")]
    PostProcess { message: String },
}
