//! Markdown-to-sanitized-HTML rendering core for editor preview surfaces.
//!
//! One synchronous pipeline: parse GitHub-flavored Markdown with comrak,
//! syntax-highlight code blocks with syntect, normalize the highlight marker
//! class, sanitize with ammonia, and pair the HTML with one of two baked
//! theme stylesheets. Every call is a deterministic pure computation; the
//! only shared state is read-only (syntax grammars, sanitizer policy, CSS
//! constants), so calls may run concurrently without coordination.
//!
//! ```
//! use anteprima::{RenderOptions, Theme, render_markdown};
//!
//! let result = render_markdown("# Hello", &RenderOptions::default().with_theme(Theme::Dark))
//!     .expect("render");
//! assert!(result.html.contains("<h1>Hello</h1>"));
//! assert!(result.css.contains(".anteprima-preview"));
//! ```

pub mod render;
pub mod theme;

pub use render::{
    CodeBlockRenderer, HIGHLIGHT_MARKER_CLASS, MarkdownRenderService, RenderError, RenderOptions,
    RenderResult, SyntectHighlighter, render_service,
};
pub use theme::Theme;

/// Render markdown on the shared service instance.
///
/// Equivalent to `render_service().render(markdown, options)`; the first call
/// pays for loading the bundled syntax set, later calls reuse it.
pub fn render_markdown(
    markdown: &str,
    options: &RenderOptions,
) -> Result<RenderResult, RenderError> {
    render_service().render(markdown, options)
}
