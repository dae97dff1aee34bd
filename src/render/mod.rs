mod config;
mod highlight;
mod marker;
mod rewrite;
mod types;

use std::sync::Arc;

use comrak::{Arena, format_html, nodes::AstNode, parse_document};
use once_cell::sync::Lazy;
use syntect::{html::ClassStyle, parsing::SyntaxSet};

pub use highlight::{CodeBlockRenderer, SyntectHighlighter};
pub use marker::HIGHLIGHT_MARKER_CLASS;
pub use types::{RenderError, RenderOptions, RenderResult};

use marker::ensure_highlight_marker;
use rewrite::rewrite_code_blocks;

/// Markdown rendering pipeline: comrak parsing, syntect highlighting via an
/// AST rewrite, marker-class normalization, and ammonia sanitization, in that
/// fixed order. Holds only read-only data, so one shared instance serves
/// concurrent calls.
pub struct MarkdownRenderService {
    options: comrak::Options<'static>,
    syntax_set: SyntaxSet,
    class_style: ClassStyle,
    sanitizer: ammonia::Builder<'static>,
}

static RENDER_SERVICE: Lazy<Arc<MarkdownRenderService>> =
    Lazy::new(|| Arc::new(MarkdownRenderService::new()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<MarkdownRenderService> {
    Arc::clone(&RENDER_SERVICE)
}

impl MarkdownRenderService {
    /// Construct a standalone service. Loading the bundled syntax set is the
    /// expensive part; prefer [`render_service`] outside of tests.
    pub fn new() -> Self {
        Self {
            options: config::default_options(),
            syntax_set: SyntaxSet::load_defaults_newlines(),
            class_style: ClassStyle::SpacedPrefixed { prefix: "syntax-" },
            sanitizer: config::build_sanitizer(),
        }
    }

    /// Render markdown to HTML plus the requested theme's stylesheet.
    ///
    /// Stage order is load-bearing: sanitization runs last so no later stage
    /// can reintroduce unsafe markup. Theme CSS resolution is independent of
    /// the HTML pipeline. Identical `(markdown, options)` inputs yield
    /// byte-identical results.
    pub fn render(
        &self,
        markdown: &str,
        options: &RenderOptions,
    ) -> Result<RenderResult, RenderError> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &self.options);

        if options.highlight_code {
            let highlighter = SyntectHighlighter::new(&self.syntax_set, self.class_style);
            rewrite_code_blocks(root, &highlighter);
        }

        let mut html = render_html_stage(root, &self.options)?;

        if options.highlight_code {
            html = ensure_highlight_marker(&html)?;
        }

        if options.sanitize {
            html = self.sanitizer.clean(&html).to_string();
        }

        Ok(RenderResult {
            html,
            css: options.theme.css().to_string(),
        })
    }
}

impl Default for MarkdownRenderService {
    fn default() -> Self {
        Self::new()
    }
}

fn render_html_stage<'a>(
    root: &'a AstNode<'a>,
    options: &comrak::Options<'static>,
) -> Result<String, RenderError> {
    let mut html = String::new();
    format_html(root, options, &mut html).map_err(|err| RenderError::Markdown {
        message: err.to_string(),
    })?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn service() -> Arc<MarkdownRenderService> {
        render_service()
    }

    #[test]
    fn renders_basic_blocks() {
        let result = service()
            .render("# Hello\n\nsome *text*", &RenderOptions::default())
            .expect("render");

        assert!(result.html.contains("<h1>Hello</h1>"));
        assert!(result.html.contains("<em>text</em>"));
        assert!(result.css.contains(".anteprima-preview"));
    }

    #[test]
    fn autolinks_bare_urls() {
        let result = service()
            .render("see https://example.com today", &RenderOptions::default())
            .expect("render");

        assert!(result.html.contains("<a href=\"https://example.com\""));
    }

    #[test]
    fn applies_typographic_replacements() {
        let result = service()
            .render("\"quoted\" -- dashed", &RenderOptions::default())
            .expect("render");

        assert!(result.html.contains('\u{201c}'), "expected curly open quote");
        assert!(result.html.contains('\u{2013}'), "expected en dash");
    }

    #[test]
    fn raw_html_survives_when_safe() {
        let result = service()
            .render("before\n\n<div class=\"note\">kept</div>\n\nafter", &RenderOptions::default())
            .expect("render");

        assert!(result.html.contains("<div class=\"note\">kept</div>"));
    }

    #[test]
    fn sanitize_off_skips_the_sanitizer() {
        let options = RenderOptions::default().with_sanitize(false);
        let result = service()
            .render("<p onclick=\"x()\">raw</p>", &options)
            .expect("render");

        assert!(result.html.contains("onclick"));
    }

    #[test]
    fn highlight_off_skips_rewrite_and_marker() {
        let options = RenderOptions::default().with_highlight_code(false);
        let result = service()
            .render("```rust\nlet x = 1;\n```", &options)
            .expect("render");

        assert!(!result.html.contains(HIGHLIGHT_MARKER_CLASS));
        assert!(!result.html.contains("syntax-keyword"));
        assert!(result.html.contains("<pre"));
    }

    #[test]
    fn theme_selection_only_changes_css() {
        let light = service()
            .render("# Hi", &RenderOptions::default().with_theme(Theme::Light))
            .expect("light");
        let dark = service()
            .render("# Hi", &RenderOptions::default().with_theme(Theme::Dark))
            .expect("dark");

        assert_eq!(light.html, dark.html);
        assert_ne!(light.css, dark.css);
    }
}
