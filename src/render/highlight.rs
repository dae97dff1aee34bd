use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};
use tracing::{debug, warn};

/// Capability consumed by the markdown rewrite pass: turns a code block's
/// literal text plus its declared language and fence attributes into inner
/// HTML. Implementations return only the inner markup; the caller owns the
/// `<pre><code>` wrapper.
pub trait CodeBlockRenderer {
    fn render_code(&self, text: &str, language: &str, attrs: &str) -> String;
}

/// Syntect-backed highlighter emitting `syntax-` prefixed CSS classes.
///
/// Total over any input string, via a three-tier fallback:
/// 1. recognized language token: language-specific highlighting;
/// 2. unknown token or tier-1 failure: first-line detection, else the
///    plain-text grammar;
/// 3. tier-2 failure: entity-escaped literal text.
pub struct SyntectHighlighter<'a> {
    syntax_set: &'a SyntaxSet,
    class_style: ClassStyle,
}

impl<'a> SyntectHighlighter<'a> {
    pub fn new(syntax_set: &'a SyntaxSet, class_style: ClassStyle) -> Self {
        Self {
            syntax_set,
            class_style,
        }
    }

    fn classed_html(&self, syntax: &SyntaxReference, code: &str) -> Result<String, syntect::Error> {
        let mut code_with_newline = code.to_string();
        if !code_with_newline.ends_with('\n') {
            code_with_newline.push('\n');
        }

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, self.syntax_set, self.class_style);
        for line in LinesWithEndings::from(code_with_newline.as_str()) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(generator.finalize())
    }

    fn auto_detect(&self, code: &str) -> &'a SyntaxReference {
        code.lines()
            .next()
            .and_then(|line| self.syntax_set.find_syntax_by_first_line(line))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

impl CodeBlockRenderer for SyntectHighlighter<'_> {
    fn render_code(&self, text: &str, language: &str, _attrs: &str) -> String {
        if !language.is_empty() {
            if let Some(syntax) = find_syntax(self.syntax_set, language) {
                match self.classed_html(syntax, text) {
                    Ok(html) => return html,
                    Err(err) => warn!(
                        target = "anteprima::render::highlight",
                        language,
                        error = %err,
                        "language-specific highlighting failed; attempting auto-detection"
                    ),
                }
            } else {
                debug!(
                    target = "anteprima::render::highlight",
                    language, "unrecognized language token; attempting auto-detection"
                );
            }
        }

        let detected = self.auto_detect(text);
        match self.classed_html(detected, text) {
            Ok(html) => html,
            Err(err) => {
                warn!(
                    target = "anteprima::render::highlight",
                    detected = detected.name.as_str(),
                    error = %err,
                    "auto-detected highlighting failed; emitting escaped text"
                );
                escape_text(text)
            }
        }
    }
}

fn find_syntax<'a>(syntax_set: &'a SyntaxSet, token: &str) -> Option<&'a SyntaxReference> {
    let lowercase = token.to_ascii_lowercase();
    syntax_set
        .find_syntax_by_token(&lowercase)
        .or_else(|| syntax_set.find_syntax_by_name(&lowercase))
        .or_else(|| syntax_set.find_syntax_by_extension(&lowercase))
}

/// Replaces the five HTML-significant characters with entities, leaving every
/// other byte untouched.
pub(crate) fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter(syntax_set: &SyntaxSet) -> SyntectHighlighter<'_> {
        SyntectHighlighter::new(syntax_set, ClassStyle::SpacedPrefixed { prefix: "syntax-" })
    }

    #[test]
    fn recognized_language_produces_classed_markup() {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let html = highlighter(&syntax_set).render_code("let x = 1;", "rust", "");

        assert!(html.contains("syntax-"));
        assert!(!html.contains("<pre"), "renderer must not emit the wrapper");
    }

    #[test]
    fn unrecognized_language_still_yields_markup() {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let html = highlighter(&syntax_set).render_code("x = 1", "not-a-real-lang", "");

        assert!(!html.is_empty());
        assert!(html.contains("x = 1") || html.contains("syntax-"));
    }

    #[test]
    fn empty_language_falls_through_to_detection() {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let html = highlighter(&syntax_set).render_code("#!/usr/bin/env bash\necho hi", "", "");

        assert!(html.contains("syntax-"));
    }

    #[test]
    fn highlighting_escapes_embedded_markup() {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let html = highlighter(&syntax_set).render_code("<script>alert(1)</script>", "", "");

        assert!(!html.contains("<script"));
    }

    #[test]
    fn escape_text_covers_the_five_significant_characters() {
        assert_eq!(
            escape_text(r#"&<>"' plain"#),
            "&amp;&lt;&gt;&quot;&#39; plain"
        );
    }
}
