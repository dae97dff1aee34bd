use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};

use super::highlight::CodeBlockRenderer;

/// Replaces every code block in the parsed tree with a raw HTML block wrapping
/// the renderer's inner markup. The wrapper is always
/// `<pre><code class="language-{token}">…</code></pre>`; an empty language
/// token omits the class attribute. Fenced and indented blocks take the same
/// path (indented blocks carry an empty info string).
pub(crate) fn rewrite_code_blocks<'a>(root: &'a AstNode<'a>, renderer: &dyn CodeBlockRenderer) {
    let Some((info, literal)) = extract_code_block(root) else {
        let mut child = root.first_child();
        while let Some(next) = child {
            rewrite_code_blocks(next, renderer);
            child = next.next_sibling();
        }
        return;
    };

    let mut segments = info.split_whitespace();
    let language = segments.next().unwrap_or_default().to_string();
    let attrs = segments.collect::<Vec<_>>().join(" ");

    let inner = renderer.render_code(&literal, &language, &attrs);

    let mut html = String::with_capacity(inner.len() + 64);
    html.push_str("<pre><code");
    if !language.is_empty() {
        html.push_str(" class=\"language-");
        html.push_str(&escape_attribute(&language.to_ascii_lowercase()));
        html.push('"');
    }
    html.push('>');
    html.push_str(&inner);
    html.push_str("</code></pre>");

    let mut data = root.data.borrow_mut();
    data.value = NodeValue::HtmlBlock(NodeHtmlBlock {
        block_type: 0,
        literal: html,
    });
}

fn extract_code_block(node: &AstNode<'_>) -> Option<(String, String)> {
    let data = node.data.borrow();
    if let NodeValue::CodeBlock(block) = &data.value {
        let info = block.info.trim().to_string();
        let literal = block.literal.clone();
        Some((info, literal))
    } else {
        None
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\n' | '\r' | '\t' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}
