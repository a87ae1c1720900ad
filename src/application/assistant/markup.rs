//! HTML to plain text for extraction prompts.

use ego_tree::iter::Edge;
use scraper::{Html, Node};

/// Elements that start a new line of text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Elements whose text content is never shown.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Deepest element nesting handed to the HTML parser.
///
/// Tree construction slows quadratically with depth; deeper input is
/// stripped by a flat tag scan instead.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Strip markup from `input`, keeping readable text.
///
/// Block elements become line breaks, runs of whitespace collapse to one
/// space, and entities are decoded. Malformed markup is handled
/// best-effort by the HTML5 parser; text without `<` or `&` is only
/// trimmed. Input nested deeper than [`MAX_NESTING_DEPTH`] skips the
/// parser and has its tags removed as-is.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    if !input.contains('<') && !input.contains('&') {
        return input.trim().to_string();
    }

    let raw = if nesting_depth(input) > MAX_NESTING_DEPTH {
        remove_tags(input)
    } else {
        collect_text(&Html::parse_fragment(input))
    };

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Walk the parsed tree without recursion, so depth never touches the stack.
fn collect_text(fragment: &Html) -> String {
    let mut out = String::new();
    let mut hidden = 0usize;

    for edge in fragment.root_element().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()) => hidden += 1,
                Node::Element(el) if hidden == 0 && BLOCK_ELEMENTS.contains(&el.name()) => {
                    out.push('\n');
                }
                Node::Text(text) if hidden == 0 => out.push_str(text),
                _ => {}
            },
            Edge::Close(node) => match node.value() {
                Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()) => {
                    hidden = hidden.saturating_sub(1);
                }
                Node::Element(el) if hidden == 0 && BLOCK_ELEMENTS.contains(&el.name()) => {
                    out.push('\n');
                }
                _ => {}
            },
        }
    }
    out
}

/// Upper bound on element nesting from a single pass over the tags.
///
/// Unclosed non-void tags count as open for the rest of the input, so the
/// estimate errs high.
fn nesting_depth(input: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;

    for tag in tags(input) {
        let closing = tag.starts_with('/');
        let name = tag_name(tag.trim_start_matches('/'));
        if name.is_empty() || VOID_ELEMENTS.contains(&name.as_str()) {
            continue;
        }
        if closing {
            depth = depth.saturating_sub(1);
        } else if !tag.ends_with('/') {
            depth += 1;
            max = max.max(depth);
        }
    }
    max
}

/// Replace every `<...>` run with a line break.
fn remove_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        out.push('\n');
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Interiors of the `<...>` runs in `input`.
fn tags(input: &str) -> impl Iterator<Item = &str> {
    input.split('<').skip(1).filter_map(|chunk| chunk.split_once('>').map(|(tag, _)| tag))
}

fn tag_name(tag: &str) -> String {
    tag.chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}
