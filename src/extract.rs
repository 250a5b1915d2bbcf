use std::sync::LazyLock;

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{Html, Selector};

use crate::normalize::normalize_text;

/// The element that wraps a hymn's translation on the curated pages.
static HYMN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.box.hymn").unwrap());

/// Elements whose content never belongs to the translation text.
const SKIP_TAGS: &[&str] = &["script", "style", "template"];

/// Extract the translation text from a curated hymn page.
///
/// Returns an empty string when the page has no `div.box.hymn` container.
/// Paragraph ends and `<br>` become newlines, all other markup is dropped,
/// and entities come out decoded from the HTML5 parser.
pub fn extract_translation(html: &str) -> String {
    let doc = Html::parse_document(html);
    let Some(container) = doc.select(&HYMN_SELECTOR).next() else {
        return String::new();
    };

    let mut raw = String::with_capacity(html.len());
    for child in container.children() {
        flatten(child, &mut raw);
    }
    normalize_text(&raw)
}

/// Append the text of `node` to `out`, turning block structure into newlines.
fn flatten(node: NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Element(el) => {
            let tag = el.name();
            if SKIP_TAGS.contains(&tag) {
                return;
            }
            if tag == "br" {
                out.push('\n');
                return;
            }
            for child in node.children() {
                flatten(child, out);
            }
            if tag == "p" {
                out.push('\n');
            }
        }
        Node::Text(text) => out.push_str(text.text.as_ref()),
        // Comments, doctypes, processing instructions
        _ => {}
    }
}
