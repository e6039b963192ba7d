use postforge_core::error::AppError;
use postforge_core::traits::Extractor;
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

/// Tags whose subtrees never hold article text.
const BOILERPLATE_TAGS: &[&str] = &["script", "style", "nav", "header", "footer"];

/// Candidate article containers, tried in order. First match wins.
const CONTENT_SELECTORS: &[&str] = &["article", "#content", "#main"];

/// Article text extractor backed by the `scraper` crate.
///
/// Picks the most likely article node by a fixed priority (an `<article>`
/// element, then `#content`, then `#main`, then the whole document),
/// drops boilerplate subtrees, and flattens what is left to plain text.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArticleExtractor;

impl ArticleExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for ArticleExtractor {
    fn extract(&self, html: &str) -> Result<String, AppError> {
        let document = Html::parse_document(html);
        let main_content = select_main_content(&document);

        let mut raw = String::new();
        collect_text(*main_content, &mut raw);

        let text = tidy_lines(&raw);
        if text.is_empty() {
            return Err(AppError::EmptyExtraction);
        }
        Ok(text)
    }
}

fn select_main_content(document: &Html) -> ElementRef<'_> {
    for selector_str in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                return element;
            }
        }
    }
    document.root_element()
}

/// Depth-first text collection. `ElementRef::text()` would include text
/// inside `<script>` and friends, so boilerplate subtrees are skipped here.
fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(&text),
        Node::Element(element) if BOILERPLATE_TAGS.contains(&element.name()) => {}
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

/// Collapse raw extracted text into newline-separated phrases: trim each
/// line, split on double-space runs into chunks, drop empty chunks.
fn tidy_lines(raw: &str) -> String {
    raw.lines()
        .flat_map(|line| line.trim().split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
