//! HTML to markdown rendering.
//!
//! Picks the post body with the first matching CSS selector, drops
//! non-content blocks and hands the rest to `html2md`.

use crate::core::{ConvertedDocument, FetchedPage, MarkdownRenderer};
use crate::utils::error::ConversionError;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

pub const DEFAULT_SELECTORS: [&str; 3] = ["article", "main", "body"];

static NON_CONTENT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script, style, noscript").expect("non-content selector is valid")
});

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("blank-run pattern is valid"));

pub struct Html2MdRenderer {
    selectors: Vec<(String, Selector)>,
}

impl Html2MdRenderer {
    pub fn new<S: AsRef<str>>(selectors: &[S]) -> Result<Self, ConversionError> {
        let selectors = selectors
            .iter()
            .map(|raw| {
                let raw = raw.as_ref();
                Selector::parse(raw)
                    .map(|selector| (raw.to_string(), selector))
                    .map_err(|e| ConversionError::Selector {
                        selector: raw.to_string(),
                        reason: format!("{:?}", e),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { selectors })
    }

    /// Outer HTML of the first selector match that carries text, or the whole page.
    /// Script, style and noscript nodes are detached first so they never count as text.
    fn select_content(&self, html: &str) -> String {
        let mut document = Html::parse_document(html);
        strip_non_content(&mut document);

        for (raw, selector) in &self.selectors {
            let found = document
                .select(selector)
                .find(|el| el.text().any(|t| !t.trim().is_empty()));
            if let Some(element) = found {
                tracing::debug!("Using content selector '{}'", raw);
                return element.html();
            }
        }

        tracing::debug!("No content selector matched, converting the whole page");
        document.root_element().html()
    }
}

fn strip_non_content(document: &mut Html) {
    let ids: Vec<_> = document.select(&NON_CONTENT).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

impl Default for Html2MdRenderer {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_SELECTORS
                .iter()
                .filter_map(|raw| Selector::parse(raw).ok().map(|s| (raw.to_string(), s)))
                .collect(),
        }
    }
}

pub fn tidy_markdown(markdown: &str) -> String {
    BLANK_RUNS.replace_all(markdown, "\n\n").trim().to_string()
}

impl MarkdownRenderer for Html2MdRenderer {
    fn render(&self, page: &FetchedPage) -> Result<ConvertedDocument, ConversionError> {
        let content = self.select_content(&page.html);
        let markdown = tidy_markdown(&html2md::parse_html(&content));

        if markdown.is_empty() {
            return Err(ConversionError::EmptyDocument {
                url: page.url.clone(),
            });
        }

        Ok(ConvertedDocument::new(markdown))
    }
}
