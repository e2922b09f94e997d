use crate::error::{AuditError, Result};
use crate::parsers::{Document, Element};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, parse_document};
use scraper::{ElementRef, Html, HtmlTreeSink, Selector};

/// A page parsed with `scraper`
///
/// `scraper::Html` is not `Send`, so keep this value out of async state and
/// drop it before the next `.await`.
pub struct HtmlDocument {
    doc: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document. Parsing is lenient and never fails;
    /// malformed markup is repaired the way a browser would.
    ///
    /// Scripting is off, so `<noscript>` content is parsed as markup and the
    /// fallback images inside it are visible to the checks.
    pub fn parse(html: &str) -> Self {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let doc = parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(html);
        ::log::debug!("Parsed HTML document ({} bytes)", html.len());
        Self { doc }
    }
}

impl Document for HtmlDocument {
    fn find_first(&self, tag: &str) -> Result<Option<Element>> {
        let selector = tag_selector(tag)?;
        Ok(self.doc.select(&selector).next().map(snapshot))
    }

    fn find_all(&self, tag: &str) -> Result<Vec<Element>> {
        let selector = tag_selector(tag)?;
        let elements = self.doc.select(&selector).map(snapshot).collect::<Vec<_>>();
        ::log::debug!("Found {} <{}> elements", elements.len(), tag);
        Ok(elements)
    }
}

fn tag_selector(tag: &str) -> Result<Selector> {
    Selector::parse(tag)
        .map_err(|e| AuditError::analysis(format!("invalid selector for tag '{}': {:?}", tag, e)))
}

fn snapshot(element: ElementRef<'_>) -> Element {
    let value = element.value();
    let mut out = Element::new(value.name()).with_text(element.text().collect::<String>());
    for (name, attr) in value.attrs() {
        out = out.with_attr(name, attr);
    }
    out
}
