pub mod html;


use crate::error::Result;
use std::collections::HashMap;

pub use html::HtmlDocument;

/// Owned snapshot of a single element: its tag, attributes and text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attrs: HashMap<String, String>,
    text: String,
}

impl Element {
    /// Creates an element with no attributes and no text
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Sets the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Tag name, lowercased by the parser
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value. `None` when the attribute is absent, `Some("")` when it
    /// is present but empty.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Concatenated text of all descendant text nodes, untrimmed
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Queries a checker needs over parsed page markup
pub trait Document {
    /// First element with the given tag name, in document order
    fn find_first(&self, tag: &str) -> Result<Option<Element>>;

    /// All elements with the given tag name, in document order
    fn find_all(&self, tag: &str) -> Result<Vec<Element>>;
}
