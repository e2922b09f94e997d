//! SEO signal checkers
//!
//! Each checker reads one signal from a [`Document`](crate::parsers::Document)
//! and grades it as a [`Finding`](crate::results::Finding). Checkers are pure
//! and independent of each other. Each one first reduces the page to a small
//! verdict enum, and the verdict alone decides the status and message.

pub mod headings;
pub mod images;
pub mod meta;
pub mod title;

/// Length in characters, not bytes
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
