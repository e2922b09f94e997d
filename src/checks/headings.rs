use crate::error::Result;
use crate::parsers::Document;
use crate::results::{Finding, Status};

/// Content reported when the page has no `<h1>`
pub const NO_HEADINGS: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingVerdict {
    Absent,
    Single,
    Multiple(usize),
}

impl HeadingVerdict {
    pub fn evaluate(count: usize) -> Self {
        match count {
            0 => HeadingVerdict::Absent,
            1 => HeadingVerdict::Single,
            n => HeadingVerdict::Multiple(n),
        }
    }

    pub fn status(self) -> Status {
        match self {
            HeadingVerdict::Absent => Status::Bad,
            HeadingVerdict::Single => Status::Good,
            HeadingVerdict::Multiple(_) => Status::Warning,
        }
    }

    pub fn message(self) -> String {
        match self {
            HeadingVerdict::Absent => "No H1 tag found".to_string(),
            HeadingVerdict::Single => "One H1 tag found (recommended)".to_string(),
            HeadingVerdict::Multiple(n) => {
                format!("Multiple H1 tags found ({}). Consider using only one.", n)
            }
        }
    }
}

/// Checks how many `<h1>` elements the page has
pub fn check(doc: &impl Document) -> Result<Finding> {
    let texts = doc
        .find_all("h1")?
        .iter()
        .map(|el| el.text().trim().to_string())
        .collect::<Vec<_>>();

    let count = texts.len();
    let verdict = HeadingVerdict::evaluate(count);
    let content = if texts.is_empty() {
        NO_HEADINGS.to_string()
    } else {
        texts.join(", ")
    };

    Ok(Finding::new(content, verdict.status(), verdict.message()).with_count(count))
}
