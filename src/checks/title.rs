use crate::checks::char_len;
use crate::error::Result;
use crate::parsers::Document;
use crate::results::{Finding, Status};

/// Titles shorter than this are flagged
pub const TITLE_MIN_LEN: usize = 10;
/// Titles longer than this are flagged
pub const TITLE_MAX_LEN: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleVerdict {
    Missing,
    TooShort,
    TooLong,
    Good,
}

impl TitleVerdict {
    /// Grades an already trimmed title
    pub fn evaluate(title: &str) -> Self {
        let len = char_len(title);
        if len == 0 {
            TitleVerdict::Missing
        } else if len < TITLE_MIN_LEN {
            TitleVerdict::TooShort
        } else if len > TITLE_MAX_LEN {
            TitleVerdict::TooLong
        } else {
            TitleVerdict::Good
        }
    }

    pub fn status(self) -> Status {
        match self {
            TitleVerdict::Missing => Status::Bad,
            TitleVerdict::TooShort | TitleVerdict::TooLong => Status::Warning,
            TitleVerdict::Good => Status::Good,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            TitleVerdict::Missing => "Missing title tag",
            TitleVerdict::TooShort => "Title is too short (less than 10 characters)",
            TitleVerdict::TooLong => "Title is too long (more than 60 characters)",
            TitleVerdict::Good => "Title length is good",
        }
    }
}

/// Checks the text of the first `<title>` element
pub fn check(doc: &impl Document) -> Result<Finding> {
    let title = doc
        .find_first("title")?
        .map(|el| el.text().trim().to_string())
        .unwrap_or_default();

    let verdict = TitleVerdict::evaluate(&title);
    ::log::debug!("Title check: {:?} ({} chars)", verdict, char_len(&title));

    Ok(Finding::new(title, verdict.status(), verdict.message()))
}
