use crate::checks::char_len;
use crate::error::Result;
use crate::parsers::Document;
use crate::results::{Finding, Status};

pub const DESCRIPTION_MIN_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionVerdict {
    Missing,
    TooShort,
    TooLong,
    Good,
}

impl DescriptionVerdict {
    /// Grades an already trimmed description
    pub fn evaluate(description: &str) -> Self {
        let len = char_len(description);
        if len == 0 {
            DescriptionVerdict::Missing
        } else if len < DESCRIPTION_MIN_LEN {
            DescriptionVerdict::TooShort
        } else if len > DESCRIPTION_MAX_LEN {
            DescriptionVerdict::TooLong
        } else {
            DescriptionVerdict::Good
        }
    }

    pub fn status(self) -> Status {
        match self {
            DescriptionVerdict::Missing => Status::Bad,
            DescriptionVerdict::TooShort | DescriptionVerdict::TooLong => Status::Warning,
            DescriptionVerdict::Good => Status::Good,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DescriptionVerdict::Missing => "Missing meta description",
            DescriptionVerdict::TooShort => {
                "Meta description is too short (less than 50 characters)"
            }
            DescriptionVerdict::TooLong => {
                "Meta description is too long (more than 160 characters)"
            }
            DescriptionVerdict::Good => "Meta description length is good",
        }
    }
}

/// Checks the `content` of the first `<meta name="description">`
pub fn check(doc: &impl Document) -> Result<Finding> {
    let description = doc
        .find_all("meta")?
        .into_iter()
        .find(|el| el.attr("name") == Some("description"))
        .map(|el| el.attr("content").unwrap_or_default().trim().to_string())
        .unwrap_or_default();

    let verdict = DescriptionVerdict::evaluate(&description);
    ::log::debug!(
        "Meta description check: {:?} ({} chars)",
        verdict,
        char_len(&description)
    );

    Ok(Finding::new(description, verdict.status(), verdict.message()))
}
