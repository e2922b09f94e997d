use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Warning,
    Bad,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Good => "good",
            Status::Warning => "warning",
            Status::Bad => "bad",
        };
        f.write_str(label)
    }
}

/// Graded result of one SEO signal check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Excerpt of what was found on the page
    pub content: String,

    pub status: Status,

    /// Human-readable explanation of the status
    pub message: String,

    /// Number of matching elements (headings and images only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Number of images without an alt attribute
    #[serde(
        default,
        rename = "missing_alt",
        skip_serializing_if = "Option::is_none"
    )]
    pub missing_count: Option<usize>,
}

impl Finding {
    pub fn new(content: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            status,
            message: message.into(),
            count: None,
            missing_count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_missing_count(mut self, missing_count: usize) -> Self {
        self.missing_count = Some(missing_count);
        self
    }
}

/// All findings for one page plus the aggregate score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub title: Finding,
    pub meta_description: Finding,
    pub h1_tags: Finding,
    pub img_alt_tags: Finding,
    pub score: u8,
}

impl Report {
    /// Findings paired with a display label, in report order
    pub fn findings(&self) -> [(&'static str, &Finding); 4] {
        [
            ("Title Tag", &self.title),
            ("Meta Description", &self.meta_description),
            ("H1 Tags", &self.h1_tags),
            ("Image Alt Tags", &self.img_alt_tags),
        ]
    }

    /// Plain-text rendering used by the `check` command
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (label, finding) in self.findings() {
            out.push_str(&format!("{} [{}]\n", label, finding.status));
            out.push_str(&format!("  {}\n", finding.content));
            out.push_str(&format!("  {}\n", finding.message));
        }
        out.push_str(&format!("Score: {}/100\n", self.score));
        out
    }
}
