use crate::error::Result;
use crate::parsers::{Document, Element};
use crate::results::{Finding, Status};

/// Inline images with this `src` prefix are never flagged
pub const DATA_IMAGE_PREFIX: &str = "data:image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltVerdict {
    NoImages,
    AllPresent { total: usize },
    /// Fewer than half of the images are missing alt text
    SomeMissing { missing: usize, total: usize },
    /// Half or more of the images are missing alt text
    MostMissing { missing: usize, total: usize },
}

impl AltVerdict {
    pub fn evaluate(missing: usize, total: usize) -> Self {
        if total == 0 {
            AltVerdict::NoImages
        } else if missing == 0 {
            AltVerdict::AllPresent { total }
        } else if 2 * missing < total {
            // missing < total / 2 without integer truncation
            AltVerdict::SomeMissing { missing, total }
        } else {
            AltVerdict::MostMissing { missing, total }
        }
    }

    pub fn status(self) -> Status {
        match self {
            AltVerdict::NoImages | AltVerdict::AllPresent { .. } => Status::Good,
            AltVerdict::SomeMissing { .. } => Status::Warning,
            AltVerdict::MostMissing { .. } => Status::Bad,
        }
    }

    pub fn message(self) -> String {
        match self {
            AltVerdict::NoImages => "No images to check".to_string(),
            AltVerdict::AllPresent { .. } => "All images have alt attributes".to_string(),
            AltVerdict::SomeMissing { missing, total } | AltVerdict::MostMissing { missing, total } => {
                format!(
                    "{} out of {} images are missing alt attributes",
                    missing, total
                )
            }
        }
    }

    pub fn content(self) -> String {
        match self {
            AltVerdict::NoImages => "No images found on page".to_string(),
            AltVerdict::AllPresent { total } => {
                format!("{} out of {} images have alt tags", total, total)
            }
            AltVerdict::SomeMissing { missing, total } | AltVerdict::MostMissing { missing, total } => {
                format!("{} out of {} images have alt tags", total - missing, total)
            }
        }
    }
}

/// An image lacks alt text only when the attribute is absent. `alt=""` marks
/// a decorative image and is accepted. Images without a source and inline
/// `data:image` URIs are skipped.
pub fn is_missing_alt(img: &Element) -> bool {
    let src = img.attr("src").unwrap_or_default();
    img.attr("alt").is_none() && !src.is_empty() && !src.starts_with(DATA_IMAGE_PREFIX)
}

/// Checks `<img>` elements for alt attributes
pub fn check(doc: &impl Document) -> Result<Finding> {
    let images = doc.find_all("img")?;
    let total = images.len();
    let missing = images.iter().filter(|img| is_missing_alt(img)).count();

    let verdict = AltVerdict::evaluate(missing, total);
    ::log::debug!("Image alt check: {} of {} images missing alt", missing, total);

    Ok(
        Finding::new(verdict.content(), verdict.status(), verdict.message())
            .with_count(total)
            .with_missing_count(missing),
    )
}
