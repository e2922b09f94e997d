use crate::checks::{headings, images, meta, title};
use crate::error::Result;
use crate::parsers::{Document, HtmlDocument};
use crate::results::Report;
use crate::score;

/// Runs all four checks on a parsed page and scores the result
///
/// Checks are independent; a missing element is graded, not treated as an
/// error. Only a failure inside the document queries aborts the analysis.
pub fn analyze(doc: &impl Document) -> Result<Report> {
    let title = title::check(doc)?;
    let meta_description = meta::check(doc)?;
    let h1_tags = headings::check(doc)?;
    let img_alt_tags = images::check(doc)?;

    let score = score::aggregate([&title, &meta_description, &h1_tags, &img_alt_tags]);

    Ok(Report {
        title,
        meta_description,
        h1_tags,
        img_alt_tags,
        score,
    })
}

/// Parses raw markup and analyzes it. The parsed tree is dropped before
/// returning, so this is safe to call from async code.
pub fn analyze_html(html: &str) -> Result<Report> {
    let doc = HtmlDocument::parse(html);
    analyze(&doc)
}
