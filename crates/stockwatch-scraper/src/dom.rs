//! Checked DOM lookups shared by the site extractors.
//!
//! Every lookup that an extractor relies on returns an [`ExtractionError`]
//! instead of panicking, so a retailer changing its markup only fails the
//! check for that one URL.

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractionError;

fn selector(css: &'static str) -> Result<Selector, ExtractionError> {
    Selector::parse(css).map_err(|e| ExtractionError::InvalidSelector {
        selector: css,
        reason: e.to_string(),
    })
}

/// First element in the document matching `css`, if any.
pub fn find<'a>(doc: &'a Html, css: &'static str) -> Result<Option<ElementRef<'a>>, ExtractionError> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).next())
}

/// First element in the document matching `css`.
///
/// # Errors
///
/// [`ExtractionError::MissingElement`] when nothing matches.
pub fn require<'a>(doc: &'a Html, css: &'static str) -> Result<ElementRef<'a>, ExtractionError> {
    find(doc, css)?.ok_or(ExtractionError::MissingElement { selector: css })
}

/// All elements in the document matching `css`, in document order.
pub fn select_all<'a>(
    doc: &'a Html,
    css: &'static str,
) -> Result<Vec<ElementRef<'a>>, ExtractionError> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).collect())
}

/// First descendant of `element` matching `css`, if any.
pub fn find_within<'a>(
    element: ElementRef<'a>,
    css: &'static str,
) -> Result<Option<ElementRef<'a>>, ExtractionError> {
    let sel = selector(css)?;
    Ok(element.select(&sel).next())
}

/// First descendant of `element` matching `css`.
///
/// # Errors
///
/// [`ExtractionError::MissingElement`] when nothing matches.
pub fn require_within<'a>(
    element: ElementRef<'a>,
    css: &'static str,
) -> Result<ElementRef<'a>, ExtractionError> {
    find_within(element, css)?.ok_or(ExtractionError::MissingElement { selector: css })
}

/// Value of `attribute` on an element previously matched by `css`.
///
/// `css` is only carried into the error for context.
pub fn require_attr<'a>(
    element: ElementRef<'a>,
    css: &'static str,
    attribute: &'static str,
) -> Result<&'a str, ExtractionError> {
    element
        .value()
        .attr(attribute)
        .ok_or(ExtractionError::MissingAttribute {
            selector: css,
            attribute,
        })
}

/// Text content of `element` with runs of whitespace collapsed to one space.
#[must_use]
pub fn text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
