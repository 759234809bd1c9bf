use thiserror::Error;

/// Failure to obtain a page body.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

/// A page did not have the structure an extractor relies on.
///
/// Raised per URL; never fatal to the poll loop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("invalid selector \"{selector}\": {reason}")]
    InvalidSelector {
        selector: &'static str,
        reason: String,
    },

    #[error("expected element matching \"{selector}\" was not found")]
    MissingElement { selector: &'static str },

    #[error("element matching \"{selector}\" has no \"{attribute}\" attribute")]
    MissingAttribute {
        selector: &'static str,
        attribute: &'static str,
    },

    #[error("could not resolve link \"{href}\": {reason}")]
    InvalidLink { href: String, reason: String },
}
