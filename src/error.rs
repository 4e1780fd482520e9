//! Error types for sitemapgen
//!
//! Building a sitemap never fails: setters clamp instead of rejecting.
//! Errors only come out of encoding and of writing the encoded bytes.

use thiserror::Error;

/// Result type alias using the sitemapgen Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sitemapgen operations
#[derive(Error, Debug)]
pub enum Error {
    /// The XML document could not be constructed
    #[error("encoding error: {0}")]
    Encode(String),

    /// Writing the encoded document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Encode(err.to_string())
    }
}
