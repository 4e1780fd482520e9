//! The sitemap document
//!
//! A [`Sitemap`] is an ordered list of [`Url`] entries. Entries are written
//! in insertion order; duplicates and malformed locations are kept as given.

use std::path::Path;

use crate::encoder::Encoder;
use crate::error::Result;
use crate::exports;
use crate::namespaces::{AlternateSupport, SITEMAP_NAMESPACE};
use crate::urls::Url;

/// In-memory sitemap, encoded on demand with [`Sitemap::to_xml`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitemap {
    urls: Vec<Url>,
    alternate_support: AlternateSupport,
}

impl Sitemap {
    /// Create an empty sitemap
    pub fn new() -> Self {
        Self::default()
    }

    /// Default namespace of the `urlset` element
    pub fn namespace(&self) -> &'static str {
        SITEMAP_NAMESPACE
    }

    /// Append a URL entry
    ///
    /// A URL with alternates lifts an earlier
    /// [`remove_alternate_support`](Sitemap::remove_alternate_support).
    pub fn add_url(&mut self, url: Url) {
        if url.has_alternates() && self.alternate_support == AlternateSupport::Suppressed {
            self.alternate_support = AlternateSupport::Auto;
        }
        self.urls.push(url);
    }

    /// Declare the XHTML namespace even if no URL has alternates
    pub fn add_alternate_support(&mut self) {
        self.alternate_support = AlternateSupport::Declared;
    }

    /// Leave the XHTML namespace undeclared
    ///
    /// This does not drop alternate links from the output. While any entry
    /// still carries alternates, [`to_xml`](Sitemap::to_xml) and
    /// [`write_to_file`](Sitemap::write_to_file) return
    /// [`Error::Encode`](crate::Error::Encode) instead of writing a document
    /// with an unbound `xhtml:` prefix. Adding a URL with alternates
    /// afterwards switches back to [`AlternateSupport::Auto`].
    pub fn remove_alternate_support(&mut self) {
        self.alternate_support = AlternateSupport::Suppressed;
    }

    /// Go back to declaring the XHTML namespace only when needed
    pub fn reset_alternate_support(&mut self) {
        self.alternate_support = AlternateSupport::Auto;
    }

    /// Current declaration mode
    pub fn alternate_support(&self) -> AlternateSupport {
        self.alternate_support
    }

    /// The `xmlns:xhtml` value the root element will carry, if any
    pub fn xhtml_namespace(&self) -> Option<&'static str> {
        self.alternate_support.resolve(self.has_alternates())
    }

    /// Whether any entry will write alternate links
    pub fn has_alternates(&self) -> bool {
        self.urls.iter().any(Url::has_alternates)
    }

    /// Entries in document order
    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the sitemap has no entries
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Encode the sitemap with the default encoder settings
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        Encoder::default().encode(self)
    }

    /// Encode the sitemap and write it to `path`
    ///
    /// Encoding completes in memory first; nothing is written if it fails.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let output = self.to_xml()?;
        exports::write_file(path, &output)
    }
}

impl Extend<Url> for Sitemap {
    fn extend<I: IntoIterator<Item = Url>>(&mut self, iter: I) {
        for url in iter {
            self.add_url(url);
        }
    }
}
