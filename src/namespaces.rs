//! Sitemap XML namespaces
//!
//! A sitemap always declares the sitemap schema as its default namespace.
//! The XHTML namespace is only needed when `xhtml:link` alternates are
//! emitted, so its declaration is resolved per document.

/// Sitemap protocol namespace, declared as the default namespace of `urlset`
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// XHTML namespace used by alternate-language links
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Prefix bound to [`XHTML_NAMESPACE`]
pub const XHTML_PREFIX: &str = "xhtml";

/// How the `xmlns:xhtml` declaration on the root element is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlternateSupport {
    /// Declared iff some URL carries at least one alternate
    #[default]
    Auto,
    /// Always declared, even with no alternates yet
    Declared,
    /// Never declared
    Suppressed,
}

impl AlternateSupport {
    /// Resolve the declaration given whether any entry has alternates
    pub fn resolve(self, has_alternates: bool) -> Option<&'static str> {
        let declared = match self {
            AlternateSupport::Auto => has_alternates,
            AlternateSupport::Declared => true,
            AlternateSupport::Suppressed => false,
        };
        declared.then_some(XHTML_NAMESPACE)
    }
}

/// Qualified `prefix:local` name inside the XHTML namespace
pub fn xhtml_name(local_name: &str) -> String {
    format!("{}:{}", XHTML_PREFIX, local_name)
}
