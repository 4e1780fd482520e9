//! # sitemapgen
//!
//! Build XML documents for the [sitemap protocol](https://www.sitemaps.org/protocol.html).
//!
//! ## Features
//!
//! - `loc`, `lastmod`, `changefreq` and `priority` per URL, unset fields omitted
//! - Priority clamped to `0.0..=1.0`
//! - hreflang alternates as self-closing `<xhtml:link/>` elements, with the
//!   XHTML namespace declared only when needed
//! - Deterministic, pretty-printed output (3-space indent)
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use sitemapgen::{ChangeFrequency, Sitemap, Url};
//!
//! let mut sitemap = Sitemap::new();
//!
//! let mut url = Url::new("http://example.com/");
//! url.set_change_frequency(ChangeFrequency::Weekly);
//! url.set_priority(0.5);
//! url.set_last_modified(Utc.with_ymd_and_hms(2000, 1, 1, 13, 37, 0).unwrap());
//! url.add_alternate("sv", "http://example.com/sv/");
//! sitemap.add_url(url);
//!
//! let xml = String::from_utf8(sitemap.to_xml()?).unwrap();
//! assert!(xml.contains("<priority>0.5</priority>"));
//! assert!(xml.contains(r#"<xhtml:link rel="alternate" hreflang="sv" href="http://example.com/sv/"/>"#));
//! # Ok::<(), sitemapgen::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod namespaces;

pub mod urls;
pub mod sitemap;

pub mod encoder;
pub mod exports;

// Re-exports for convenience
pub use encoder::{Encoder, EncoderConfig};
pub use error::{Error, Result};
pub use namespaces::{AlternateSupport, SITEMAP_NAMESPACE, XHTML_NAMESPACE};
pub use sitemap::Sitemap;
pub use urls::{Alternate, ChangeFrequency, Url};

/// Version of the sitemapgen library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
