//! URL entries of a sitemap
//!
//! A [`Url`] holds a location plus the optional `lastmod`, `changefreq`,
//! `priority` and alternate-language links. Every optional field is an
//! `Option`: an unset field is left out of the document entirely.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::fmt;

/// Relation type of every alternate-language link
pub const ALTERNATE: &str = "alternate";

/// How frequently the page at a location is likely to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// Changes on every access
    Always,
    /// Hourly
    Hourly,
    /// Daily
    Daily,
    /// Weekly
    Weekly,
    /// Monthly
    Monthly,
    /// Yearly
    Yearly,
    /// Archived content
    Never,
}

impl ChangeFrequency {
    /// All values, in protocol order
    pub const ALL: [ChangeFrequency; 7] = [
        ChangeFrequency::Always,
        ChangeFrequency::Hourly,
        ChangeFrequency::Daily,
        ChangeFrequency::Weekly,
        ChangeFrequency::Monthly,
        ChangeFrequency::Yearly,
        ChangeFrequency::Never,
    ];

    /// The token written inside `<changefreq>`
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alternate-language version of a URL, written as `<xhtml:link/>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    hreflang: String,
    href: String,
}

impl Alternate {
    /// Create an alternate link; neither value is validated
    pub fn new(hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            hreflang: hreflang.into(),
            href: href.into(),
        }
    }

    /// Relation type, always `alternate`
    pub fn rel(&self) -> &'static str {
        ALTERNATE
    }

    /// Language tag, e.g. `en` or `sv`
    pub fn hreflang(&self) -> &str {
        &self.hreflang
    }

    /// Target of the link
    pub fn href(&self) -> &str {
        &self.href
    }
}

/// A single `<url>` entry
#[derive(Debug, Clone, PartialEq)]
pub struct Url {
    location: String,
    last_modified: Option<DateTime<FixedOffset>>,
    change_frequency: Option<ChangeFrequency>,
    priority: Option<f32>,
    alternates: Option<Vec<Alternate>>,
}

impl Url {
    /// Create a URL entry with only its location set
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            last_modified: None,
            change_frequency: None,
            priority: None,
            alternates: None,
        }
    }

    /// Replace the location
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Set when the page was last modified
    ///
    /// Accepts any chrono timestamp convertible to a fixed offset, such as
    /// `DateTime<Utc>`. Every stored timestamp is written, including
    /// `0001-01-01T00:00:00Z`; only a URL whose last-modified time was never
    /// set has no `<lastmod>` element.
    pub fn set_last_modified(&mut self, time: impl Into<DateTime<FixedOffset>>) {
        self.last_modified = Some(time.into());
    }

    /// Set how often the page is expected to change
    pub fn set_change_frequency(&mut self, frequency: ChangeFrequency) {
        self.change_frequency = Some(frequency);
    }

    /// Set the priority, clamped to `0.0..=1.0`
    ///
    /// Out-of-range values are clamped silently. NaN is stored as `0.0`.
    pub fn set_priority(&mut self, priority: f32) {
        self.priority = Some(clamp_priority(priority));
    }

    /// Append an alternate-language link
    pub fn add_alternate(&mut self, hreflang: impl Into<String>, href: impl Into<String>) {
        self.alternates
            .get_or_insert_with(Vec::new)
            .push(Alternate::new(hreflang, href));
    }

    /// Builder form of [`Url::set_last_modified`]
    pub fn with_last_modified(mut self, time: impl Into<DateTime<FixedOffset>>) -> Self {
        self.set_last_modified(time);
        self
    }

    /// Builder form of [`Url::set_change_frequency`]
    pub fn with_change_frequency(mut self, frequency: ChangeFrequency) -> Self {
        self.set_change_frequency(frequency);
        self
    }

    /// Builder form of [`Url::set_priority`]
    pub fn with_priority(mut self, priority: f32) -> Self {
        self.set_priority(priority);
        self
    }

    /// Builder form of [`Url::add_alternate`]
    pub fn with_alternate(mut self, hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        self.add_alternate(hreflang, href);
        self
    }

    /// Location of the page
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Last modification time, if set
    pub fn last_modified(&self) -> Option<&DateTime<FixedOffset>> {
        self.last_modified.as_ref()
    }

    /// Change frequency, if set
    pub fn change_frequency(&self) -> Option<ChangeFrequency> {
        self.change_frequency
    }

    /// Clamped priority, if set
    pub fn priority(&self) -> Option<f32> {
        self.priority
    }

    /// Alternate links; `None` until the first one is added
    pub fn alternates(&self) -> Option<&[Alternate]> {
        self.alternates.as_deref()
    }

    /// Whether at least one alternate link will be written
    pub fn has_alternates(&self) -> bool {
        self.alternates.as_ref().is_some_and(|alts| !alts.is_empty())
    }
}

fn clamp_priority(priority: f32) -> f32 {
    // NaN and -0.0 both store 0.0
    if priority.is_nan() || priority <= 0.0 {
        0.0
    } else {
        priority.min(1.0)
    }
}
