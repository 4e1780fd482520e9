//! Sitemap XML encoding
//!
//! Writes a [`Sitemap`] with quick-xml's indenting writer. Alternate links
//! are written as `Event::Empty`, so they come out self-closing
//! (`<xhtml:link .../>`) without any post-processing of the text.
//!
//! Characters that XML 1.0 cannot carry at all (most C0 controls, U+FFFE,
//! U+FFFF) are written as U+FFFD, so the output always parses.

use std::borrow::Cow;

use chrono::SecondsFormat;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::namespaces::{xhtml_name, XHTML_PREFIX};
use crate::sitemap::Sitemap;
use crate::urls::{Alternate, Url};

/// Layout settings for the encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Byte repeated for each indentation step
    pub indent_char: u8,
    /// Number of `indent_char` per nesting level
    pub indent_size: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 3,
        }
    }
}

impl EncoderConfig {
    /// Create a configuration with the default 3-space indent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation character and width
    pub fn with_indent(mut self, indent_char: u8, indent_size: usize) -> Self {
        self.indent_char = indent_char;
        self.indent_size = indent_size;
        self
    }
}

/// Turns a [`Sitemap`] into XML bytes
///
/// Encoding only reads the sitemap; the same input always yields the same
/// bytes.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder with the given layout
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Get the encoder configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode the whole document, XML declaration included
    pub fn encode(&self, sitemap: &Sitemap) -> Result<Vec<u8>> {
        let xhtml_namespace = sitemap.xhtml_namespace();
        if xhtml_namespace.is_none() && sitemap.has_alternates() {
            warn!("alternate links present but the xhtml namespace is suppressed");
            return Err(Error::Encode(format!(
                "alternate links need the '{}' namespace prefix, which is not declared",
                XHTML_PREFIX
            )));
        }

        let mut writer = Writer::new_with_indent(
            Vec::new(),
            self.config.indent_char,
            self.config.indent_size,
        );

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", sitemap.namespace()));
        if let Some(namespace) = xhtml_namespace {
            let attr = format!("xmlns:{}", XHTML_PREFIX);
            urlset.push_attribute((attr.as_str(), namespace));
        }
        writer.write_event(Event::Start(urlset))?;

        for url in sitemap.urls() {
            write_url(&mut writer, url)?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        let output = writer.into_inner();
        debug!(urls = sitemap.len(), bytes = output.len(), "encoded sitemap");
        Ok(output)
    }
}

fn write_url(writer: &mut Writer<Vec<u8>>, url: &Url) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;

    write_text_element(writer, "loc", url.location())?;

    if let Some(time) = url.last_modified() {
        let lastmod = time.to_rfc3339_opts(SecondsFormat::Secs, true);
        write_text_element(writer, "lastmod", &lastmod)?;
    }

    if let Some(frequency) = url.change_frequency() {
        write_text_element(writer, "changefreq", frequency.as_str())?;
    }

    if let Some(priority) = url.priority() {
        write_text_element(writer, "priority", &priority.to_string())?;
    }

    for alternate in url.alternates().unwrap_or_default() {
        write_alternate(writer, alternate)?;
    }

    writer.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(&replace_non_xml_chars(text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_alternate(writer: &mut Writer<Vec<u8>>, alternate: &Alternate) -> Result<()> {
    let mut link = BytesStart::new(xhtml_name("link"));
    link.push_attribute(("rel", alternate.rel()));
    link.push_attribute(("hreflang", &*replace_non_xml_chars(alternate.hreflang())));
    link.push_attribute(("href", &*replace_non_xml_chars(alternate.href())));
    writer.write_event(Event::Empty(link))?;
    Ok(())
}

/// Whether `c` matches the XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Replace characters outside `Char` with U+FFFD
fn replace_non_xml_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
                .collect(),
        )
    }
}
