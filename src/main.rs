//! Command-line interface for sitemapgen

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::Write;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use chrono::{DateTime, FixedOffset, Utc};
#[cfg(feature = "cli")]
use serde::Deserialize;
#[cfg(feature = "cli")]
use tracing::info;

#[cfg(feature = "cli")]
use sitemapgen::{exports, ChangeFrequency, Sitemap, Url};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "sitemapgen")]
#[command(author, version, about = "Sitemap XML generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a sitemap from URLs given on the command line
    Urls {
        /// Page locations, in output order
        #[arg(value_name = "URL", required = true)]
        urls: Vec<String>,

        /// Change frequency applied to every URL
        #[arg(short, long, value_enum)]
        changefreq: Option<ChangeFrequency>,

        /// Priority applied to every URL (clamped to 0.0-1.0)
        #[arg(short, long, allow_negative_numbers = true)]
        priority: Option<f32>,

        /// Last modification time (RFC 3339, or "now")
        #[arg(short, long)]
        lastmod: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a sitemap from a JSON array of URL records
    Build {
        /// Path to the JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One entry of the `build` input file
#[cfg(feature = "cli")]
#[derive(Deserialize, Debug)]
struct UrlRecord {
    loc: String,
    lastmod: Option<String>,
    changefreq: Option<ChangeFrequency>,
    priority: Option<f32>,
    #[serde(default)]
    alternates: Vec<AlternateRecord>,
}

#[cfg(feature = "cli")]
#[derive(Deserialize, Debug)]
struct AlternateRecord {
    hreflang: String,
    href: String,
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sitemapgen=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Urls {
            urls,
            changefreq,
            priority,
            lastmod,
            output,
        } => cmd_urls(urls, changefreq, priority, lastmod, output),
        Commands::Build { file, output } => cmd_build(file, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn cmd_urls(
    locations: Vec<String>,
    changefreq: Option<ChangeFrequency>,
    priority: Option<f32>,
    lastmod: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let lastmod = lastmod.as_deref().map(parse_lastmod).transpose()?;

    let mut sitemap = Sitemap::new();
    for location in locations {
        let mut url = Url::new(location);
        if let Some(time) = lastmod {
            url.set_last_modified(time);
        }
        if let Some(freq) = changefreq {
            url.set_change_frequency(freq);
        }
        if let Some(p) = priority {
            url.set_priority(p);
        }
        sitemap.add_url(url);
    }

    emit(&sitemap, output)
}

#[cfg(feature = "cli")]
fn cmd_build(file: PathBuf, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&file)?;
    let records: Vec<UrlRecord> = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid URL list in {}: {}", file.display(), e))?;

    let mut sitemap = Sitemap::new();
    for record in records {
        let mut url = Url::new(record.loc);
        if let Some(lastmod) = record.lastmod.as_deref() {
            url.set_last_modified(parse_lastmod(lastmod)?);
        }
        if let Some(freq) = record.changefreq {
            url.set_change_frequency(freq);
        }
        if let Some(p) = record.priority {
            url.set_priority(p);
        }
        for alternate in record.alternates {
            url.add_alternate(alternate.hreflang, alternate.href);
        }
        sitemap.add_url(url);
    }

    emit(&sitemap, output)
}

#[cfg(feature = "cli")]
fn parse_lastmod(value: &str) -> Result<DateTime<FixedOffset>, Box<dyn std::error::Error>> {
    if value.eq_ignore_ascii_case("now") {
        return Ok(Utc::now().into());
    }
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| format!("Invalid lastmod '{}': {}", value, e).into())
}

#[cfg(feature = "cli")]
fn emit(sitemap: &Sitemap, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let xml = sitemap.to_xml()?;

    if let Some(output_path) = output {
        exports::write_file(&output_path, &xml)?;
        info!(path = %output_path.display(), urls = sitemap.len(), "sitemap written");
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&xml)?;
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
