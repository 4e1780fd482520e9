//! CLI integration tests
//!
//! These tests run the built `sitemapgen` binary.

#![cfg(feature = "cli")]

use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sitemapgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sitemapgen"))
}

// ============================================================================
// Urls Command Tests
// ============================================================================

#[test]
fn test_cli_urls_to_stdout() {
    let output = sitemapgen()
        .args([
            "urls",
            "--changefreq", "weekly",
            "--priority", "2",
            "--lastmod", "2000-01-01T13:37:00Z",
            "http://test.test/0",
            "http://test.test/1",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "urls should succeed");
    assert!(stdout.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert_eq!(stdout.matches("<priority>1</priority>").count(), 2);
    assert_eq!(stdout.matches("<changefreq>weekly</changefreq>").count(), 2);
    assert_eq!(stdout.matches("<lastmod>2000-01-01T13:37:00Z</lastmod>").count(), 2);
}

#[test]
fn test_cli_urls_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sitemap.xml");

    let output = sitemapgen()
        .args(["urls", "--output", path.to_str().unwrap(), "http://test.test/"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "urls --output should succeed");
    assert!(output.stdout.is_empty(), "nothing should go to stdout");

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n   \
         <url>\n      <loc>http://test.test/</loc>\n   </url>\n\
         </urlset>"
    );
}

#[test]
fn test_cli_urls_invalid_lastmod() {
    let output = sitemapgen()
        .args(["urls", "--lastmod", "yesterday", "http://test.test/"])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "invalid lastmod should fail");
    assert!(stderr.contains("Invalid lastmod 'yesterday'"));
}

#[test]
fn test_cli_urls_invalid_changefreq() {
    let output = sitemapgen()
        .args(["urls", "--changefreq", "sometimes", "http://test.test/"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "unknown change frequency should be rejected");
}

// ============================================================================
// Build Command Tests
// ============================================================================

#[test]
fn test_cli_build_from_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("urls.json");
    std::fs::write(
        &input,
        r#"[
            {
                "loc": "http://test.test/",
                "lastmod": "2000-01-01T13:37:00Z",
                "changefreq": "daily",
                "priority": 0.8,
                "alternates": [
                    {"hreflang": "en", "href": "http://test.test/en/"},
                    {"hreflang": "sv", "href": "http://test.test/sv/"}
                ]
            },
            {"loc": "http://test.test/about"}
        ]"#,
    )
    .unwrap();

    let output = sitemapgen()
        .args(["build", input.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "build should succeed");
    assert!(stdout.contains("xmlns:xhtml=\"http://www.w3.org/1999/xhtml\""));
    assert!(stdout.contains("<changefreq>daily</changefreq>"));
    assert!(stdout.contains("<priority>0.8</priority>"));
    assert!(stdout.contains(
        "<xhtml:link rel=\"alternate\" hreflang=\"sv\" href=\"http://test.test/sv/\"/>"
    ));
    assert!(stdout.contains("<url>\n      <loc>http://test.test/about</loc>\n   </url>"));
}

#[test]
fn test_cli_build_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("urls.json");
    std::fs::write(&input, r#"[{"location": "http://test.test/"}]"#).unwrap();

    let output = sitemapgen()
        .args(["build", input.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "missing loc should fail");
    assert!(stderr.contains("Invalid URL list"));
}

#[test]
fn test_cli_build_missing_file() {
    let output = sitemapgen()
        .args(["build", "/nonexistent/urls.json"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "missing input should fail");
}
