//! Build the downloads section of the site.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::artifact::{DownloadRow, DownloadsTable};
use crate::platform::Visitor;
use crate::render::{HtmlView, render_into};
use crate::source::ArtifactSource;

/// Output format of the downloads command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// HTML fragment with the site's downloads markup.
    #[default]
    Html,
    /// Machine-readable table for other steps of the site build.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Unknown output format: {}. Expected html or json.", s),
        }
    }
}

/// Options for the downloads command.
#[derive(Debug, Clone)]
pub struct DownloadsOptions {
    /// Text of the download buttons.
    pub label: String,
    pub format: OutputFormat,
    /// Write to this file instead of stdout.
    pub output: Option<PathBuf>,
}

/// JSON document shape for `--format json`.
#[derive(Serialize)]
struct JsonDocument<'a> {
    rows: &'a [DownloadRow],
    recommended: Option<&'a DownloadRow>,
}

/// Build and emit the downloads section for the given visitor.
///
/// A failed fetch is logged and rendered as the empty section: the page
/// must stay functional without the downloads feature, so the command
/// still succeeds.
#[tracing::instrument(skip(source, options))]
pub async fn downloads<S: ArtifactSource>(
    source: &S,
    visitor: Visitor,
    options: &DownloadsOptions,
) -> Result<()> {
    let records = match source.list_artifacts().await {
        Ok(records) => records,
        Err(e) => {
            warn!(
                "Failed to fetch downloads listing from {}: {}",
                source.downloads_url(),
                e
            );
            Vec::new()
        }
    };
    debug!("Fetched {} artifact record(s)", records.len());

    let table = DownloadsTable::build(&records, visitor);

    let rendered = match options.format {
        OutputFormat::Html => {
            let mut view = HtmlView::new(&options.label);
            render_into(&table, &mut view);
            view.into_fragment()
        }
        OutputFormat::Json => render_json(&table)?,
    };

    match &options.output {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("Failed to write downloads section to {:?}", path))?,
        None => print!("{}", rendered),
    }

    Ok(())
}

fn render_json(table: &DownloadsTable) -> Result<String> {
    let document = JsonDocument {
        rows: &table.rows,
        recommended: table.recommended(),
    };
    let mut json = serde_json::to_string_pretty(&document)
        .context("Failed to serialize downloads table")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ReleaseArtifact;
    use crate::platform::{Arch, Platform};
    use tempfile::tempdir;

    use crate::source::MockArtifactSource;

    fn windows_x64() -> Visitor {
        Visitor {
            platform: Platform::Windows,
            arch: Arch::X64,
        }
    }

    fn options(format: OutputFormat, output: Option<PathBuf>) -> DownloadsOptions {
        DownloadsOptions {
            label: "Download".into(),
            format,
            output,
        }
    }

    fn listing() -> Vec<ReleaseArtifact> {
        vec![
            ReleaseArtifact {
                name: "grail-1.2.0.exe".into(),
                download_url: "https://cdn.example.com/grail-1.2.0.exe".into(),
            },
            ReleaseArtifact {
                name: "grail-1.2.0-64.exe".into(),
                download_url: "https://cdn.example.com/grail-1.2.0-64.exe".into(),
            },
            ReleaseArtifact {
                name: "grail-1.3.0.dmg".into(),
                download_url: "https://cdn.example.com/grail-1.3.0.dmg".into(),
            },
        ]
    }

    #[tokio::test]
    async fn test_downloads_writes_html_fragment() {
        let mut source = MockArtifactSource::new();
        source
            .expect_list_artifacts()
            .returning(|| Ok(listing()));

        let dir = tempdir().unwrap();
        let path = dir.path().join("downloads.html");

        downloads(
            &source,
            windows_x64(),
            &options(OutputFormat::Html, Some(path.clone())),
        )
        .await
        .unwrap();

        let fragment = std::fs::read_to_string(&path).unwrap();
        assert!(fragment.contains("<span id=\"grail_version\">1.2.0</span>"));
        assert!(fragment.contains("href=\"https://cdn.example.com/grail-1.2.0-64.exe\""));
        assert_eq!(fragment.matches("<tr>").count(), 3);
    }

    #[tokio::test]
    async fn test_downloads_json_format() {
        let mut source = MockArtifactSource::new();
        source
            .expect_list_artifacts()
            .returning(|| Ok(listing()));

        let dir = tempdir().unwrap();
        let path = dir.path().join("downloads.json");

        downloads(
            &source,
            windows_x64(),
            &options(OutputFormat::Json, Some(path.clone())),
        )
        .await
        .unwrap();

        let document: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(document["rows"].as_array().unwrap().len(), 3);
        assert_eq!(document["rows"][1]["matched"], true);
        assert_eq!(document["recommended"]["version"], "1.2.0");
        assert_eq!(document["recommended"]["name"], "grail-1.2.0-64.exe");
    }

    #[tokio::test]
    async fn test_downloads_fetch_failure_degrades_to_empty_state() {
        let mut source = MockArtifactSource::new();
        source
            .expect_downloads_url()
            .return_const("https://api.example.com/downloads".to_string());
        source
            .expect_list_artifacts()
            .returning(|| Err(anyhow::anyhow!("connection refused")));

        let dir = tempdir().unwrap();
        let path = dir.path().join("downloads.html");

        let result = downloads(
            &source,
            windows_x64(),
            &options(OutputFormat::Html, Some(path.clone())),
        )
        .await;

        // Degrades, never fails
        assert!(result.is_ok());
        let fragment = std::fs::read_to_string(&path).unwrap();
        assert!(fragment.contains("<span id=\"grail_version\"></span>"));
        assert!(!fragment.contains("<tr>"));
    }

    #[tokio::test]
    async fn test_downloads_empty_listing() {
        let mut source = MockArtifactSource::new();
        source.expect_list_artifacts().returning(|| Ok(vec![]));

        let dir = tempdir().unwrap();
        let path = dir.path().join("downloads.json");

        downloads(
            &source,
            windows_x64(),
            &options(OutputFormat::Json, Some(path.clone())),
        )
        .await
        .unwrap();

        let document: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(document["rows"].as_array().unwrap().is_empty());
        assert!(document["recommended"].is_null());
    }

    #[tokio::test]
    async fn test_downloads_write_failure_is_an_error() {
        let mut source = MockArtifactSource::new();
        source.expect_list_artifacts().returning(|| Ok(vec![]));

        let result = downloads(
            &source,
            windows_x64(),
            &options(
                OutputFormat::Html,
                Some(PathBuf::from("/nonexistent/dir/downloads.html")),
            ),
        )
        .await;

        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to write downloads section")
        );
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Html.to_string(), "html");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
