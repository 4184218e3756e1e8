//! Release artifacts and the downloads table builder.
//!
//! Each artifact record fetched from the hosting API is classified by
//! platform and architecture from its name alone, gets a version extracted,
//! and lands in a table where at most one row is flagged as the match for
//! the visitor's environment.

mod version;

use serde::Serialize;

use crate::platform::{Arch, Platform, Visitor};

pub use version::{compare_versions, extract_version};

/// One downloadable release file as returned by the hosting API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseArtifact {
    pub name: String,
    pub download_url: String,
}

/// An artifact with its derived platform, architecture and version.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedArtifact {
    pub name: String,
    pub download_url: String,
    pub platform: Platform,
    pub arch: Arch,
    /// Dotted numeric version from the name; empty when the name has none.
    pub version: String,
}

impl ClassifiedArtifact {
    /// Classify an artifact record by its name.
    ///
    /// Windows/x32 unless the name says otherwise: `.dmg` marks a Mac build
    /// (always treated as 64-bit), a `64` substring marks a 64-bit build.
    /// No branch ever derives Linux.
    pub fn classify(record: &ReleaseArtifact) -> Self {
        let mut platform = Platform::Windows;
        let mut arch = Arch::X32;

        if record.name.contains(".dmg") {
            platform = Platform::Mac;
            arch = Arch::X64;
        }
        if record.name.contains("64") {
            arch = Arch::X64;
        }

        Self {
            name: record.name.clone(),
            download_url: record.download_url.clone(),
            platform,
            arch,
            version: extract_version(&record.name),
        }
    }
}

/// One table row: a classified artifact plus the visitor match flag.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadRow {
    #[serde(flatten)]
    pub artifact: ClassifiedArtifact,
    pub matched: bool,
}

/// The built downloads table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DownloadsTable {
    pub rows: Vec<DownloadRow>,
}

impl DownloadsTable {
    /// Build the table for a visitor from the fetched artifact records.
    ///
    /// Rows keep the input order. At most one row is flagged as matched:
    /// the first one whose derived platform and architecture both equal the
    /// visitor's.
    pub fn build(records: &[ReleaseArtifact], visitor: Visitor) -> Self {
        let mut rows = Vec::with_capacity(records.len());
        let mut match_taken = false;

        for record in records {
            let artifact = ClassifiedArtifact::classify(record);
            let matched = !match_taken
                && artifact.platform == visitor.platform
                && artifact.arch == visitor.arch;
            match_taken = match_taken || matched;
            rows.push(DownloadRow { artifact, matched });
        }

        Self { rows }
    }

    /// Select the recommended download.
    ///
    /// Rows are ranked ascending by (matched, version): non-matches before
    /// matches, lower versions before higher. The sort is stable, so ties
    /// keep input order; the last-ranked row wins. None for an empty table.
    pub fn recommended(&self) -> Option<&DownloadRow> {
        let mut ranked: Vec<&DownloadRow> = self.rows.iter().collect();
        ranked.sort_by(|a, b| {
            a.matched.cmp(&b.matched).then_with(|| {
                compare_versions(&a.artifact.version, &b.artifact.version)
            })
        });
        ranked.last().copied()
    }
}
