//! Artifact listing sources.
//!
//! A source knows where the release artifacts live and how to list them.
//! The only production source is the Bitbucket repository-downloads API;
//! commands stay generic over the trait so tests can substitute mocks.

mod bitbucket;

use anyhow::Result;
use async_trait::async_trait;

use crate::artifact::ReleaseArtifact;

pub use bitbucket::{BitbucketSource, DEFAULT_DOWNLOADS_URL};

/// Trait for listing downloadable release artifacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// The downloads endpoint URL.
    fn downloads_url(&self) -> &str;

    /// Fetch the artifact listing. First page only; the site never pages
    /// through the listing.
    async fn list_artifacts(&self) -> Result<Vec<ReleaseArtifact>>;
}
