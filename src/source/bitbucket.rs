//! Bitbucket repository-downloads source.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::artifact::ReleaseArtifact;
use crate::http::HttpClient;

use super::ArtifactSource;

/// Downloads endpoint of the Grail repository.
pub const DEFAULT_DOWNLOADS_URL: &str =
    "https://api.bitbucket.org/2.0/repositories/alexlitvin/grail/downloads";

/// Bitbucket API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct DownloadsPage {
        /// A payload without a listing degrades to an empty page.
        #[serde(default)]
        pub values: Vec<Entry>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Entry {
        pub name: String,
        pub links: Links,
    }

    #[derive(Deserialize, Debug)]
    pub struct Links {
        #[serde(rename = "self")]
        pub self_link: Href,
    }

    #[derive(Deserialize, Debug)]
    pub struct Href {
        pub href: String,
    }
}

/// Bitbucket downloads source.
pub struct BitbucketSource {
    http_client: HttpClient,
    downloads_url: String,
}

impl BitbucketSource {
    /// Create a source for the given downloads URL.
    pub fn new(client: Client, downloads_url: &str) -> Self {
        Self {
            http_client: HttpClient::new(client),
            downloads_url: downloads_url.to_string(),
        }
    }
}

#[async_trait]
impl ArtifactSource for BitbucketSource {
    fn downloads_url(&self) -> &str {
        &self.downloads_url
    }

    async fn list_artifacts(&self) -> Result<Vec<ReleaseArtifact>> {
        debug!("Fetching downloads listing from {}...", self.downloads_url);
        let page: api::DownloadsPage = self.http_client.get_json(&self.downloads_url).await?;
        Ok(page.values.into_iter().map(|entry| entry.into()).collect())
    }
}

impl From<api::Entry> for ReleaseArtifact {
    fn from(entry: api::Entry) -> Self {
        ReleaseArtifact {
            name: entry.name,
            download_url: entry.links.self_link.href,
        }
    }
}
