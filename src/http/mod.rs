//! HTTP plumbing for the downloads API.

mod client;

pub use client::HttpClient;
