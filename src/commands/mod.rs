//! Command implementations for the graildocs CLI.

mod downloads;
mod resolve;

pub use downloads::{DownloadsOptions, OutputFormat, downloads};
pub use resolve::resolve;
