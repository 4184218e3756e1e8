//! Resolve a page request the way the site's front controller does.

use anyhow::Result;
use log::debug;

use crate::pages;

/// Print the routing outcome for a page query value.
///
/// Never fails: unrecognized values are a redirect, not an error.
#[tracing::instrument]
pub fn resolve(query: Option<&str>) -> Result<()> {
    let action = pages::resolve(query);
    debug!("Resolved page query {:?} to {}", query, action);
    println!("{}", action);
    Ok(())
}
