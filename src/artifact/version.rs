//! Version extraction and ordering for artifact names.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Dotted numeric version: at least two digit groups joined by dots.
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)+").expect("version regex is valid"));

/// Extract the version from an artifact name.
///
/// Returns the first dotted numeric substring (`1.2.0` in
/// `grail-1.2.0-64.exe`), or an empty string when the name carries none.
/// A lone digit group like the `64` architecture marker is not a version.
pub fn extract_version(name: &str) -> String {
    VERSION_PATTERN
        .find(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Compare two extracted versions numerically, group by group.
///
/// Missing groups count as zero, so `1.2` equals `1.2.0`. An empty version
/// ranks below any non-empty one.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    let mut left = a.split('.').map(parse_group);
    let mut right = b.split('.').map(parse_group);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let l = l.unwrap_or(0);
                let r = r.unwrap_or(0);
                if l != r {
                    return l.cmp(&r);
                }
            }
        }
    }
}

fn parse_group(group: &str) -> u64 {
    group.parse().unwrap_or(0)
}
