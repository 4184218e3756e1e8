//! Visitor environment detection.
//!
//! The downloads page tailors its recommendation to the visitor's platform
//! and architecture. Both are derived once per invocation, either from a
//! reported client platform string or from the build target.

use serde::Serialize;
use std::fmt;

/// Platform markers checked against a lowercased client platform string.
/// The three groups are mutually exclusive; first hit wins.
const WINDOWS_MARKERS: &[&str] = &["windows", "win95", "win32", "win64"];
const LINUX_MARKERS: &[&str] = &["linux", "freebsd", "ssl-mm"];
const MAC_MARKERS: &[&str] = &["mac os", "mac_powerpc"];

/// 64-bit markers, consulted only under the Windows branch.
const WIN64_MARKERS: &[&str] = &["win64", "x64", "amd64"];

/// Platform of a visitor or a download artifact.
///
/// Artifacts only ever classify as Windows or Mac; Linux and Unknown
/// visitors therefore never receive a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
    Unknown,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::Mac => write!(f, "Mac"),
            Platform::Linux => write!(f, "Linux"),
            Platform::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Architecture of a visitor or a download artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X32,
    X64,
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::X32 => write!(f, "x32"),
            Arch::X64 => write!(f, "x64"),
        }
    }
}

/// Visitor environment, immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visitor {
    pub platform: Platform,
    pub arch: Arch,
}

impl Visitor {
    /// Derive the visitor environment from a reported client platform string.
    ///
    /// Architecture defaults to x32 and upgrades to x64 only under the
    /// Windows branch when a 64-bit marker is present.
    pub fn from_platform_str(raw: &str) -> Self {
        let ua = raw.to_lowercase();

        let platform = if WINDOWS_MARKERS.iter().any(|m| ua.contains(m)) {
            Platform::Windows
        } else if LINUX_MARKERS.iter().any(|m| ua.contains(m)) {
            Platform::Linux
        } else if MAC_MARKERS.iter().any(|m| ua.contains(m)) {
            Platform::Mac
        } else {
            Platform::Unknown
        };

        let arch = if platform == Platform::Windows && WIN64_MARKERS.iter().any(|m| ua.contains(m))
        {
            Arch::X64
        } else {
            Arch::X32
        };

        Self { platform, arch }
    }

    /// Detect the visitor environment from the build target.
    ///
    /// Used when no platform string is given on the command line.
    pub fn detect() -> Self {
        Self {
            platform: Self::detect_platform(),
            arch: Self::detect_arch(),
        }
    }

    fn detect_platform() -> Platform {
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "macos")]
        {
            Platform::Mac
        }
        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            Platform::Unknown
        }
    }

    fn detect_arch() -> Arch {
        #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
        {
            Arch::X64
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Arch::X32
        }
    }
}
