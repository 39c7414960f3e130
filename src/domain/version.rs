use crate::error::{Result, TagverError};
use std::fmt;

/// Semantic version representation.
///
/// `build` is free-form text following the first `-` after the patch number.
/// It is carried verbatim and never interpreted numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: Option<String>,
}

impl Version {
    /// Baseline version used when a repository has no semver tags yet
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
        build: None,
    };

    /// Create a new version without build metadata
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            build: None,
        }
    }

    /// Parse a bare version string (e.g., "1.2.3" or "1.2.3-rc.1")
    ///
    /// The string is split on `.`; the first two components are major and
    /// minor. Everything from the third component on is split on the first
    /// `-`: the left side must be the patch number, the right side (if any)
    /// becomes the build text verbatim. A dot inside the build text is
    /// tolerated ("1.2.3-rc.1"), a dot in the patch number is not ("1.2.3.4").
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() < 3 {
            return Err(TagverError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                s
            )));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| TagverError::version(format!("Invalid major version: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| TagverError::version(format!("Invalid minor version: {}", parts[1])))?;

        let rest = parts[2..].join(".");
        let (patch_str, build) = match rest.split_once('-') {
            Some((left, right)) if !right.is_empty() => (left, Some(right.to_string())),
            Some((left, _)) => (left, None),
            None => (rest.as_str(), None),
        };

        let patch = patch_str
            .parse::<u32>()
            .map_err(|_| TagverError::version(format!("Invalid patch version: {}", patch_str)))?;

        Ok(Version {
            major,
            minor,
            patch,
            build,
        })
    }

    /// The (major, minor, patch) triple used for ordering decisions.
    ///
    /// Build metadata never participates in precedence: two versions that
    /// differ only in build compare as equal here.
    pub fn precedence(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.build {
            Some(build) if !build.is_empty() => {
                write!(f, "{}.{}.{}-{}", self.major, self.minor, self.patch, build)
            }
            _ => write!(f, "{}.{}.{}", self.major, self.minor, self.patch),
        }
    }
}
