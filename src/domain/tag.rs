use crate::domain::Version;
use crate::error::Result;
use regex::Regex;

/// Tag prefix configuration (e.g., "v" for tags like "v1.2.3").
///
/// Threaded explicitly through resolution, parsing, and formatting; there is
/// no ambient prefix state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPrefix {
    prefix: String,
}

impl TagPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        TagPrefix {
            prefix: prefix.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Resolve a raw tag reference to its bare version text.
    ///
    /// Takes the final path segment of a qualified ref
    /// ("refs/tags/v1.2.0" -> "v1.2.0"), then strips the prefix from the
    /// front when present. A missing prefix is a pass-through, so a bare
    /// version handed to an override flag resolves unchanged.
    pub fn resolve<'a>(&self, raw: &'a str) -> &'a str {
        let segment = raw.rsplit('/').next().unwrap_or(raw);
        segment.strip_prefix(self.prefix.as_str()).unwrap_or(segment)
    }

    /// Resolve and parse a raw tag reference into a version
    pub fn parse(&self, raw: &str) -> Result<Version> {
        Version::parse(self.resolve(raw))
    }

    /// Render the canonical tag name for a version
    pub fn format(&self, version: &Version) -> String {
        format!("{}{}", self.prefix, version)
    }

    /// Check whether a tag name has the canonical `<prefix>X.Y.Z[-build]`
    /// shape under this prefix.
    pub fn matches(&self, tag: &str) -> bool {
        let escaped = regex::escape(&self.prefix);
        let pattern = format!(r"^{}\d+\.\d+\.\d+(-.+)?$", escaped);
        Regex::new(&pattern)
            .map(|re| re.is_match(tag))
            .unwrap_or(false)
    }
}

impl Default for TagPrefix {
    fn default() -> Self {
        TagPrefix::new("v")
    }
}
