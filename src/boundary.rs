use std::fmt;

/// Non-fatal conditions met while resolving tags near repository boundaries.
/// These are reported to the user but do not abort the invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag could not be parsed as a semantic version and was skipped
    SkippedTag { tag: String, reason: String },
    /// No semver tags exist; resolution falls back to the zero baseline
    NoSemverTags,
    /// A tag name does not have the canonical `<prefix>X.Y.Z` shape
    TagOutsidePattern { tag: String, prefix: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::SkippedTag { tag, reason } => {
                write!(f, "Skipping tag '{}': {}", tag, reason)
            }
            BoundaryWarning::NoSemverTags => {
                write!(f, "No semver tags found, starting from 0.0.0")
            }
            BoundaryWarning::TagOutsidePattern { tag, prefix } => {
                write!(f, "Tag '{}' does not match the '{}X.Y.Z' form", tag, prefix)
            }
        }
    }
}
