use crate::boundary::BoundaryWarning;
use crate::domain::{TagPrefix, Version};
use crate::error::{Result, TagverError};

/// Result of resolving the latest version from a set of raw tag names
#[derive(Debug, Clone, PartialEq)]
pub struct LatestOutcome {
    /// The selected latest version, or the zero baseline when nothing parsed
    pub latest: Version,
    /// Whether `latest` came from an existing tag
    pub from_existing_tag: bool,
    /// Non-fatal conditions met along the way (skipped tags, empty set)
    pub warnings: Vec<BoundaryWarning>,
}

/// Resolves the latest semantic version from a repository's tag names.
///
/// In lenient mode (the default) tags that fail to parse are skipped with a
/// warning, since the remaining valid tags still permit a correct answer.
/// In strict mode the first malformed tag aborts resolution.
pub struct LatestResolver {
    prefix: TagPrefix,
    strict: bool,
}

impl LatestResolver {
    pub fn new(prefix: TagPrefix, strict: bool) -> Self {
        LatestResolver { prefix, strict }
    }

    /// Select the latest version among the given raw tag names.
    ///
    /// Ordering is strict lexicographic precedence on the
    /// (major, minor, patch) triple; build metadata never participates.
    /// On equal triples the first-seen tag wins. An empty (or fully
    /// skipped) set resolves to the 0.0.0 baseline with a warning, not an
    /// error.
    pub fn resolve(&self, raw_tags: &[String]) -> Result<LatestOutcome> {
        let mut warnings = Vec::new();
        let mut latest: Option<Version> = None;

        for raw in raw_tags {
            let version = match self.prefix.parse(raw) {
                Ok(version) => version,
                Err(e) => {
                    if self.strict {
                        return Err(TagverError::version(format!(
                            "Cannot parse tag '{}': {}",
                            raw, e
                        )));
                    }
                    warnings.push(BoundaryWarning::SkippedTag {
                        tag: raw.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            match &latest {
                Some(current) if version.precedence() <= current.precedence() => {}
                _ => latest = Some(version),
            }
        }

        let from_existing_tag = latest.is_some();
        if !from_existing_tag {
            warnings.push(BoundaryWarning::NoSemverTags);
        }

        Ok(LatestOutcome {
            latest: latest.unwrap_or(Version::ZERO),
            from_existing_tag,
            warnings,
        })
    }
}
