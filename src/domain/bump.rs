use crate::domain::{TagPrefix, Version};
use crate::error::Result;

/// The set of bump flags requested for one invocation.
///
/// Flags are independent booleans; any subset may be set. They are applied
/// in fixed precedence order (major, then minor, then patch) regardless of
/// the order the caller supplied them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BumpRequest {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
}

impl BumpRequest {
    pub fn new(major: bool, minor: bool, patch: bool) -> Self {
        BumpRequest {
            major,
            minor,
            patch,
        }
    }

    /// True when no bump was requested
    pub fn is_empty(&self) -> bool {
        !(self.major || self.minor || self.patch)
    }

    /// Compute the next version from the current one.
    ///
    /// Major resets minor and patch, minor resets patch, patch resets
    /// nothing; with several flags set the later increments start from the
    /// reset baseline (1.4.7 with major and patch becomes 2.0.1). Build
    /// metadata is dropped on every computed bump. An empty request returns
    /// the current version unchanged, build included.
    pub fn apply(&self, current: &Version) -> Version {
        if self.is_empty() {
            return current.clone();
        }

        let mut next = Version::new(current.major, current.minor, current.patch);
        if self.major {
            next.major += 1;
            next.minor = 0;
            next.patch = 0;
        }
        if self.minor {
            next.minor += 1;
            next.patch = 0;
        }
        if self.patch {
            next.patch += 1;
        }
        next
    }
}

/// Compute the next version from the latest one.
///
/// An explicit override string takes precedence over every bump flag: it is
/// resolved and parsed under the given prefix (so both "v3.0.0" and "3.0.0"
/// are accepted) and returned as-is, and its parse failure is an error.
/// Without an override the bump flags are applied.
pub fn next_version(
    latest: &Version,
    request: &BumpRequest,
    override_spec: Option<&str>,
    prefix: &TagPrefix,
) -> Result<Version> {
    if let Some(spec) = override_spec {
        return prefix.parse(spec);
    }
    Ok(request.apply(latest))
}
