//! Git operations abstraction layer
//!
//! The [Repository] trait defines the git operations tagver needs, with two
//! implementations: [repository::Git2Repository] backed by the `git2` crate,
//! and [mock::MockRepository] for tests. Code outside this module should
//! depend on the trait rather than a concrete implementation.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::{Result, TagverError};
use git2::Oid;

/// Identity attached to created tags (git config user.name / user.email)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggerIdentity {
    pub name: String,
    pub email: String,
}

impl TaggerIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        TaggerIdentity {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Require non-empty name and email; anything beyond that is not
    /// validated here.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TagverError::identity("user.name is empty"));
        }
        if self.email.trim().is_empty() {
            return Err(TagverError::identity("user.email is empty"));
        }
        Ok(())
    }
}

/// Common git operation trait for abstraction
///
/// Implementors must be `Send + Sync`. All methods return
/// [crate::error::Result], mapping underlying failures (like `git2::Error`)
/// to the matching [crate::error::TagverError] variant.
pub trait Repository: Send + Sync {
    /// Get all tag names in the repository.
    ///
    /// Failure to list is an error; an empty repository yields an empty
    /// vector, which resolution treats as the zero-version baseline.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Find a tag by name and get its OID.
    ///
    /// Returns `Ok(None)` when the tag does not exist. Handles both
    /// lightweight and annotated tags.
    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>>;

    /// Get the commit OID at HEAD, the target for new tags
    fn head_oid(&self) -> Result<Oid>;

    /// Get the tagger identity from repository configuration.
    ///
    /// Fails when user.name or user.email cannot be resolved or is empty.
    fn tagger(&self) -> Result<TaggerIdentity>;

    /// Create an annotated tag at the given commit.
    ///
    /// Returns the OID of the created tag object. Creating a tag that
    /// already exists is an error.
    fn create_annotated_tag(
        &self,
        name: &str,
        target: Oid,
        tagger: &TaggerIdentity,
        message: &str,
    ) -> Result<Oid>;

    /// Push tags to a remote
    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()>;
}
