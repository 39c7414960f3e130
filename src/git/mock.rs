use crate::error::{Result, TagverError};
use crate::git::{Repository, TaggerIdentity};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: HashMap<String, Oid>,
    head: Oid,
    tagger: Option<TaggerIdentity>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: HashMap::new(),
            head: Oid::zero(),
            tagger: None,
        }
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    /// Set the HEAD commit
    pub fn set_head(&mut self, oid: Oid) {
        self.head = oid;
    }

    /// Set the tagger identity
    pub fn set_tagger(&mut self, tagger: TaggerIdentity) {
        self.tagger = Some(tagger);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.keys().cloned().collect())
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        Ok(self.tags.get(tag_name).copied())
    }

    fn head_oid(&self) -> Result<Oid> {
        Ok(self.head)
    }

    fn tagger(&self) -> Result<TaggerIdentity> {
        self.tagger
            .clone()
            .ok_or_else(|| TagverError::identity("no tagger configured"))
    }

    fn create_annotated_tag(
        &self,
        name: &str,
        target: Oid,
        tagger: &TaggerIdentity,
        _message: &str,
    ) -> Result<Oid> {
        tagger.validate()?;
        if self.tags.contains_key(name) {
            return Err(TagverError::duplicate(name));
        }
        Ok(target)
    }

    fn push_tags(&self, _remote: &str, _tag_names: &[&str]) -> Result<()> {
        Ok(())
    }
}
