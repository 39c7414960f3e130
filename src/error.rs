use thiserror::Error;

/// Unified error type for tagver operations
#[derive(Error, Debug)]
pub enum TagverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Tag already exists: {0}")]
    Duplicate(String),

    #[error("Tagger identity error: {0}")]
    Identity(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tagver
pub type Result<T> = std::result::Result<T, TagverError>;

impl TagverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagverError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        TagverError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        TagverError::Tag(msg.into())
    }

    /// Create a duplicate-tag error for an existing tag name
    pub fn duplicate(tag: impl Into<String>) -> Self {
        TagverError::Duplicate(tag.into())
    }

    /// Create a tagger identity error with context
    pub fn identity(msg: impl Into<String>) -> Self {
        TagverError::Identity(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        TagverError::Remote(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TagverError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TagverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(TagverError::version("test").to_string().contains("Version"));
        assert!(TagverError::tag("test").to_string().contains("Tag"));
        assert!(TagverError::identity("test")
            .to_string()
            .contains("identity"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (TagverError::config("x"), "Configuration error"),
            (TagverError::version("x"), "Version parsing error"),
            (TagverError::tag("x"), "Tag error"),
            (TagverError::duplicate("v1.0.0"), "Tag already exists"),
            (TagverError::identity("x"), "Tagger identity error"),
            (TagverError::remote("x"), "Remote operation failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_duplicate_error_carries_tag_name() {
        let err = TagverError::duplicate("v2.1.0");
        assert!(err.to_string().contains("v2.1.0"));
    }
}
