//! Domain logic - pure version rules independent of git operations

pub mod bump;
pub mod tag;
pub mod version;

pub use bump::{next_version, BumpRequest};
pub use tag::TagPrefix;
pub use version::Version;
