//! Semantic version handling for snapshot names
//!
//! Collection names such as "Pinterest REST API 5.14.0" embed the version of
//! the snapshot they hold. [`resolver::VersionResolver`] extracts those
//! versions and derives the one the next snapshot should carry.

pub mod resolver;

pub use resolver::{VersionError, VersionResolver};
