//! Remote collection access
//!
//! # Modules
//!
//! - [`api`]: `CollectionApi` trait for the list/get/create/update operations
//! - [`postman`]: reqwest-based implementation against the Postman API
//! - [`loader`]: Local source of freshly generated collection content
//! - [`types`]: Wire types and payload preparation helpers
//! - [`error`]: Error types for remote and local access

pub mod api;
pub mod error;
pub mod loader;
pub mod postman;
pub mod types;

pub use api::CollectionApi;
pub use loader::{CollectionLoader, FileCollectionLoader};
pub use postman::PostmanClient;
pub use types::{CollectionContent, CollectionSummary};
