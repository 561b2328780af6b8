//! Source of the freshly generated "latest" content

#[cfg(test)]
use mockall::automock;

use std::path::PathBuf;

use crate::collection::error::LoadError;
use crate::collection::types::CollectionContent;

/// Trait for loading replacement collection content
#[cfg_attr(test, automock)]
pub trait CollectionLoader: Send + Sync {
    /// Loads the content that becomes the new "latest" collection
    fn load(&self) -> Result<CollectionContent, LoadError>;
}

/// Loads collection content from a JSON file on disk
pub struct FileCollectionLoader {
    path: PathBuf,
}

impl FileCollectionLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CollectionLoader for FileCollectionLoader {
    fn load(&self) -> Result<CollectionContent, LoadError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn load_reads_json_object_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("collection.json");
        std::fs::write(&path, r#"{"info": {"name": "Generated"}, "item": []}"#).unwrap();

        let content = FileCollectionLoader::new(&path).load().unwrap();

        assert_eq!(content["info"], json!({"name": "Generated"}));
        assert_eq!(content["item"], json!([]));
    }

    #[test]
    fn load_returns_io_error_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result = FileCollectionLoader::new(&path).load();

        assert!(matches!(result, Err(LoadError::Io { path: p, .. }) if p == path));
    }

    #[test]
    fn load_returns_parse_error_for_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("collection.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = FileCollectionLoader::new(&path).load();

        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn load_returns_parse_error_when_document_is_not_an_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("collection.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let result = FileCollectionLoader::new(&path).load();

        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }
}
