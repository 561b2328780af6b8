use semver::Version;
use std::path::PathBuf;

// =============================================================================
// Remote API constants
// =============================================================================

/// Default base URL for the Postman API
pub const DEFAULT_BASE_URL: &str = "https://api.getpostman.com";

/// Header carrying the static API key on every request
pub const API_KEY_HEADER: &str = "X-API-Key";

/// User agent sent with every request
pub const USER_AGENT: &str = "collection-versioner";

// =============================================================================
// Naming constants
// =============================================================================

/// Display name of the mutable "latest" collection
pub const DEFAULT_LATEST_NAME: &str = "Pinterest REST API (latest)";

/// Prefix placed in front of the computed version in snapshot names
pub const DEFAULT_VERSION_PREFIX: &str = "Pinterest REST API ";

/// Version used when no existing collection name carries one
pub const DEFAULT_SEED_VERSION: Version = Version::new(1, 0, 0);

/// Schema written into replacement content that does not declare one
pub const DEFAULT_SCHEMA: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Relative path of the freshly generated collection file
pub const DEFAULT_COLLECTION_PATH: &str = "./postman/collection.json";

/// Versioning run configuration.
///
/// Built once by the entry point and handed to the orchestrator, which never
/// reads environment variables itself.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionerConfig {
    /// Exact display name of the "latest" collection
    pub latest_name: String,
    /// Uid used to locate "latest" when no collection carries `latest_name`
    pub fallback_uid: Option<String>,
    /// Prefix for snapshot names, e.g. "Pinterest REST API " + "5.15.0"
    pub version_prefix: String,
    /// Version the next one is derived from when no name carries a version
    pub seed_version: Version,
    /// Schema applied to replacement content lacking `info.schema`
    pub default_schema: String,
    /// Path of the generated collection file
    pub collection_path: PathBuf,
    /// Stop after computing the snapshot name, before any write
    pub dry_run: bool,
}

impl Default for VersionerConfig {
    fn default() -> Self {
        Self {
            latest_name: DEFAULT_LATEST_NAME.to_string(),
            fallback_uid: None,
            version_prefix: DEFAULT_VERSION_PREFIX.to_string(),
            seed_version: DEFAULT_SEED_VERSION,
            default_schema: DEFAULT_SCHEMA.to_string(),
            collection_path: PathBuf::from(DEFAULT_COLLECTION_PATH),
            dry_run: false,
        }
    }
}

impl VersionerConfig {
    /// Full snapshot name for a version
    pub fn versioned_name(&self, version: &Version) -> String {
        format!("{}{}", self.version_prefix, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versioner_config_default_uses_naming_constants() {
        let config = VersionerConfig::default();

        assert_eq!(config.latest_name, DEFAULT_LATEST_NAME);
        assert_eq!(config.fallback_uid, None);
        assert_eq!(config.version_prefix, DEFAULT_VERSION_PREFIX);
        assert_eq!(config.seed_version, Version::new(1, 0, 0));
        assert_eq!(config.default_schema, DEFAULT_SCHEMA);
        assert_eq!(config.collection_path, PathBuf::from(DEFAULT_COLLECTION_PATH));
        assert!(!config.dry_run);
    }

    #[test]
    fn versioned_name_joins_prefix_and_version() {
        let config = VersionerConfig::default();

        assert_eq!(
            config.versioned_name(&Version::new(5, 15, 0)),
            "Pinterest REST API 5.15.0"
        );
    }
}
