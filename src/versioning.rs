//! Snapshot-then-replace orchestration of the "latest" collection
//!
//! A run is a linear, non-resumable sequence that aborts on the first error:
//!
//! 1. list collections
//! 2. locate "latest" by name, then by fallback uid
//! 3. compute the next versioned name
//! 4. fetch the content of "latest"
//! 5. create the versioned snapshot from that content
//! 6. load the generated content and update "latest" in place
//!
//! Nothing is rolled back when a later step fails.

use thiserror::Error;
use tracing::{debug, info};

use crate::collection::api::CollectionApi;
use crate::collection::error::{ApiError, LoadError};
use crate::collection::loader::CollectionLoader;
use crate::collection::types::{CollectionSummary, replacement_payload, snapshot_payload};
use crate::config::VersionerConfig;
use crate::version::{VersionError, VersionResolver};

#[derive(Debug, Error)]
pub enum VersioningError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(
        "Collection not found by name {name:?} or by uid {}",
        .fallback_uid.as_deref().unwrap_or("<unset>")
    )]
    LatestNotFound {
        name: String,
        fallback_uid: Option<String>,
    },
}

/// Outcome of a versioning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersioningReport {
    /// Name given to the snapshot
    pub versioned_name: String,
    /// Uid of the "latest" collection, unchanged by the run
    pub latest_uid: String,
    /// Uid of the created snapshot; `None` for a dry run
    pub snapshot_uid: Option<String>,
}

/// Find the "latest" collection: exact name match first, then fallback uid
pub fn locate_latest<'a>(
    collections: &'a [CollectionSummary],
    latest_name: &str,
    fallback_uid: Option<&str>,
) -> Option<&'a CollectionSummary> {
    collections
        .iter()
        .find(|c| c.name == latest_name)
        .or_else(|| {
            let uid = fallback_uid?;
            debug!(
                "Collection {:?} not found by name, trying uid {}",
                latest_name, uid
            );
            collections.iter().find(|c| c.uid == uid)
        })
}

/// Snapshots the "latest" collection and replaces it with generated content
pub struct Versioner<A: CollectionApi, L: CollectionLoader> {
    api: A,
    loader: L,
    resolver: VersionResolver,
    config: VersionerConfig,
}

impl<A: CollectionApi, L: CollectionLoader> Versioner<A, L> {
    pub fn new(api: A, loader: L, config: VersionerConfig) -> Self {
        Self {
            api,
            loader,
            resolver: VersionResolver::new(config.seed_version.clone()),
            config,
        }
    }

    pub async fn run(&self) -> Result<VersioningReport, VersioningError> {
        info!("Starting collection versioning");

        let collections = self.api.list_collections().await?;
        info!("Found {} collections", collections.len());
        debug!(
            "Collections: {:?}",
            collections.iter().map(|c| &c.name).collect::<Vec<_>>()
        );

        let latest = locate_latest(
            &collections,
            &self.config.latest_name,
            self.config.fallback_uid.as_deref(),
        )
        .ok_or_else(|| VersioningError::LatestNotFound {
            name: self.config.latest_name.clone(),
            fallback_uid: self.config.fallback_uid.clone(),
        })?;
        info!("Current latest: {} (uid: {})", latest.name, latest.uid);

        let next_version = self.resolver.next_version(&collections)?;
        let versioned_name = self.config.versioned_name(&next_version);
        info!("Next version: {}", versioned_name);

        if self.config.dry_run {
            info!("Dry run: skipping snapshot and update");
            return Ok(VersioningReport {
                versioned_name,
                latest_uid: latest.uid.clone(),
                snapshot_uid: None,
            });
        }

        let current = self.api.get_collection(&latest.uid).await?;

        info!("Creating snapshot {:?}", versioned_name);
        let snapshot = self
            .api
            .create_collection(snapshot_payload(&current, &versioned_name))
            .await?;
        info!("Created snapshot {} (uid: {})", snapshot.name, snapshot.uid);

        let generated = self.loader.load()?;
        let replacement = replacement_payload(
            generated,
            &self.config.latest_name,
            &self.config.default_schema,
        );

        info!("Updating latest collection {}", latest.uid);
        self.api.update_collection(&latest.uid, replacement).await?;
        info!("Updated latest collection {}", latest.uid);

        Ok(VersioningReport {
            versioned_name,
            latest_uid: latest.uid.clone(),
            snapshot_uid: Some(snapshot.uid),
        })
    }
}
