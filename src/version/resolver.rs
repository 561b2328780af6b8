//! Next snapshot version resolution from existing collection names

use regex::Regex;
use semver::Version;
use thiserror::Error;

use crate::collection::types::CollectionSummary;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Cannot bump minor version of {0}: component overflows")]
    Overflow(Version),
}

/// Computes the version of the next snapshot from the names already in use.
///
/// Names are scanned for their first `major.minor.patch` substring. The
/// highest version found is bumped one minor step with the patch reset;
/// major is never incremented. When no name carries a version, the seed
/// version is used as is.
pub struct VersionResolver {
    /// `major.minor.patch` anywhere in a name, ASCII digits only
    pattern: Regex,
    seed: Version,
}

impl VersionResolver {
    pub fn new(seed: Version) -> Self {
        Self {
            pattern: Regex::new(r"([0-9]+)\.([0-9]+)\.([0-9]+)").unwrap(),
            seed,
        }
    }

    /// Extract the first `major.minor.patch` triple embedded in a name.
    ///
    /// Text before and after the match is ignored. Components too large for
    /// `u64` are treated as no match.
    ///
    /// Examples:
    /// - "Pinterest REST API 5.14.0" -> Version(5, 14, 0)
    /// - "v1.2.3-beta and 4.5.6" -> Version(1, 2, 3)
    /// - "Pinterest REST API (latest)" -> None
    pub fn extract_version(&self, name: &str) -> Option<Version> {
        let captures = self.pattern.captures(name)?;
        let component = |i: usize| captures.get(i)?.as_str().parse::<u64>().ok();

        Some(Version::new(component(1)?, component(2)?, component(3)?))
    }

    /// Highest version embedded in any of the names, compared numerically
    pub fn highest_version<'a, I>(&self, names: I) -> Option<Version>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.extract_version(name))
            .max()
    }

    /// Version the next snapshot should carry
    pub fn next_version(
        &self,
        collections: &[CollectionSummary],
    ) -> Result<Version, VersionError> {
        match self.highest_version(collections.iter().map(|c| c.name.as_str())) {
            Some(highest) => {
                let minor = highest
                    .minor
                    .checked_add(1)
                    .ok_or_else(|| VersionError::Overflow(highest.clone()))?;
                Ok(Version::new(highest.major, minor, 0))
            }
            None => Ok(self.seed.clone()),
        }
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SEED_VERSION)
    }
}
