//! Episode catalog: load-once, read-only, catalog order preserved.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::collections::HashSet;

use tracing::warn;

use crate::error::{Error, Result};
use crate::types::Episode;

/// How many non-featured episodes the home page lists.
pub const REGULAR_EPISODE_LIMIT: usize = 19;

/// The ordered episode collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    episodes: Vec<Episode>,
}

/// What the home page shows: one hero episode and a grid of the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeListing<'a> {
    pub featured: Option<&'a Episode>,
    pub regular: Vec<&'a Episode>,
}

impl Catalog {
    /// Build a catalog from records in display order.
    ///
    /// Rejects duplicate slugs, duplicate or zero numbers, and records
    /// with an empty slug, title or description.
    pub fn new(episodes: Vec<Episode>) -> Result<Self> {
        let mut slugs = HashSet::new();
        let mut numbers = HashSet::new();

        for episode in &episodes {
            if episode.slug.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "episode {} has an empty slug",
                    episode.number
                )));
            }
            if episode.title.trim().is_empty() || episode.description.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "episode '{}' is missing a title or description",
                    episode.slug
                )));
            }
            if episode.number == 0 {
                return Err(Error::InvalidCatalog(format!(
                    "episode '{}' has number 0",
                    episode.slug
                )));
            }
            if !slugs.insert(episode.slug.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate slug '{}'",
                    episode.slug
                )));
            }
            if !numbers.insert(episode.number) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate episode number {}",
                    episode.number
                )));
            }
        }

        let featured = episodes.iter().filter(|e| e.featured).count();
        if featured > 1 {
            warn!("{featured} episodes are flagged as featured; the first one wins");
        }

        Ok(Self { episodes })
    }

    /// Parse a catalog from the `episodes.json` format.
    pub fn from_json(json: &str) -> Result<Self> {
        let episodes: Vec<Episode> = serde_json::from_str(json)?;
        Self::new(episodes)
    }

    /// All episodes in catalog order.
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Resolve a slug to its episode.
    pub fn find_by_slug(&self, slug: &str) -> Result<&Episode> {
        self.episodes
            .iter()
            .find(|e| e.slug == slug)
            .ok_or_else(|| Error::EpisodeNotFound(slug.to_string()))
    }

    /// The first episode flagged as featured, in catalog order.
    pub fn find_featured(&self) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.featured)
    }

    /// Episodes not flagged as featured, in catalog order, at most `limit`.
    pub fn list_non_featured(&self, limit: usize) -> Vec<&Episode> {
        self.episodes
            .iter()
            .filter(|e| !e.featured)
            .take(limit)
            .collect()
    }

    /// The home page composition.
    pub fn home_listing(&self, limit: usize) -> HomeListing<'_> {
        HomeListing {
            featured: self.find_featured(),
            regular: self.list_non_featured(limit),
        }
    }
}
