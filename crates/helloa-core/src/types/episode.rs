//! Episode record.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DateStyle;

/// A single podcast episode, as bundled in `episodes.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Episode number, unique within the catalog.
    pub number: u32,
    /// Episode title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Human-readable duration, e.g. `45:30`. Not parsed.
    pub duration: String,
    /// ISO publish date, e.g. `2024-01-15`.
    pub publish_date: String,
    /// Absolute cover image URL.
    pub cover_image_url: String,
    /// Absolute audio URL.
    pub audio_url: String,
    /// URL-safe identifier used by the detail route.
    pub slug: String,
    /// Promoted to the home page hero.
    #[serde(default)]
    pub featured: bool,
}

impl Episode {
    pub fn new(number: u32, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            description: String::new(),
            duration: String::new(),
            publish_date: String::new(),
            cover_image_url: String::new(),
            audio_url: String::new(),
            slug: slug.into(),
            featured: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Parse the publish date. Accepts a plain date or a full RFC 3339 timestamp.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.publish_date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
    }

    /// Publish date for display, falling back to the raw string.
    pub fn published_display(&self, style: DateStyle) -> String {
        self.published_on()
            .map_or_else(|| self.publish_date.clone(), |date| style.format(date))
    }

    /// Site-relative path of the detail page.
    pub fn path(&self) -> String {
        format!("/episodes/{}", self.slug)
    }

    /// Badge label, e.g. `Episode 3`.
    pub fn label(&self) -> String {
        format!("Episode {}", self.number)
    }
}
