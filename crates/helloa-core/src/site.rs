//! Site configuration, bundled content, and page metadata.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::faq::FaqCatalog;
use crate::types::{Episode, Host, Topic};

const SITE_JSON: &str = include_str!("../content/site.json");
const EPISODES_JSON: &str = include_str!("../content/episodes.json");
const FAQ_JSON: &str = include_str!("../content/faq.json");

/// Site-wide settings, as bundled in `site.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Full name, e.g. `Hello A Podcast`.
    pub name: String,
    /// Header wordmark, e.g. `Hello A`.
    pub short_name: String,
    pub tagline: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Canonical origin used for share links and OpenGraph URLs.
    pub base_url: String,
    pub contact_email: String,
    pub twitter_handle: String,
    pub copyright_year: u16,
    pub hosts: Vec<Host>,
    pub topics: Vec<Topic>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Hello A Podcast".into(),
            short_name: "Hello A".into(),
            tagline: "Building the Future of Web Development".into(),
            description:
                "A modern, standout podcast experience with sleek design and accessibility.".into(),
            keywords: Vec::new(),
            base_url: "https://hello-a-podcast.vercel.app".into(),
            contact_email: "hello@hello-a-podcast.com".into(),
            twitter_handle: "@helloa".into(),
            copyright_year: 2024,
            hosts: Vec::new(),
            topics: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse `site.json`. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve a site-relative path against the canonical origin.
    ///
    /// Any path on the origin is kept, so `https://host/show` plus
    /// `/episodes/intro` gives `https://host/show/episodes/intro`.
    pub fn absolute_url(&self, path: &str) -> Result<Url> {
        let mut base = Url::parse(&self.base_url)?;
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    /// Metadata for pages without their own.
    pub fn default_meta(&self) -> PageMeta {
        self.meta(self.name.clone(), self.description.clone(), Some("/"))
    }

    /// Metadata for a fixed page such as `/about`.
    pub fn page_meta(&self, title: &str, path: &str) -> PageMeta {
        self.meta(
            format!("{title} - {}", self.name),
            self.description.clone(),
            Some(path),
        )
    }

    pub fn episode_meta(&self, episode: &Episode) -> PageMeta {
        PageMeta {
            og_type: OG_TYPE_ARTICLE,
            image: Some(episode.cover_image_url.clone()),
            ..self.meta(
                format!("{} - {}", episode.title, self.name),
                episode.description.clone(),
                Some(&episode.path()),
            )
        }
    }

    pub fn not_found_meta(&self) -> PageMeta {
        self.meta("Episode Not Found".into(), self.description.clone(), None)
    }

    fn meta(&self, title: String, description: String, path: Option<&str>) -> PageMeta {
        let twitter_creator = match self.twitter_handle.trim() {
            "" => None,
            handle => Some(handle.to_string()),
        };
        PageMeta {
            title,
            description,
            image: None,
            canonical_url: path
                .and_then(|path| self.absolute_url(path).ok())
                .map(String::from),
            site_name: self.name.clone(),
            og_type: OG_TYPE_WEBSITE,
            keywords: self.keywords.clone(),
            twitter_creator,
        }
    }
}

/// OpenGraph type for site pages.
pub const OG_TYPE_WEBSITE: &str = "website";
/// OpenGraph type for episode pages.
pub const OG_TYPE_ARTICLE: &str = "article";
/// OpenGraph locale for every page.
pub const OG_LOCALE: &str = "en_US";
/// Twitter card style for every page.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Title and social tags for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// OpenGraph image.
    pub image: Option<String>,
    pub canonical_url: Option<String>,
    pub site_name: String,
    /// `website` or `article`.
    pub og_type: &'static str,
    pub keywords: Vec<String>,
    /// Twitter `@handle` credited on cards.
    pub twitter_creator: Option<String>,
}

impl PageMeta {
    /// The `keywords` meta value, if there are any.
    pub fn keywords_content(&self) -> Option<String> {
        (!self.keywords.is_empty()).then(|| self.keywords.join(", "))
    }
}

/// Everything the site renders, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub site: SiteConfig,
    pub catalog: Catalog,
    pub faq: FaqCatalog,
}

impl SiteContent {
    /// Parse content from the three JSON documents.
    pub fn from_json(site: &str, episodes: &str, faq: &str) -> Result<Self> {
        Ok(Self {
            site: SiteConfig::from_json(site)?,
            catalog: Catalog::from_json(episodes)?,
            faq: FaqCatalog::from_json(faq)?,
        })
    }

    /// The content compiled into the binary.
    ///
    /// `HELLOA_BASE_URL` at build time overrides the canonical origin.
    pub fn bundled() -> Result<Self> {
        let mut content = Self::from_json(SITE_JSON, EPISODES_JSON, FAQ_JSON)?;
        if let Some(base_url) = option_env!("HELLOA_BASE_URL") {
            content.site.base_url = base_url.to_string();
        }
        info!(
            "Loaded {} episodes and {} FAQ entries",
            content.catalog.len(),
            content.faq.len()
        );
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_loads() {
        let content = SiteContent::bundled().unwrap();
        assert!(!content.catalog.is_empty());
        assert!(!content.faq.is_empty());
        assert!(!content.site.hosts.is_empty());
        assert!(content.catalog.find_featured().is_some());
    }

    #[test]
    fn test_bundled_slugs_resolve() {
        let content = SiteContent::bundled().unwrap();
        for episode in content.catalog.episodes() {
            assert_eq!(content.catalog.find_by_slug(&episode.slug).unwrap(), episode);
        }
    }

    #[test]
    fn test_site_json_defaults() {
        let site = SiteConfig::from_json(r#"{"name": "Other Show"}"#).unwrap();
        assert_eq!(site.name, "Other Show");
        assert_eq!(site.base_url, SiteConfig::default().base_url);
    }

    #[test]
    fn test_episode_meta() {
        let site = SiteConfig::default();
        let mut episode = Episode::new(1, "intro", "Intro").with_description("Hi.");
        episode.cover_image_url = "https://example.com/1.jpg".into();

        let meta = site.episode_meta(&episode);
        assert_eq!(meta.title, "Intro - Hello A Podcast");
        assert_eq!(meta.description, "Hi.");
        assert_eq!(meta.image.as_deref(), Some("https://example.com/1.jpg"));
        assert_eq!(
            meta.canonical_url.as_deref(),
            Some("https://hello-a-podcast.vercel.app/episodes/intro")
        );
        assert_eq!(meta.og_type, OG_TYPE_ARTICLE);
    }

    #[test]
    fn test_default_meta_carries_site_tags() {
        let site = SiteConfig::from_json(
            r#"{"keywords": ["podcast", "audio"], "twitterHandle": "@helloa"}"#,
        )
        .unwrap();

        let meta = site.default_meta();
        assert_eq!(meta.title, "Hello A Podcast");
        assert_eq!(meta.site_name, "Hello A Podcast");
        assert_eq!(meta.og_type, OG_TYPE_WEBSITE);
        assert_eq!(meta.keywords_content().as_deref(), Some("podcast, audio"));
        assert_eq!(meta.twitter_creator.as_deref(), Some("@helloa"));
        assert_eq!(
            meta.canonical_url.as_deref(),
            Some("https://hello-a-podcast.vercel.app/")
        );
    }

    #[test]
    fn test_default_meta_omits_empty_tags() {
        let site = SiteConfig {
            keywords: Vec::new(),
            twitter_handle: String::new(),
            ..SiteConfig::default()
        };
        let meta = site.default_meta();
        assert_eq!(meta.keywords_content(), None);
        assert_eq!(meta.twitter_creator, None);
    }

    #[test]
    fn test_absolute_url_keeps_base_path() {
        for base_url in ["https://example.github.io/hello-a", "https://example.github.io/hello-a/"] {
            let site = SiteConfig {
                base_url: base_url.into(),
                ..SiteConfig::default()
            };
            let episode = Episode::new(1, "intro", "Intro");
            assert_eq!(
                site.episode_meta(&episode).canonical_url.as_deref(),
                Some("https://example.github.io/hello-a/episodes/intro")
            );
            assert_eq!(
                site.absolute_url("/").unwrap().as_str(),
                "https://example.github.io/hello-a/"
            );
        }
    }

    #[test]
    fn test_not_found_meta() {
        assert_eq!(SiteConfig::default().not_found_meta().title, "Episode Not Found");
    }

    #[test]
    fn test_absolute_url_rejects_bad_base() {
        let site = SiteConfig {
            base_url: "not a url".into(),
            ..SiteConfig::default()
        };
        assert!(site.absolute_url("/").is_err());
    }
}
