//! Share intents for episode pages.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use url::Url;

use crate::error::Result;
use crate::site::SiteConfig;
use crate::types::Episode;

/// Platforms with a web share intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    LinkedIn,
}

impl SharePlatform {
    pub const fn all() -> &'static [SharePlatform] {
        &[Self::Twitter, Self::Facebook, Self::LinkedIn]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
        }
    }

    const fn endpoint(self) -> &'static str {
        match self {
            Self::Twitter => "https://twitter.com/intent/tweet",
            Self::Facebook => "https://www.facebook.com/sharer/sharer.php",
            Self::LinkedIn => "https://www.linkedin.com/sharing/share-offsite/",
        }
    }
}

/// Everything needed to share one episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget {
    /// Canonical URL of the episode page.
    pub url: String,
    /// Prefilled message for platforms that accept one.
    pub text: String,
}

impl ShareTarget {
    pub fn for_episode(site: &SiteConfig, episode: &Episode) -> Result<Self> {
        let url = site.absolute_url(&episode.path())?;
        Ok(Self {
            url: url.to_string(),
            text: format!("Check out \"{}\" from {}!", episode.title, site.name),
        })
    }

    /// The intent link for one platform, with query values percent-encoded.
    pub fn intent_url(&self, platform: SharePlatform) -> Result<Url> {
        let params: Vec<(&str, &str)> = match platform {
            SharePlatform::Twitter => vec![("text", self.text.as_str()), ("url", self.url.as_str())],
            SharePlatform::Facebook => vec![("u", self.url.as_str())],
            SharePlatform::LinkedIn => vec![("url", self.url.as_str())],
        };
        Ok(Url::parse_with_params(platform.endpoint(), params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> ShareTarget {
        let site = SiteConfig::default();
        let episode = Episode::new(2, "react-basics", "React Basics");
        ShareTarget::for_episode(&site, &episode).unwrap()
    }

    #[test]
    fn test_share_target() {
        let target = target();
        assert_eq!(
            target.url,
            "https://hello-a-podcast.vercel.app/episodes/react-basics"
        );
        assert_eq!(target.text, "Check out \"React Basics\" from Hello A Podcast!");
    }

    #[test]
    fn test_share_url_under_sub_path_deployment() {
        let site = SiteConfig {
            base_url: "https://example.github.io/hello-a".into(),
            ..SiteConfig::default()
        };
        let episode = Episode::new(1, "intro", "Intro");
        let target = ShareTarget::for_episode(&site, &episode).unwrap();
        assert_eq!(target.url, "https://example.github.io/hello-a/episodes/intro");
    }

    #[test]
    fn test_twitter_intent_encodes_text_and_url() {
        let link = target().intent_url(SharePlatform::Twitter).unwrap();
        assert_eq!(link.host_str(), Some("twitter.com"));
        let pairs: Vec<(String, String)> = link.query_pairs().into_owned().collect();
        assert_eq!(pairs[0].0, "text");
        assert_eq!(pairs[0].1, "Check out \"React Basics\" from Hello A Podcast!");
        assert_eq!(
            pairs[1].1,
            "https://hello-a-podcast.vercel.app/episodes/react-basics"
        );
        assert!(link.as_str().contains("url=https%3A%2F%2Fhello-a-podcast"));
    }

    #[test]
    fn test_facebook_and_linkedin_only_carry_url() {
        let target = target();
        let facebook = target.intent_url(SharePlatform::Facebook).unwrap();
        assert_eq!(facebook.path(), "/sharer/sharer.php");
        assert_eq!(facebook.query_pairs().count(), 1);

        let linkedin = target.intent_url(SharePlatform::LinkedIn).unwrap();
        let (key, _) = linkedin.query_pairs().next().unwrap();
        assert_eq!(key, "url");
    }
}
