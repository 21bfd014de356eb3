//! Site routes.

use dioxus::prelude::*;

use crate::components::SiteShell;
use crate::views::{About, EpisodeDetail, Faq, Home, NotFound};

/// Every page, wrapped in the site shell.
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteShell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/faq")]
        Faq {},
        #[route("/episodes/:slug")]
        EpisodeDetail { slug: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Route for a site-relative path; unknown paths land on the not-found page.
    pub fn from_path(path: &str) -> Self {
        path.parse().unwrap_or_else(|_| Self::NotFound {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        })
    }

    pub fn episode(slug: &str) -> Self {
        Self::EpisodeDetail {
            slug: slug.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_known_pages() {
        assert_eq!(Route::from_path("/"), Route::Home {});
        assert_eq!(Route::from_path("/faq"), Route::Faq {});
        assert_eq!(Route::from_path("/episodes/intro"), Route::episode("intro"));
    }

    #[test]
    fn test_from_path_unknown_is_not_found() {
        assert_eq!(
            Route::from_path("/no/such/page"),
            Route::NotFound {
                segments: vec!["no".into(), "such".into(), "page".into()],
            }
        );
    }

    #[test]
    fn test_episode_route_display() {
        assert_eq!(Route::episode("react-basics").to_string(), "/episodes/react-basics");
    }
}
