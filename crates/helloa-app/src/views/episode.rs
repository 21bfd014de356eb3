//! Episode detail page.

use dioxus::prelude::*;
use tracing::{debug, warn};

use super::not_found::NotFoundPanel;
use crate::components::{EpisodeContent, PageHead};
use crate::state::AppState;

/// Resolves the slug against the catalog; unknown slugs render the
/// not-found page with no partial record.
#[component]
pub fn EpisodeDetail(slug: String) -> Element {
    let app_state = use_context::<AppState>();
    let site = &app_state.content.site;

    match app_state.content.catalog.find_by_slug(&slug) {
        Ok(episode) => {
            let meta = site.episode_meta(episode);
            let episode = episode.clone();
            rsx! {
                PageHead { meta }
                EpisodeContent { episode }
            }
        }
        Err(e) => {
            if e.is_not_found() {
                debug!("{e}");
            } else {
                warn!("Could not resolve episode '{slug}': {e}");
            }
            let meta = site.not_found_meta();
            rsx! {
                PageHead { meta }
                NotFoundPanel {}
            }
        }
    }
}
