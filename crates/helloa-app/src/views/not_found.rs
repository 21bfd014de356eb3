//! Terminal page for unknown paths and episodes.

use dioxus::prelude::*;
use tracing::debug;

use crate::components::{ArrowLeftIcon, PageHead};
use crate::routes::Route;
use crate::state::AppState;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let app_state = use_context::<AppState>();
    let meta = app_state.content.site.not_found_meta();
    debug!("No page at /{}", segments.join("/"));

    rsx! {
        PageHead { meta }
        NotFoundPanel {}
    }
}

/// Message and a way home.
#[component]
pub(super) fn NotFoundPanel() -> Element {
    rsx! {
        section { class: "container narrow hero--centered not-found",
            span { class: "badge", "404" }
            h1 { class: "hero__title", "Episode Not Found" }
            p { class: "hero__lead muted",
                "We couldn't find what you were looking for. It may have moved or never existed."
            }
            Link { to: Route::Home {}, class: "btn btn--lg",
                ArrowLeftIcon {}
                "Back to Episodes"
            }
        }
    }
}
