//! Episode tile for the home page grid.

use dioxus::prelude::*;
use helloa_core::{DateStyle, Episode};

use crate::routes::Route;

#[component]
pub fn EpisodeCard(episode: Episode) -> Element {
    let label = episode.label();
    let date = episode.published_display(DateStyle::Short);
    let route = Route::episode(&episode.slug);

    rsx! {
        article { class: "card episode-card",
            div { class: "episode-card__cover",
                img { src: "{episode.cover_image_url}", alt: "{episode.title}" }
            }
            div { class: "card__header",
                div { class: "episode-card__meta",
                    span { "{label}" }
                    span { "{episode.duration}" }
                }
                h3 { class: "card__title episode-card__title",
                    Link { to: route.clone(), "{episode.title}" }
                }
                p { class: "episode-card__description", "{episode.description}" }
            }
            div { class: "card__content episode-card__footer",
                span { class: "muted", "{date}" }
                Link { to: route, class: "btn btn--sm", "Listen" }
            }
        }
    }
}
