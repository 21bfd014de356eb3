//! Landing page: featured episode hero and the episode grid.

use dioxus::prelude::*;
use helloa_core::{DateStyle, Episode, REGULAR_EPISODE_LIMIT};

use crate::components::{AudioPlayer, EpisodeCard, PageHead, PlayIcon};
use crate::routes::Route;
use crate::state::AppState;

#[component]
pub fn Home() -> Element {
    let app_state = use_context::<AppState>();
    let content = &app_state.content;
    let meta = content.site.default_meta();

    let listing = content.catalog.home_listing(REGULAR_EPISODE_LIMIT);
    let featured = listing.featured.cloned();
    let regular: Vec<Episode> = listing.regular.into_iter().cloned().collect();

    rsx! {
        PageHead { meta }
        div { class: "page",
            if let Some(episode) = featured {
                FeaturedHero { episode }
            }

            section { class: "container",
                div { class: "section-heading",
                    h2 { "All Episodes" }
                    p { class: "muted",
                        "Explore our collection of episodes covering modern web development, "
                        "from React and Next.js to performance optimization and accessibility."
                    }
                }
                div { class: "episode-grid",
                    for episode in regular {
                        EpisodeCard { key: "{episode.slug}", episode }
                    }
                }
            }
        }
    }
}

/// Label of the hero button that shows or hides the inline player.
const fn player_button_label(player_shown: bool) -> &'static str {
    if player_shown {
        "Hide Player"
    } else {
        "Play Episode"
    }
}

/// Hero block for the featured episode.
///
/// "Play Episode" mounts an inline player for the episode; the same button
/// then reads "Hide Player" and unmounts it.
#[component]
fn FeaturedHero(episode: Episode) -> Element {
    let mut show_player = use_signal(|| false);
    let player_shown = show_player();
    let button_label = player_button_label(player_shown);

    let label = episode.label();
    let date = episode.published_display(DateStyle::Short);
    let route = Route::episode(&episode.slug);

    rsx! {
        section { class: "hero hero--featured",
            div { class: "container hero__grid",
                div { class: "hero__body",
                    span { class: "badge", "Featured Episode" }
                    h1 { class: "hero__title", "{episode.title}" }
                    p { class: "hero__lead", "{episode.description}" }
                    div { class: "hero__meta",
                        span { "{label}" }
                        span { "•" }
                        span { "{episode.duration}" }
                        span { "•" }
                        span { "{date}" }
                    }
                    div { class: "hero__actions",
                        button {
                            class: "btn btn--lg",
                            aria_expanded: "{player_shown}",
                            onclick: move |_| show_player.toggle(),
                            if !player_shown {
                                PlayIcon { size: 20 }
                            }
                            "{button_label}"
                        }
                        Link { to: route, class: "btn btn--outline btn--lg", "View Details" }
                    }
                    if player_shown {
                        AudioPlayer {
                            src: episode.audio_url.clone(),
                            title: episode.title.clone(),
                        }
                    }
                }
                div { class: "hero__cover",
                    img { src: "{episode.cover_image_url}", alt: "{episode.title}" }
                }
            }
        }
    }
}
