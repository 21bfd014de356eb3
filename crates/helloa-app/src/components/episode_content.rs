//! Episode detail body: header, player, share actions, and sidebar.

use dioxus::prelude::*;
use helloa_core::{DateStyle, Episode, SharePlatform, ShareTarget};
use tracing::{info, warn};

use super::icons::{ArrowLeftIcon, LinkIcon};
use super::AudioPlayer;
use crate::routes::Route;
use crate::services::clipboard;
use crate::state::AppState;

/// Everything on an episode page below the site header.
#[component]
pub fn EpisodeContent(episode: Episode) -> Element {
    let app_state = use_context::<AppState>();
    let share = match ShareTarget::for_episode(&app_state.content.site, &episode) {
        Ok(target) => Some(target),
        Err(e) => {
            warn!("No share links for '{}': {e}", episode.slug);
            None
        }
    };

    let label = episode.label();
    let short_date = episode.published_display(DateStyle::Short);
    let long_date = episode.published_display(DateStyle::Long);

    rsx! {
        div { class: "page episode",
            // Back navigation
            div { class: "container",
                Link { to: Route::Home {}, class: "btn btn--ghost episode__back",
                    ArrowLeftIcon {}
                    "Back to Episodes"
                }
            }

            div { class: "container episode__grid",
                // Main content
                div { class: "episode__main",
                    div { class: "episode__header",
                        div { class: "episode__badges",
                            span { class: "badge", "{label}" }
                            span { class: "muted", "{episode.duration}" }
                            span { class: "muted", "{short_date}" }
                        }
                        h1 { class: "episode__title", "{episode.title}" }
                        p { class: "episode__description", "{episode.description}" }
                    }

                    AudioPlayer {
                        src: episode.audio_url.clone(),
                        title: episode.title.clone(),
                    }

                    if let Some(share) = share {
                        ShareActions { share }
                    }
                }

                // Sidebar
                aside { class: "episode__sidebar",
                    div { class: "card episode__cover",
                        img { src: "{episode.cover_image_url}", alt: "{episode.title}" }
                    }
                    div { class: "card",
                        div { class: "card__header",
                            h3 { class: "card__title", "Episode Details" }
                        }
                        div { class: "card__content episode__details",
                            div {
                                h4 { "Duration" }
                                p { class: "muted", "{episode.duration}" }
                            }
                            div {
                                h4 { "Published" }
                                p { class: "muted", "{long_date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Share intents plus a copy-link button.
#[component]
fn ShareActions(share: ShareTarget) -> Element {
    let mut copied = use_signal(|| false);

    let links: Vec<(&'static str, String)> = SharePlatform::all()
        .iter()
        .filter_map(|&platform| {
            share
                .intent_url(platform)
                .ok()
                .map(|url| (platform.name(), url.to_string()))
        })
        .collect();
    let url = share.url.clone();

    rsx! {
        div { class: "share",
            h3 { class: "share__title", "Share this episode" }
            div { class: "share__buttons",
                for (name, href) in links {
                    a {
                        key: "{name}",
                        class: "btn btn--outline btn--sm",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{name}"
                    }
                }
                button {
                    class: "btn btn--outline btn--sm",
                    onclick: move |_| {
                        let url = url.clone();
                        spawn(async move {
                            match clipboard::copy_text(&url).await {
                                Ok(()) => {
                                    info!("Copied share link {url}");
                                    copied.set(true);
                                }
                                Err(e) => warn!("{e}"),
                            }
                        });
                    },
                    LinkIcon {}
                    if copied() { "Copied!" } else { "Copy Link" }
                }
            }
        }
    }
}
