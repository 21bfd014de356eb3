//! In-page audio player for one episode.

use dioxus::prelude::*;
use helloa_player::{dispatch, MediaEvent, PlayerAction, PlayerState};

use super::icons::{PauseIcon, PlayIcon, VolumeIcon};
use crate::services::DomMedia;
use crate::state::SignalStore;

/// Run an action through the player on the component's task scope.
fn send(media: DomMedia, state: Signal<PlayerState>, action: PlayerAction) {
    spawn(async move {
        let mut store = SignalStore(state);
        dispatch(&media, &mut store, action).await;
    });
}

/// Read what a media notification refers to, then run it through the player.
fn forward(media: DomMedia, state: Signal<PlayerState>, event: MediaEvent) {
    spawn(async move {
        if let Some(action) = event.resolve(&media).await {
            let mut store = SignalStore(state);
            dispatch(&media, &mut store, action).await;
        }
    });
}

/// Parse a range input's value.
fn slider_value(event: &FormEvent) -> Option<f64> {
    event.value().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Audio player with play/pause, seek, volume, and mute.
///
/// Each mounted player owns its element and state; both go away on unmount.
#[component]
pub fn AudioPlayer(src: String, title: String) -> Element {
    let media = use_hook(DomMedia::allocate);
    let state = use_signal(PlayerState::new);
    let player = *state.read();

    let dom_id = media.dom_id();
    let progress = player.progress();
    let volume_percent = player.volume_percent();
    let elapsed = player.elapsed_label();
    let total = player.duration_label();
    let play_label = if player.is_playing { "Pause" } else { "Play" };
    let mute_label = if player.is_muted { "Unmute" } else { "Mute" };

    rsx! {
        div { class: "card player",
            audio {
                id: "{dom_id}",
                src: "{src}",
                preload: "metadata",
                ontimeupdate: move |_| forward(media, state, MediaEvent::TimeUpdate),
                onloadedmetadata: move |_| forward(media, state, MediaEvent::LoadedMetadata),
                onended: move |_| forward(media, state, MediaEvent::Ended),
            }

            div { class: "player__top",
                div { class: "player__transport",
                    button {
                        class: "btn btn--outline btn--icon",
                        disabled: player.is_loading,
                        aria_label: "{play_label}",
                        onclick: move |_| send(media, state, PlayerAction::TogglePlayPause),
                        if player.is_loading {
                            div { class: "player__spinner" }
                        } else if player.is_playing {
                            PauseIcon {}
                        } else {
                            PlayIcon {}
                        }
                    }
                    div {
                        h3 { class: "player__title", "{title}" }
                        p { class: "player__time", "{elapsed} / {total}" }
                    }
                }

                div { class: "player__volume",
                    button {
                        class: "btn btn--ghost btn--icon",
                        aria_label: "{mute_label}",
                        onclick: move |_| send(media, state, PlayerAction::ToggleMute),
                        VolumeIcon { muted: player.is_silent() }
                    }
                    input {
                        class: "slider player__volume-slider",
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "1",
                        value: "{volume_percent}",
                        aria_label: "Volume",
                        oninput: move |event| {
                            if let Some(percent) = slider_value(&event) {
                                send(media, state, PlayerAction::SetVolume(percent));
                            }
                        },
                    }
                }
            }

            div { class: "player__progress",
                input {
                    class: "slider",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    step: "0.1",
                    value: "{progress}",
                    aria_label: "Seek",
                    oninput: move |event| {
                        if let Some(percent) = slider_value(&event) {
                            send(media, state, PlayerAction::Seek(percent));
                        }
                    },
                }
                div { class: "player__timestamps",
                    span { "{elapsed}" }
                    span { "{total}" }
                }
            }
        }
    }
}
