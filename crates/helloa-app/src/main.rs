//! # Hello A Podcast
//!
//! The podcast's website, built with Rust and Dioxus: a home page of
//! episodes, episode pages with an audio player, an About page, and an FAQ.

// RSX macros generate code that triggers these warnings incorrectly
#![allow(unused_qualifications)]
#![allow(clippy::use_self)]

mod components;
mod routes;
mod services;
mod state;
mod views;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use helloa_core::SiteContent;
use routes::Route;
use state::AppState;
use tracing::info;

/// Desktop window size when running outside the browser.
#[cfg(feature = "desktop")]
const WINDOW_WIDTH: f64 = 1280.0;
#[cfg(feature = "desktop")]
const WINDOW_HEIGHT: f64 = 860.0;

fn main() -> Result<()> {
    init_logging();

    info!("Starting Hello A v{}", env!("CARGO_PKG_VERSION"));

    let content = SiteContent::bundled().context("bundled site content is invalid")?;
    launch(AppState::new(content));

    Ok(())
}

/// Native builds log through `tracing-subscriber`; the web build uses the
/// Dioxus logger installed at launch.
fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    "helloa=debug,helloa_app=debug,helloa_core=info,helloa_player=info".into()
                }),
            )
            .init();
    }
}

#[cfg(feature = "desktop")]
fn launch(state: AppState) {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let window_builder = WindowBuilder::new()
        .with_title(state.content.site.name.clone())
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    let config = Config::new()
        .with_window(window_builder)
        .with_disable_context_menu(true)
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(state)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch(state: AppState) {
    dioxus::LaunchBuilder::new().with_context(state).launch(App);
}

/// Root component: styles plus the router.
#[component]
fn App() -> Element {
    rsx! {
        // Inject CSS
        style { {include_str!("../assets/styles.css")} }

        Router::<Route> {}
    }
}
