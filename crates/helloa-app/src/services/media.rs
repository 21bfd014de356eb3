//! `<audio>` element backend for the player.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use helloa_core::{Error, Result};
use helloa_player::MediaElement;
use tracing::{debug, trace};

static NEXT_ELEMENT: AtomicUsize = AtomicUsize::new(0);

/// Handle to one rendered `<audio>` element, addressed by DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomMedia {
    index: usize,
}

impl DomMedia {
    /// Allocate a handle for a newly mounted player.
    pub fn allocate() -> Self {
        Self {
            index: NEXT_ELEMENT.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The `id` attribute the element must be rendered with.
    pub fn dom_id(self) -> String {
        format!("helloa-audio-{}", self.index)
    }

    /// Run a script with `el` bound to the element.
    fn script(self, body: &str) -> document::Eval {
        let id = self.dom_id();
        trace!("Media script on #{id}: {body}");
        document::eval(&format!(
            r#"const el = document.getElementById("{id}");
            if (!el) {{ throw new Error("audio element #{id} is not mounted"); }}
            {body}"#
        ))
    }

    async fn read_number(self, expression: &str) -> Option<f64> {
        let value = self
            .script(&format!("const v = {expression}; return Number.isFinite(v) ? v : null;"))
            .join::<Option<f64>>()
            .await;
        match value {
            Ok(value) => value,
            Err(e) => {
                debug!("Could not read media property {expression}: {e:?}");
                None
            }
        }
    }
}

impl MediaElement for DomMedia {
    async fn play(&self) -> Result<()> {
        self.script("await el.play(); return true;")
            .join::<bool>()
            .await
            .map(|_| ())
            .map_err(|e| Error::PlaybackStart(format!("{e:?}")))
    }

    fn pause(&self) {
        let _ = self.script("el.pause(); return true;");
    }

    fn seek_to(&self, seconds: f64) -> Result<()> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(Error::Seek(format!("invalid position {seconds}")));
        }
        let _ = self.script(&format!("el.currentTime = {seconds}; return true;"));
        Ok(())
    }

    fn set_volume(&self, volume: f64) {
        let volume = volume.clamp(0.0, 1.0);
        let _ = self.script(&format!("el.volume = {volume}; return true;"));
    }

    fn set_muted(&self, muted: bool) {
        let _ = self.script(&format!("el.muted = {muted}; return true;"));
    }

    async fn current_time(&self) -> Option<f64> {
        self.read_number("el.currentTime").await
    }

    async fn duration(&self) -> Option<f64> {
        self.read_number("el.duration").await
    }
}
