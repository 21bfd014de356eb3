//! The media backend the player drives.

use helloa_core::Result;

use crate::state::PlayerAction;

/// Capabilities the player needs from an audio element.
///
/// The browser `<audio>` element is the production backend; anything that
/// can play, pause, seek, and report its position can stand in for it.
#[allow(async_fn_in_trait)]
pub trait MediaElement {
    /// Ask playback to start. Resolves once the element is actually playing.
    async fn play(&self) -> Result<()>;

    fn pause(&self);

    /// Move the play head. Sources without range support may refuse.
    fn seek_to(&self, seconds: f64) -> Result<()>;

    /// Linear volume, 0.0 to 1.0.
    fn set_volume(&self, volume: f64);

    fn set_muted(&self, muted: bool);

    /// Current position in seconds, if the element can report it.
    async fn current_time(&self) -> Option<f64>;

    /// Duration in seconds, if known.
    async fn duration(&self) -> Option<f64>;
}

/// Notifications a media element delivers on its own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    TimeUpdate,
    LoadedMetadata,
    Ended,
}

impl MediaEvent {
    /// Read whatever the event refers to and turn it into a player action.
    pub async fn resolve<M: MediaElement>(self, media: &M) -> Option<PlayerAction> {
        match self {
            Self::TimeUpdate => media.current_time().await.map(PlayerAction::TimeUpdate),
            Self::LoadedMetadata => Some(PlayerAction::MetadataLoaded(
                media.duration().await.unwrap_or(0.0),
            )),
            Self::Ended => Some(PlayerAction::Ended),
        }
    }
}
