//! Runs player transitions against a media element.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::media::MediaElement;
use crate::state::{MediaCommand, PlayerAction, PlayerState};

/// Where the current player state lives between transitions.
///
/// The UI keeps it in a reactive cell and re-renders on `store`; tests keep
/// a bare [`PlayerState`].
pub trait PlayerStore {
    fn load(&self) -> PlayerState;
    fn store(&mut self, state: PlayerState);
}

impl PlayerStore for PlayerState {
    fn load(&self) -> PlayerState {
        *self
    }

    fn store(&mut self, state: PlayerState) {
        *self = state;
    }
}

/// Carry out one media command.
///
/// Returns the follow-up action for commands that resolve later (play).
/// Failures never propagate: a refused play becomes
/// [`PlayerAction::PlayFailed`], a refused seek is dropped.
pub async fn execute<M: MediaElement>(media: &M, command: MediaCommand) -> Option<PlayerAction> {
    match command {
        MediaCommand::Play(request) => match media.play().await {
            Ok(()) => Some(PlayerAction::PlayStarted(request)),
            Err(e) => {
                warn!("Error playing audio: {e}");
                Some(PlayerAction::PlayFailed(request))
            }
        },
        MediaCommand::Pause => {
            media.pause();
            None
        }
        MediaCommand::SeekTo(seconds) => {
            if let Err(e) = media.seek_to(seconds) {
                debug!("Ignoring seek to {seconds:.1}s: {e}");
            }
            None
        }
        MediaCommand::SetVolume(volume) => {
            media.set_volume(volume);
            None
        }
        MediaCommand::SetMuted(muted) => {
            media.set_muted(muted);
            None
        }
    }
}

/// Apply an action and everything it sets off.
///
/// State is re-read from the store before each step, so other dispatches
/// that ran while a play request was suspended are taken into account.
pub async fn dispatch<M, S>(media: &M, store: &mut S, action: PlayerAction)
where
    M: MediaElement,
    S: PlayerStore,
{
    let mut queue = VecDeque::from([action]);

    while let Some(action) = queue.pop_front() {
        let transition = store.load().apply(action);
        trace!("Player {:?} -> {:?}", action, transition.state);
        store.store(transition.state);

        for command in transition.commands {
            debug!("Media command: {:?}", command);
            if let Some(follow_up) = execute(media, command).await {
                queue.push_back(follow_up);
            }
        }
    }
}
