//! Player state and its transition function.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use helloa_core::{format_time, progress_percent};

/// Token for one play request. A request resolves only while it is still
/// the pending one; anything older is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayRequest(u64);

/// Inputs to the player: user controls and media notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    /// Play/pause button.
    TogglePlayPause,
    /// The media element started playing.
    PlayStarted(PlayRequest),
    /// The media element refused to start.
    PlayFailed(PlayRequest),
    /// Position report, in seconds.
    TimeUpdate(f64),
    /// Duration became known, in seconds.
    MetadataLoaded(f64),
    /// Progress slider, 0 to 100.
    Seek(f64),
    /// Volume slider, 0 to 100.
    SetVolume(f64),
    /// Mute button.
    ToggleMute,
    /// Playback reached the end of the track.
    Ended,
}

/// Side effects a transition asks of the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    Play(PlayRequest),
    Pause,
    /// Absolute position in seconds.
    SeekTo(f64),
    /// Linear volume, 0.0 to 1.0.
    SetVolume(f64),
    SetMuted(bool),
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: PlayerState,
    pub commands: Vec<MediaCommand>,
}

impl Transition {
    const fn unchanged(state: PlayerState) -> Self {
        Self {
            state,
            commands: Vec::new(),
        }
    }
}

/// Transport state for one player instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub is_playing: bool,
    /// Position in seconds.
    pub current_time: f64,
    /// Duration in seconds; 0 until metadata loads.
    pub total_duration: f64,
    /// Linear volume, 0.0 to 1.0. Kept while muted.
    pub volume: f64,
    pub is_muted: bool,
    /// A play request is in flight or metadata is still loading.
    pub is_loading: bool,
    pending: Option<PlayRequest>,
    next_request: u64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub const fn new() -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            total_duration: 0.0,
            volume: 1.0,
            is_muted: false,
            is_loading: false,
            pending: None,
            next_request: 0,
        }
    }

    /// The play request awaiting resolution, if any.
    pub const fn pending_request(&self) -> Option<PlayRequest> {
        self.pending
    }

    /// Compute the next state and the media commands that go with it.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn apply(self, action: PlayerAction) -> Transition {
        let mut next = self;
        match action {
            PlayerAction::TogglePlayPause => {
                if self.is_playing {
                    next.is_playing = false;
                    next.is_loading = false;
                    next.pending = None;
                    return Transition {
                        state: next,
                        commands: vec![MediaCommand::Pause],
                    };
                }
                let request = PlayRequest(self.next_request);
                next.next_request += 1;
                next.pending = Some(request);
                next.is_loading = true;
                Transition {
                    state: next,
                    commands: vec![MediaCommand::Play(request)],
                }
            }
            PlayerAction::PlayStarted(request) => {
                if self.pending == Some(request) {
                    next.is_playing = true;
                    next.is_loading = false;
                    next.pending = None;
                    return Transition::unchanged(next);
                }
                // Superseded. Stop the element unless a newer request is still
                // on its way, since pausing would reject that one too.
                if self.pending.is_none() && !self.is_playing {
                    return Transition {
                        state: next,
                        commands: vec![MediaCommand::Pause],
                    };
                }
                Transition::unchanged(next)
            }
            PlayerAction::PlayFailed(request) => {
                if self.pending == Some(request) {
                    next.is_loading = false;
                    next.pending = None;
                }
                Transition::unchanged(next)
            }
            PlayerAction::TimeUpdate(seconds) => {
                if seconds.is_finite() && seconds >= 0.0 {
                    next.current_time = seconds;
                }
                Transition::unchanged(next)
            }
            PlayerAction::MetadataLoaded(duration) => {
                next.total_duration = if duration.is_finite() && duration > 0.0 {
                    duration
                } else {
                    0.0
                };
                next.is_loading = false;
                Transition::unchanged(next)
            }
            PlayerAction::Seek(percent) => {
                if !percent.is_finite() || !self.has_duration() {
                    return Transition::unchanged(next);
                }
                let target = percent.clamp(0.0, 100.0) / 100.0 * self.total_duration;
                next.current_time = target;
                Transition {
                    state: next,
                    commands: vec![MediaCommand::SeekTo(target)],
                }
            }
            PlayerAction::SetVolume(percent) => {
                if !percent.is_finite() {
                    return Transition::unchanged(next);
                }
                next.volume = percent.clamp(0.0, 100.0) / 100.0;
                next.is_muted = next.volume == 0.0;
                Transition {
                    state: next,
                    commands: vec![
                        MediaCommand::SetVolume(next.volume),
                        MediaCommand::SetMuted(next.is_muted),
                    ],
                }
            }
            PlayerAction::ToggleMute => {
                next.is_muted = !self.is_muted;
                Transition {
                    state: next,
                    commands: vec![MediaCommand::SetMuted(next.is_muted)],
                }
            }
            PlayerAction::Ended => {
                next.is_playing = false;
                Transition::unchanged(next)
            }
        }
    }

    fn has_duration(&self) -> bool {
        self.total_duration.is_finite() && self.total_duration > 0.0
    }

    /// Progress through the track, 0 to 100.
    pub fn progress(&self) -> f64 {
        progress_percent(self.current_time, self.total_duration)
    }

    /// Volume slider position, 0 to 100. Reads 0 while muted.
    pub fn volume_percent(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume * 100.0
        }
    }

    /// Whether the speaker icon should show as silenced.
    #[allow(clippy::float_cmp)]
    pub fn is_silent(&self) -> bool {
        self.is_muted || self.volume == 0.0
    }

    pub fn elapsed_label(&self) -> String {
        format_time(self.current_time)
    }

    pub fn duration_label(&self) -> String {
        format_time(self.total_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn loaded(duration: f64) -> PlayerState {
        PlayerState::new()
            .apply(PlayerAction::MetadataLoaded(duration))
            .state
    }

    fn start_playing(state: PlayerState) -> PlayerState {
        let transition = state.apply(PlayerAction::TogglePlayPause);
        let request = transition.state.pending_request().unwrap();
        transition.state.apply(PlayerAction::PlayStarted(request)).state
    }

    #[test]
    fn test_initial_state() {
        let state = PlayerState::new();
        assert!(!state.is_playing);
        assert!(!state.is_loading);
        assert!(!state.is_muted);
        assert!((state.volume - 1.0).abs() < f64::EPSILON);
        assert_eq!(state.elapsed_label(), "0:00");
    }

    #[test]
    fn test_play_request_sets_loading() {
        let transition = PlayerState::new().apply(PlayerAction::TogglePlayPause);
        assert!(transition.state.is_loading);
        assert!(!transition.state.is_playing);
        assert!(matches!(transition.commands[..], [MediaCommand::Play(_)]));
        assert!(transition.state.pending_request().is_some());
    }

    #[test]
    fn test_play_success() {
        let state = start_playing(loaded(120.0));
        assert!(state.is_playing);
        assert!(!state.is_loading);
        assert!(state.pending_request().is_none());
    }

    #[test]
    fn test_play_failure_clears_loading_only() {
        let transition = loaded(120.0).apply(PlayerAction::TogglePlayPause);
        let request = transition.state.pending_request().unwrap();
        let state = transition.state.apply(PlayerAction::PlayFailed(request)).state;
        assert!(!state.is_loading);
        assert!(!state.is_playing);
        assert!(state.pending_request().is_none());
    }

    #[test]
    fn test_pause_is_immediate() {
        let state = start_playing(loaded(120.0));
        let transition = state.apply(PlayerAction::TogglePlayPause);
        assert!(!transition.state.is_playing);
        assert_eq!(transition.commands, [MediaCommand::Pause]);
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let first = PlayerState::new().apply(PlayerAction::TogglePlayPause);
        let old = first.state.pending_request().unwrap();
        let second = first.state.apply(PlayerAction::TogglePlayPause);
        let new = second.state.pending_request().unwrap();
        assert_ne!(old, new);

        // The old request resolving does nothing while the new one is pending.
        let stale = second.state.apply(PlayerAction::PlayStarted(old));
        assert!(stale.commands.is_empty());
        assert!(!stale.state.is_playing);
        assert!(stale.state.is_loading);

        let settled = stale.state.apply(PlayerAction::PlayStarted(new)).state;
        assert!(settled.is_playing);
        assert!(!settled.is_loading);
    }

    #[test]
    fn test_stale_success_when_idle_pauses_element() {
        let first = PlayerState::new().apply(PlayerAction::TogglePlayPause);
        let old = first.state.pending_request().unwrap();
        let second = first.state.apply(PlayerAction::TogglePlayPause);
        let new = second.state.pending_request().unwrap();
        let idle = second.state.apply(PlayerAction::PlayFailed(new)).state;
        assert!(idle.pending_request().is_none());

        // The element started on the old request after the UI gave up on it.
        let stale = idle.apply(PlayerAction::PlayStarted(old));
        assert_eq!(stale.commands, [MediaCommand::Pause]);
        assert!(!stale.state.is_playing);
    }

    #[test]
    fn test_stale_failure_is_dropped() {
        let first = PlayerState::new().apply(PlayerAction::TogglePlayPause);
        let old = first.state.pending_request().unwrap();
        let second = first.state.apply(PlayerAction::TogglePlayPause).state;
        let after = second.apply(PlayerAction::PlayFailed(old)).state;
        assert_eq!(after, second);
    }

    #[test]
    fn test_metadata_sets_duration_and_clears_loading() {
        let loading = PlayerState::new().apply(PlayerAction::TogglePlayPause).state;
        let state = loading.apply(PlayerAction::MetadataLoaded(300.0)).state;
        assert!((state.total_duration - 300.0).abs() < f64::EPSILON);
        assert!(!state.is_loading);
        assert_eq!(state.duration_label(), "5:00");
    }

    #[test]
    fn test_malformed_metadata_reads_as_zero() {
        let state = loaded(f64::NAN);
        assert!(state.total_duration.abs() < f64::EPSILON);
        let state = loaded(f64::INFINITY);
        assert!(state.total_duration.abs() < f64::EPSILON);
    }

    #[test]
    fn test_seek_without_duration_is_noop() {
        let state = PlayerState::new()
            .apply(PlayerAction::TimeUpdate(12.0))
            .state;
        let transition = state.apply(PlayerAction::Seek(50.0));
        assert!(transition.commands.is_empty());
        assert_eq!(transition.state, state);
    }

    #[test]
    fn test_seek_clamps_percent() {
        let transition = loaded(200.0).apply(PlayerAction::Seek(150.0));
        assert_eq!(transition.commands, [MediaCommand::SeekTo(200.0)]);
    }

    #[test]
    fn test_time_update_ignores_garbage() {
        let state = PlayerState::new().apply(PlayerAction::TimeUpdate(5.0)).state;
        let state = state.apply(PlayerAction::TimeUpdate(f64::NAN)).state;
        let state = state.apply(PlayerAction::TimeUpdate(-3.0)).state;
        assert!((state.current_time - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_volume_zero_mutes() {
        let transition = PlayerState::new().apply(PlayerAction::SetVolume(0.0));
        assert!(transition.state.is_muted);
        assert_eq!(
            transition.commands,
            [MediaCommand::SetVolume(0.0), MediaCommand::SetMuted(true)]
        );

        let state = transition.state.apply(PlayerAction::SetVolume(40.0)).state;
        assert!(!state.is_muted);
        assert!((state.volume - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_mute_toggle_preserves_volume() {
        let state = PlayerState::new().apply(PlayerAction::SetVolume(65.0)).state;
        let muted = state.apply(PlayerAction::ToggleMute);
        assert!(muted.state.is_muted);
        assert!(muted.state.volume_percent().abs() < f64::EPSILON);
        assert!(muted.state.is_silent());
        assert_eq!(muted.commands, [MediaCommand::SetMuted(true)]);

        let unmuted = muted.state.apply(PlayerAction::ToggleMute).state;
        assert!(!unmuted.is_muted);
        assert!((unmuted.volume - state.volume).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ended_stops_without_advancing() {
        let state = start_playing(loaded(60.0))
            .apply(PlayerAction::TimeUpdate(60.0))
            .state;
        let ended = state.apply(PlayerAction::Ended);
        assert!(!ended.state.is_playing);
        assert!(ended.commands.is_empty());
        assert!((ended.state.current_time - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress() {
        let state = loaded(200.0).apply(PlayerAction::TimeUpdate(50.0)).state;
        assert!((state.progress() - 25.0).abs() < f64::EPSILON);
        let state = PlayerState::new().apply(PlayerAction::TimeUpdate(50.0)).state;
        assert!(state.progress().abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn seek_lands_on_fraction_of_duration(percent in 0.0f64..=100.0, duration in 0.001f64..100_000.0) {
            let state = loaded(duration).apply(PlayerAction::Seek(percent)).state;
            let expected = percent / 100.0 * duration;
            prop_assert!((state.current_time - expected).abs() <= 1e-9 * duration.max(1.0));
        }

        #[test]
        fn mute_twice_restores_volume(percent in 0.0f64..=100.0) {
            let state = PlayerState::new().apply(PlayerAction::SetVolume(percent)).state;
            let restored = state
                .apply(PlayerAction::ToggleMute)
                .state
                .apply(PlayerAction::ToggleMute)
                .state;
            prop_assert_eq!(restored.volume.to_bits(), state.volume.to_bits());
            prop_assert_eq!(restored.is_muted, state.is_muted);
        }

        #[test]
        fn play_failure_never_leaves_loading(toggles in 1usize..6) {
            let mut state = PlayerState::new();
            for _ in 0..toggles {
                state = state.apply(PlayerAction::TogglePlayPause).state;
            }
            if let Some(request) = state.pending_request() {
                state = state.apply(PlayerAction::PlayFailed(request)).state;
            }
            prop_assert!(!state.is_loading);
        }
    }
}
