//! Player state held in a Dioxus signal.

use dioxus::prelude::*;
use helloa_player::{PlayerState, PlayerStore};

/// A player's state cell. Storing re-renders the owning component.
#[derive(Clone, Copy)]
pub struct SignalStore(pub Signal<PlayerState>);

impl PlayerStore for SignalStore {
    fn load(&self) -> PlayerState {
        *self.0.peek()
    }

    fn store(&mut self, state: PlayerState) {
        self.0.set(state);
    }
}
