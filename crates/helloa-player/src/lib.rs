//! # helloa-player
//!
//! Audio player for episode pages.
//!
//! - [`PlayerState`]: plain state with a pure transition function
//! - [`MediaElement`]: the capability set the player needs from a media backend
//! - [`dispatch`]: runs a transition, executes its commands, and feeds the
//!   results back in until the state settles

pub mod driver;
pub mod media;
pub mod state;

pub use driver::{dispatch, execute, PlayerStore};
pub use media::{MediaElement, MediaEvent};
pub use state::{MediaCommand, PlayRequest, PlayerAction, PlayerState, Transition};
