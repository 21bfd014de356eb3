//! Browser integration.
//!
//! This module connects the UI to the page it runs in:
//! - The `<audio>` element behind each player
//! - The clipboard, for the copy-link action

pub mod clipboard;
pub mod media;

pub use media::DomMedia;
