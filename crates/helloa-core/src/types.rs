//! Core domain types for the site.

pub mod common;
pub mod episode;
pub mod faq;
pub mod host;

pub use common::{format_time, progress_percent, DateStyle};
pub use episode::Episode;
pub use faq::FaqItem;
pub use host::{Host, Topic};
