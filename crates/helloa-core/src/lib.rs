//! # helloa-core
//!
//! Core types, catalogs, and error handling for the Hello A Podcast site.
//!
//! Everything here is plain data and pure functions: the episode and FAQ
//! catalogs bundled at build time, the site shell state, share links and
//! page metadata. The UI crate renders on top of it.

pub mod catalog;
pub mod error;
pub mod faq;
pub mod share;
pub mod shell;
pub mod site;
pub mod types;

pub use catalog::{Catalog, HomeListing, REGULAR_EPISODE_LIMIT};
pub use error::{Error, Result};
pub use faq::{FaqCatalog, FaqCategory, FaqToggles, DEFAULT_FAQ_CATEGORY};
pub use share::{SharePlatform, ShareTarget};
pub use shell::{NavLink, ShellState};
pub use site::{
    PageMeta, SiteConfig, SiteContent, OG_LOCALE, OG_TYPE_ARTICLE, OG_TYPE_WEBSITE, TWITTER_CARD,
};
pub use types::*;
