//! Shared UI components.

mod audio_player;
mod episode_card;
mod episode_content;
mod icons;
mod page_head;
mod site_shell;

pub use audio_player::AudioPlayer;
pub use episode_card::EpisodeCard;
pub use episode_content::EpisodeContent;
pub use icons::{ArrowLeftIcon, ChevronIcon, MailIcon, PlayIcon};
pub use page_head::PageHead;
pub use site_shell::SiteShell;
