//! Page views, one per route.

mod about;
mod episode;
mod faq;
mod home;
mod not_found;

pub use about::About;
pub use episode::EpisodeDetail;
pub use faq::Faq;
pub use home::Home;
pub use not_found::NotFound;
