//! About page records.

use serde::{Deserialize, Serialize};

/// A show host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Host {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Absolute avatar image URL.
    pub avatar: String,
}

/// A "What we cover" card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub title: String,
    pub summary: String,
}
