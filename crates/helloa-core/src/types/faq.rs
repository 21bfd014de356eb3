//! FAQ record.

use serde::{Deserialize, Serialize};

/// A single question and answer, as bundled in `faq.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    /// Display group. Empty means the default category.
    #[serde(default)]
    pub category: String,
    /// Authoring hint carried through from the data file. Display order
    /// is catalog order.
    #[serde(default)]
    pub order: i32,
}

impl FaqItem {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            order: 0,
        }
    }
}
