//! FAQ catalog grouped by category, and the accordion open set.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::collections::{BTreeSet, HashMap};

use crate::error::Result;
use crate::types::FaqItem;

/// Label used for items with an empty category.
pub const DEFAULT_FAQ_CATEGORY: &str = "General";

/// One category heading and the catalog indices filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCategory {
    pub label: String,
    /// Indices into the catalog, in catalog order.
    pub items: Vec<usize>,
}

/// The FAQ items plus their grouping, built once at load.
///
/// Categories appear in the order their first item appears in the
/// catalog. Within a category, items keep catalog order. Both follow
/// from the single forward pass in [`FaqCatalog::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqCatalog {
    items: Vec<FaqItem>,
    categories: Vec<FaqCategory>,
}

impl FaqCatalog {
    pub fn new(items: Vec<FaqItem>) -> Self {
        let mut categories: Vec<FaqCategory> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (index, item) in items.iter().enumerate() {
            // Only the empty string defaults; labels are otherwise taken verbatim.
            let label = match item.category.as_str() {
                "" => DEFAULT_FAQ_CATEGORY,
                label => label,
            };
            let position = *positions.entry(label.to_string()).or_insert_with(|| {
                categories.push(FaqCategory {
                    label: label.to_string(),
                    items: Vec::new(),
                });
                categories.len() - 1
            });
            categories[position].items.push(index);
        }

        Self { items, categories }
    }

    /// Parse the `faq.json` format.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<FaqItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    pub fn categories(&self) -> &[FaqCategory] {
        &self.categories
    }

    /// Iterate a category's items paired with their catalog index.
    pub fn category_items<'a>(
        &'a self,
        category: &'a FaqCategory,
    ) -> impl Iterator<Item = (usize, &'a FaqItem)> + 'a {
        category
            .items
            .iter()
            .filter_map(move |&index| self.items.get(index).map(|item| (index, item)))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Which accordion entries are expanded, keyed by catalog index.
///
/// Each entry toggles independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqToggles {
    open: BTreeSet<usize>,
}

impl FaqToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one entry. Returns whether it is now open.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open.remove(&index) {
            false
        } else {
            self.open.insert(index);
            true
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// DOM id of an entry's answer panel.
    pub fn answer_id(index: usize) -> String {
        format!("faq-answer-{index}")
    }
}
