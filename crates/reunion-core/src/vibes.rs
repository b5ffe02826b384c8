//! Ordered, duplicate-free vibe selection for one traveler.

use serde::{Deserialize, Serialize};

use crate::types::VibeOption;

/// One row of the numbered selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VibeListItem {
    /// 1-based position shown to the traveler
    pub number: usize,
    pub tag: String,
    pub label: String,
}

/// Tags in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VibeSelection(Vec<String>);

impl VibeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tag` unless it is empty or already selected.
    ///
    /// Returns whether the selection changed.
    pub fn add(&mut self, tag: &str) -> bool {
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Remove `tag` if present. Returns whether the selection changed.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-joined hidden field value
    pub fn to_field_string(&self) -> String {
        self.0.join(",")
    }

    /// Numbered display list, rebuilt from scratch on every call.
    pub fn list_items(&self) -> Vec<VibeListItem> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, tag)| VibeListItem {
                number: i + 1,
                tag: tag.clone(),
                label: VibeOption::label_for(tag).to_string(),
            })
            .collect()
    }
}

impl From<Vec<&str>> for VibeSelection {
    fn from(tags: Vec<&str>) -> Self {
        let mut selection = Self::new();
        for tag in tags {
            selection.add(tag);
        }
        selection
    }
}
