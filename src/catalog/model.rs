// Emoji catalog - ordered mapping of category name to emoji entries
// Decoding is permissive: malformed categories and entries are skipped, not fatal

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::EmojiEntry;

/// Error types for catalog operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog
    #[error("Failed to load catalog: {0}")]
    Load(String),
    /// Catalog document is not a JSON object of categories
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
    /// No per-user config directory on this platform
    #[error("Could not determine config directory")]
    ConfigDirNotFound,
}

/// A named category and its entries, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiCategory {
    pub name: String,
    pub entries: Vec<EmojiEntry>,
}

/// Ordered collection of emoji categories.
///
/// Category order is insertion order. When decoded from JSON it follows the
/// key order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiCatalog {
    categories: Vec<EmojiCategory>,
}

impl EmojiCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category, or replace the entries of an existing category
    /// with the same name while keeping its position
    pub fn push_category(&mut self, name: impl Into<String>, entries: Vec<EmojiEntry>) {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.entries = entries,
            None => self.categories.push(EmojiCategory { name, entries }),
        }
    }

    /// Remove a category by name, returning it if it was present
    pub fn remove_category(&mut self, name: &str) -> Option<EmojiCategory> {
        let index = self.categories.iter().position(|c| c.name == name)?;
        Some(self.categories.remove(index))
    }

    /// Builder form of [`push_category`](Self::push_category)
    pub fn with_category(mut self, name: impl Into<String>, entries: Vec<EmojiEntry>) -> Self {
        self.push_category(name, entries);
        self
    }

    pub fn categories(&self) -> &[EmojiCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&EmojiCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of entries across all categories
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Decode a catalog from a JSON object of `category -> [entry, ...]`
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Decode a single category value, skipping anything that isn't an entry
    fn decode_entries(category: &str, value: Value) -> Option<Vec<EmojiEntry>> {
        let items = match value {
            Value::Array(items) => items,
            Value::Null => {
                crate::warn!("Skipping category '{}': no entry list", category);
                return None;
            }
            other => {
                crate::warn!(
                    "Skipping category '{}': expected a list, found {}",
                    category,
                    json_kind(&other)
                );
                return None;
            }
        };

        let entries = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<EmojiEntry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    crate::debug!("Skipping entry {} in category '{}': {}", index, category, e);
                    None
                }
            })
            .collect();

        Some(entries)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = EmojiCatalog;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category name to emoji entries")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut catalog = EmojiCatalog::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            // A later duplicate key replaces the earlier value, even when it is unusable
            match EmojiCatalog::decode_entries(&name, value) {
                Some(entries) => catalog.push_category(name, entries),
                None => {
                    catalog.remove_category(&name);
                }
            }
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for EmojiCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

impl Serialize for EmojiCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.entries)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
