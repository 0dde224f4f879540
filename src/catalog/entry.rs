// Emoji entry - a single record in a catalog category

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single emoji record from the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmojiEntry {
    /// The glyph itself (e.g., "😀")
    #[serde(default, deserialize_with = "lenient_string")]
    pub emoji: Option<String>,
    /// Human readable name (e.g., "grinning face")
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Shortcode without colons (e.g., "grinning")
    #[serde(default, alias = "short_code", deserialize_with = "lenient_string")]
    pub shortcode: Option<String>,
}

impl EmojiEntry {
    /// Create an entry carrying only a glyph
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            emoji: Some(glyph.into()),
            ..Self::default()
        }
    }

    /// Set the human readable name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the shortcode
    pub fn with_shortcode(mut self, shortcode: impl Into<String>) -> Self {
        self.shortcode = Some(shortcode.into());
        self
    }

    /// The glyph to show for this entry.
    ///
    /// Returns `None` when the `emoji` field is absent or empty, in which
    /// case the entry does not contribute to a flattened list.
    pub fn glyph(&self) -> Option<&str> {
        self.emoji.as_deref().filter(|glyph| !glyph.is_empty())
    }
}

/// Optional string field; any non-string value reads as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;
