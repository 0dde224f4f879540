//! Emoji flattener.
//!
//! Turns a categorized [`EmojiCatalog`] into one ordered list of glyphs for
//! the icon picker. The list is computed on first use and then handed out
//! unchanged for the lifetime of the flattener; later changes to the
//! underlying catalog are not picked up.

use std::sync::OnceLock;

use crate::catalog::{CatalogProvider, EmojiCatalog};

/// Caching accessor that flattens a catalog into a single glyph list.
pub struct EmojiFlattener<P> {
    /// Where the catalog comes from
    provider: P,
    /// Flattened glyphs, set once on first access
    cache: OnceLock<Box<[String]>>,
}

impl<P: CatalogProvider> EmojiFlattener<P> {
    /// Create a flattener over `provider`; nothing is loaded until first use
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: OnceLock::new(),
        }
    }

    /// All glyphs from all categories, in catalog order.
    ///
    /// The first call loads and flattens the catalog. Every later call
    /// returns the same slice without touching the provider. A provider
    /// error is logged and cached as an empty list.
    pub fn icon_emojis(&self) -> &[String] {
        if let Some(cached) = self.cache.get() {
            crate::trace!("Icon emoji cache hit ({} glyphs)", cached.len());
            return cached;
        }

        self.cache.get_or_init(|| {
            crate::debug!("Icon emoji cache empty, flattening catalog");
            match self.provider.load_catalog() {
                Ok(catalog) => {
                    let glyphs = flatten(&catalog);
                    crate::info!(
                        "Flattened {} icon emojis from {} categories",
                        glyphs.len(),
                        catalog.len()
                    );
                    glyphs.into_boxed_slice()
                }
                Err(e) => {
                    crate::warn!("Failed to load emoji catalog, icon list is empty: {}", e);
                    Box::default()
                }
            }
        })
    }

    /// Whether the glyph list has been computed yet
    pub fn is_computed(&self) -> bool {
        self.cache.get().is_some()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

/// Concatenate the glyphs of every category, preserving category order and
/// entry order. Empty categories and entries without a glyph are skipped.
pub fn flatten(catalog: &EmojiCatalog) -> Vec<String> {
    let mut glyphs = Vec::with_capacity(catalog.entry_count());

    for category in catalog.categories() {
        if category.entries.is_empty() {
            continue;
        }
        glyphs.extend(
            category
                .entries
                .iter()
                .filter_map(|entry| entry.glyph())
                .map(str::to_owned),
        );
    }

    glyphs
}

#[cfg(test)]
#[path = "flattener_test.rs"]
mod tests;
