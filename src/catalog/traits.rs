//! Catalog provider trait.
//!
//! Decouples the flattener from where the catalog comes from, so the same
//! cache can sit in front of the bundled data, a file on disk, or an
//! in-memory catalog built by a test.

use super::{CatalogError, EmojiCatalog};

/// Source of an [`EmojiCatalog`].
///
/// Implementations are asked at most once per flattener, on its first call.
pub trait CatalogProvider: Send + Sync {
    /// Produce the catalog to flatten.
    fn load_catalog(&self) -> Result<EmojiCatalog, CatalogError>;
}

impl CatalogProvider for EmojiCatalog {
    fn load_catalog(&self) -> Result<EmojiCatalog, CatalogError> {
        Ok(self.clone())
    }
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for Box<P> {
    fn load_catalog(&self) -> Result<EmojiCatalog, CatalogError> {
        (**self).load_catalog()
    }
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
