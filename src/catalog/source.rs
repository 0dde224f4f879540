// Catalog sources - the bundled emoji list or a JSON file on disk

use std::fs;
use std::path::{Path, PathBuf};

use super::{CatalogError, CatalogProvider, EmojiCatalog};

/// Emoji list compiled into the crate
const BUNDLED_CATALOG: &str = include_str!("../../assets/emoji-list.json");

/// Directory under the user's config dir that may hold an override catalog
const CONFIG_DIR_NAME: &str = "emoji-icons";

/// File name of the catalog, both bundled and on disk
pub const CATALOG_FILE_NAME: &str = "emoji-list.json";

/// Where the emoji catalog is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog shipped with the crate
    #[default]
    Bundled,
    /// A JSON catalog file on disk
    File(PathBuf),
}

impl CatalogSource {
    /// Path of the per-user override catalog, whether or not it exists
    pub fn default_path() -> Result<PathBuf, CatalogError> {
        let config_dir = dirs::config_dir().ok_or(CatalogError::ConfigDirNotFound)?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CATALOG_FILE_NAME))
    }

    /// Use the per-user override catalog if present, else the bundled one
    pub fn from_default_location() -> Self {
        match Self::default_path() {
            Ok(path) => Self::from_override(path),
            Err(e) => {
                crate::debug!("{}, using bundled catalog", e);
                Self::Bundled
            }
        }
    }

    /// Use `path` if it exists, else the bundled catalog
    pub fn from_override(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.exists() {
            crate::debug!("Using catalog override at {:?}", path);
            Self::File(path)
        } else {
            crate::debug!("No catalog override at {:?}, using bundled catalog", path);
            Self::Bundled
        }
    }
}

impl CatalogProvider for CatalogSource {
    fn load_catalog(&self) -> Result<EmojiCatalog, CatalogError> {
        match self {
            Self::Bundled => EmojiCatalog::from_json_str(BUNDLED_CATALOG),
            Self::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> Result<EmojiCatalog, CatalogError> {
    crate::debug!("Loading emoji catalog from {:?}", path);

    let content = fs::read_to_string(path)
        .map_err(|e| CatalogError::Load(format!("{}: {}", path.display(), e)))?;

    let catalog = EmojiCatalog::from_json_str(&content)?;

    crate::info!(
        "Loaded {} emoji categories from {:?}",
        catalog.len(),
        path
    );
    Ok(catalog)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
