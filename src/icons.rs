//! Process-wide icon emoji list.
//!
//! The picker asks for the flattened list through [`get_icon_emojis`]. The
//! backing flattener is created on first use from the configured source
//! (the bundled catalog unless [`init_icon_emojis`] ran first) and lives
//! for the rest of the process.

use std::sync::OnceLock;

use crate::catalog::CatalogSource;
use crate::flattener::EmojiFlattener;

/// Static storage for the process-wide flattener.
/// Uses OnceLock for safe, one-time initialization.
static ICON_EMOJIS: OnceLock<EmojiFlattener<CatalogSource>> = OnceLock::new();

/// Choose the catalog source for the process-wide list.
///
/// Must run before the first [`get_icon_emojis`] call to take effect.
/// Returns `false` if the list was already set up.
pub fn init_icon_emojis(source: CatalogSource) -> bool {
    let mut source = Some(source);
    ICON_EMOJIS.get_or_init(|| EmojiFlattener::new(source.take().unwrap_or_default()));

    if let Some(rejected) = source {
        crate::warn!(
            "Icon emoji list already initialized, ignoring source {:?}",
            rejected
        );
        return false;
    }

    crate::info!("Icon emoji list initialized");
    true
}

/// Every glyph of the emoji catalog, flattened in category order.
///
/// Computed once per process; later calls return the same slice.
pub fn get_icon_emojis() -> &'static [String] {
    ICON_EMOJIS
        .get_or_init(|| EmojiFlattener::new(CatalogSource::default()))
        .icon_emojis()
}

#[cfg(test)]
#[path = "icons_test.rs"]
mod tests;
