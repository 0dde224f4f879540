// Flattened emoji list for the icon picker widget.
// The picker shows every emoji from the categorized catalog as one list,
// computed once and reused for the life of the process.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
mod flattener;
mod icons;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use catalog::{
    CatalogError, CatalogProvider, CatalogSource, EmojiCatalog, EmojiCategory, EmojiEntry,
};
pub use flattener::{flatten, EmojiFlattener};
pub use icons::{get_icon_emojis, init_icon_emojis};
