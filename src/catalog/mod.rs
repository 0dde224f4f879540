// Emoji catalog module - typed category/entry model and the sources it loads from

mod entry;
mod model;
mod source;
mod traits;

pub use entry::EmojiEntry;
pub use model::{CatalogError, EmojiCatalog, EmojiCategory};
pub use source::{CatalogSource, CATALOG_FILE_NAME};
pub use traits::CatalogProvider;
