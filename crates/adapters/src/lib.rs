pub mod content;
pub mod fs;
pub mod presenters;

pub use content::PlaceholderContent;
pub use fs::{
    load_string_table, FsResourceProvider, JsonNavigationStore, PlaceholderCatalogSource,
    WalkdirCatalogSource,
};
pub use presenters::{present_chrome_item, present_placement, present_view};
