mod catalog;
mod resources;
mod state;

pub use catalog::{PlaceholderCatalogSource, WalkdirCatalogSource};
pub use resources::{load_string_table, FsResourceProvider};
pub use state::JsonNavigationStore;
