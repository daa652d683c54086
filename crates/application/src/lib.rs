mod catalog;
mod error;
mod navigation;
mod ports;
mod use_cases;

pub use catalog::{CardDescription, CardImage, CatalogGridView};
pub use error::ApplicationError;
pub use navigation::{ChromeItem, ContentRoute, NavigationController};
pub use ports::{
    CatalogSource, DestinationContent, NavigationStore, RasterImage, RenderScheduler,
    ResourceProvider, ViewDescription,
};
pub use use_cases::{
    LoadCatalogCommand, PersistNavigationCommand, RestoreNavigationCommand, SelectByKeyCommand,
    SelectDestinationCommand,
};
