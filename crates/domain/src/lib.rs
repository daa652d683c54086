mod asset;
mod catalog;
mod destination;
mod error;
mod grid;
mod navigation;

pub use asset::{detect_asset_kind, AssetKind, ImageRef, LabelRef};
pub use catalog::{
    placeholder_catalog, CatalogEntry, PLACEHOLDER_ENTRY_COUNT, PLACEHOLDER_IMAGE,
    PLACEHOLDER_LABEL,
};
pub use destination::{
    Destination, DestinationIcon, DestinationId, DestinationTable, VectorGlyph,
};
pub use error::DomainError;
pub use grid::{
    visible_rows, CardStyle, CropWindow, GridLayout, GridPlacement, GridSpec, TextRole,
    Viewport,
};
pub use navigation::{NavigationState, SavedNavigation};
