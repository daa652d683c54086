use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use neptune_domain::{CatalogEntry, DestinationId, ImageRef, LabelRef, SavedNavigation};

use crate::ApplicationError;

/// Decoded RGBA8 pixels, shared between cards that reference the same asset.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub key: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<[u8]>,
}

impl Debug for RasterImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("key", &self.key)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

pub trait ResourceProvider {
    fn resolve_image(&self, image: &ImageRef) -> Result<RasterImage, ApplicationError>;

    fn resolve_label(&self, label: &LabelRef) -> Result<String, ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescription {
    pub heading: String,
    pub body: String,
}

/// Content shown for a destination the catalog grid does not own.
pub trait DestinationContent {
    fn render(&self) -> ViewDescription;
}

pub trait RenderScheduler {
    fn request_render(&self, destination: DestinationId);
}

pub trait NavigationStore {
    fn load(&self) -> Result<Option<SavedNavigation>, ApplicationError>;

    fn save(&self, saved: &SavedNavigation) -> Result<(), ApplicationError>;
}

pub trait CatalogSource {
    fn load_entries(&self) -> Result<Vec<CatalogEntry>, ApplicationError>;
}
