use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Raster,
    Vector,
    Unsupported,
}

/// Classifies an asset path by extension.
///
/// Adaptive launcher icons ship as `.xml` containers next to their raster
/// foreground layers; only the raster layers can be drawn as card images.
pub fn detect_asset_kind(path: &Path) -> AssetKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return AssetKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "png" | "jpg" | "jpeg" => AssetKind::Raster,
        "xml" | "svg" => AssetKind::Vector,
        _ => AssetKind::Unsupported,
    }
}

/// Path of a raster image relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

impl ImageRef {
    pub fn raster(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        match detect_asset_kind(Path::new(&path)) {
            AssetKind::Raster => Ok(Self(path)),
            AssetKind::Vector => Err(DomainError::NonRasterAsset(path)),
            AssetKind::Unsupported => Err(DomainError::UnsupportedAsset(path)),
        }
    }

    // Only for literals known to classify as raster.
    pub(crate) fn from_static(path: &'static str) -> Self {
        debug_assert_eq!(detect_asset_kind(Path::new(path)), AssetKind::Raster);
        Self(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageRef {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::raster(value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key into the localized string table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelRef(String);

impl LabelRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl Display for LabelRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
