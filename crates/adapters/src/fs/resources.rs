use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageReader;
use neptune_application::{ApplicationError, RasterImage, ResourceProvider};
use neptune_domain::{ImageRef, LabelRef};
use tracing::{debug, warn};

/// Resolves images under an asset root and labels from a JSON string table.
/// Decode outcomes, failures included, are memoized per path for the lifetime
/// of the provider.
#[derive(Debug)]
pub struct FsResourceProvider {
    assets_root: PathBuf,
    strings: HashMap<String, String>,
    decoded: RefCell<HashMap<String, RasterImage>>,
    failed: RefCell<HashMap<String, String>>,
}

impl FsResourceProvider {
    pub fn new(assets_root: impl Into<PathBuf>, strings: HashMap<String, String>) -> Self {
        Self {
            assets_root: assets_root.into(),
            strings,
            decoded: RefCell::new(HashMap::new()),
            failed: RefCell::new(HashMap::new()),
        }
    }

    /// Builds a provider whose string table is read from `strings_path`. A
    /// missing table is not an error; every label then reports missing.
    pub fn open(
        assets_root: impl Into<PathBuf>,
        strings_path: &Path,
    ) -> Result<Self, ApplicationError> {
        let strings = if strings_path.exists() {
            load_string_table(strings_path)?
        } else {
            debug!(path = %strings_path.display(), "string table not found");
            HashMap::new()
        };
        Ok(Self::new(assets_root, strings))
    }

    fn decode(&self, image: &ImageRef) -> Result<RasterImage, ApplicationError> {
        let path = self.assets_root.join(image.as_str());
        if !path.is_file() {
            return Err(ApplicationError::missing_asset(
                image.as_str(),
                format!("no file at {}", path.display()),
            ));
        }

        let decoded = ImageReader::open(&path)
            .map_err(|error| ApplicationError::missing_asset(image.as_str(), error.to_string()))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::missing_asset(image.as_str(), error.to_string()))?
            .decode()
            .map_err(|error| ApplicationError::missing_asset(image.as_str(), error.to_string()))?
            .to_rgba8();

        debug!(image = %image, width = decoded.width(), height = decoded.height(), "decoded asset");
        Ok(RasterImage {
            key: image.as_str().to_string(),
            width: decoded.width(),
            height: decoded.height(),
            rgba: Arc::from(decoded.into_raw()),
        })
    }
}

impl ResourceProvider for FsResourceProvider {
    fn resolve_image(&self, image: &ImageRef) -> Result<RasterImage, ApplicationError> {
        if let Some(cached) = self.decoded.borrow().get(image.as_str()) {
            return Ok(cached.clone());
        }
        if let Some(reason) = self.failed.borrow().get(image.as_str()) {
            return Err(ApplicationError::missing_asset(image.as_str(), reason.clone()));
        }
        match self.decode(image) {
            Ok(raster) => {
                self.decoded
                    .borrow_mut()
                    .insert(image.as_str().to_string(), raster.clone());
                Ok(raster)
            }
            Err(error) => {
                warn!(image = %image, %error, "asset unavailable");
                let reason = match &error {
                    ApplicationError::MissingAsset { reason, .. } => reason.clone(),
                    other => other.to_string(),
                };
                self.failed
                    .borrow_mut()
                    .insert(image.as_str().to_string(), reason);
                Err(error)
            }
        }
    }

    fn resolve_label(&self, label: &LabelRef) -> Result<String, ApplicationError> {
        self.strings
            .get(label.key())
            .cloned()
            .ok_or_else(|| ApplicationError::missing_asset(label.key(), "no entry in string table"))
    }
}

pub fn load_string_table(path: &Path) -> Result<HashMap<String, String>, ApplicationError> {
    let raw = fs::read_to_string(path).map_err(|error| ApplicationError::Io(error.to_string()))?;
    serde_json::from_str(&raw).map_err(|error| {
        ApplicationError::Decode(format!("string table {}: {error}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(root: &Path, relative: &str, width: u32, height: u32) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        RgbaImage::from_pixel(width, height, Rgba([200_u8, 120, 80, 255]))
            .save(&path)
            .expect("save png");
    }

    fn strings() -> HashMap<String, String> {
        HashMap::from([("manilla_clam".to_string(), "Manilla Clam".to_string())])
    }

    #[test]
    fn resolves_raster_pixels() {
        let dir = TempDir::new().expect("tempdir");
        write_png(dir.path(), "mipmap/clam.png", 6, 4);
        let provider = FsResourceProvider::new(dir.path(), strings());

        let image = provider
            .resolve_image(&ImageRef::raster("mipmap/clam.png").expect("ref"))
            .expect("image");
        assert_eq!((image.width, image.height), (6, 4));
        assert_eq!(image.rgba.len(), 6 * 4 * 4);
        assert_eq!(&image.rgba[..4], &[200, 120, 80, 255]);
    }

    #[test]
    fn decoded_images_are_memoized() {
        let dir = TempDir::new().expect("tempdir");
        write_png(dir.path(), "clam.png", 2, 2);
        let provider = FsResourceProvider::new(dir.path(), strings());
        let image_ref = ImageRef::raster("clam.png").expect("ref");

        let first = provider.resolve_image(&image_ref).expect("first");
        fs::remove_file(dir.path().join("clam.png")).expect("remove");
        let second = provider.resolve_image(&image_ref).expect("cached");
        assert!(Arc::ptr_eq(&first.rgba, &second.rgba));
    }

    #[test]
    fn missing_file_is_missing_asset() {
        let dir = TempDir::new().expect("tempdir");
        let provider = FsResourceProvider::new(dir.path(), strings());
        let result = provider.resolve_image(&ImageRef::raster("nope.png").expect("ref"));
        assert!(matches!(result, Err(ApplicationError::MissingAsset { .. })));
    }

    #[test]
    fn failed_lookups_are_remembered() {
        let dir = TempDir::new().expect("tempdir");
        let provider = FsResourceProvider::new(dir.path(), strings());
        let image_ref = ImageRef::raster("late.png").expect("ref");

        assert!(provider.resolve_image(&image_ref).is_err());
        write_png(dir.path(), "late.png", 2, 2);
        let second = provider.resolve_image(&image_ref);
        assert!(matches!(
            second,
            Err(ApplicationError::MissingAsset { ref resource, .. }) if resource == "late.png"
        ));
    }

    #[test]
    fn corrupt_file_is_missing_asset() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("broken.png"), b"not a png").expect("write");
        let provider = FsResourceProvider::new(dir.path(), strings());
        let result = provider.resolve_image(&ImageRef::raster("broken.png").expect("ref"));
        assert!(matches!(result, Err(ApplicationError::MissingAsset { .. })));
    }

    #[test]
    fn labels_come_from_string_table() {
        let dir = TempDir::new().expect("tempdir");
        let table = dir.path().join("strings.json");
        fs::write(&table, r#"{"manilla_clam": "Manilla Clam"}"#).expect("write");
        let provider = FsResourceProvider::open(dir.path(), &table).expect("open");

        assert_eq!(
            provider
                .resolve_label(&LabelRef::new("manilla_clam"))
                .expect("label"),
            "Manilla Clam"
        );
        assert!(matches!(
            provider.resolve_label(&LabelRef::new("geoduck")),
            Err(ApplicationError::MissingAsset { .. })
        ));
    }

    #[test]
    fn malformed_string_table_is_decode_error() {
        let dir = TempDir::new().expect("tempdir");
        let table = dir.path().join("strings.json");
        fs::write(&table, "[1, 2]").expect("write");
        assert!(matches!(
            FsResourceProvider::open(dir.path(), &table),
            Err(ApplicationError::Decode(_))
        ));
    }
}
