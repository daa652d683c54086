use std::path::{Path, PathBuf};

use neptune_application::{ApplicationError, CatalogSource};
use neptune_domain::{
    detect_asset_kind, placeholder_catalog, AssetKind, CatalogEntry, ImageRef, LabelRef,
};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PlaceholderCatalogSource {
    pub count: usize,
}

impl CatalogSource for PlaceholderCatalogSource {
    fn load_entries(&self) -> Result<Vec<CatalogEntry>, ApplicationError> {
        Ok(placeholder_catalog(self.count))
    }
}

/// Builds one entry per raster image under `root`, ordered by relative path.
/// The label key is the file stem; vector containers and other files are skipped.
#[derive(Debug, Clone)]
pub struct WalkdirCatalogSource {
    root: PathBuf,
    assets_root: PathBuf,
}

impl WalkdirCatalogSource {
    /// `root` must live inside `assets_root`; image refs are stored relative to
    /// the asset root so the resource provider can resolve them.
    pub fn new(root: impl Into<PathBuf>, assets_root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            assets_root: assets_root.into(),
        }
    }
}

impl CatalogSource for WalkdirCatalogSource {
    fn load_entries(&self) -> Result<Vec<CatalogEntry>, ApplicationError> {
        if !self.root.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "catalog directory does not exist or is not a directory: {}",
                self.root.display()
            )));
        }

        let root = canonical(&self.root)?;
        let assets_root = canonical(&self.assets_root)?;

        let mut scanned = 0_usize;
        let mut entries = Vec::new();
        for entry in WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            scanned += 1;

            let path = entry.path();
            if detect_asset_kind(path) != AssetKind::Raster {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let relative = relative_asset_path(path, &assets_root)?;
            entries.push(CatalogEntry::new(
                ImageRef::raster(relative)?,
                LabelRef::new(stem),
            ));
        }

        debug!(
            root = %self.root.display(),
            scanned,
            entries = entries.len(),
            "catalog directory scanned"
        );
        Ok(entries)
    }
}

fn canonical(path: &Path) -> Result<PathBuf, ApplicationError> {
    path.canonicalize().map_err(|error| {
        ApplicationError::InvalidInput(format!("cannot resolve {}: {error}", path.display()))
    })
}

fn relative_asset_path(path: &Path, assets_root: &Path) -> Result<String, ApplicationError> {
    let relative = path.strip_prefix(assets_root).map_err(|_| {
        ApplicationError::InvalidInput(format!(
            "{} is outside the asset root {}",
            path.display(),
            assets_root.display()
        ))
    })?;
    let parts: Vec<_> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}
