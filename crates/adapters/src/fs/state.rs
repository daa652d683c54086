use std::fs;
use std::path::PathBuf;

use neptune_application::{ApplicationError, NavigationStore};
use neptune_domain::SavedNavigation;
use tracing::debug;

/// Keeps the selected destination in a small JSON file so a rebuilt window
/// comes back on the same tab.
#[derive(Debug, Clone)]
pub struct JsonNavigationStore {
    path: PathBuf,
}

impl JsonNavigationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NavigationStore for JsonNavigationStore {
    fn load(&self) -> Result<Option<SavedNavigation>, ApplicationError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw =
            fs::read_to_string(&self.path).map_err(|error| ApplicationError::Io(error.to_string()))?;
        let saved = serde_json::from_str(&raw)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        Ok(Some(saved))
    }

    fn save(&self, saved: &SavedNavigation) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|error| ApplicationError::Io(error.to_string()))?;
        }
        let json = serde_json::to_string_pretty(saved)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        fs::write(&self.path, json).map_err(|error| ApplicationError::Io(error.to_string()))?;
        debug!(path = %self.path.display(), selected = %saved.selected, "navigation saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_file_means_nothing_saved() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonNavigationStore::new(dir.path().join("navigation.json"));
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn save_creates_parent_and_loads_back() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonNavigationStore::new(dir.path().join("cache/navigation.json"));
        let saved = SavedNavigation {
            selected: "settings".to_string(),
        };
        store.save(&saved).expect("save");
        assert_eq!(store.load().expect("load"), Some(saved));
    }

    #[test]
    fn garbage_file_is_persistence_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("navigation.json");
        fs::write(&path, "{selected").expect("write");
        let store = JsonNavigationStore::new(path);
        assert!(matches!(store.load(), Err(ApplicationError::Persistence(_))));
    }
}
