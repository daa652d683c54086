use serde::{Deserialize, Serialize};

use crate::{ImageRef, LabelRef};

pub const PLACEHOLDER_IMAGE: &str = "mipmap/manilla_clam_foreground.png";
pub const PLACEHOLDER_LABEL: &str = "manilla_clam";
pub const PLACEHOLDER_ENTRY_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub image: ImageRef,
    pub label: LabelRef,
}

impl CatalogEntry {
    pub fn new(image: ImageRef, label: LabelRef) -> Self {
        Self { image, label }
    }
}

/// Repeats the manilla clam card `count` times.
pub fn placeholder_catalog(count: usize) -> Vec<CatalogEntry> {
    let entry = CatalogEntry::new(
        ImageRef::from_static(PLACEHOLDER_IMAGE),
        LabelRef::new(PLACEHOLDER_LABEL),
    );
    vec![entry; count]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_catalog_repeats_the_clam() {
        let entries = placeholder_catalog(PLACEHOLDER_ENTRY_COUNT);
        assert_eq!(entries.len(), 10);
        assert!(entries
            .iter()
            .all(|entry| entry.label.key() == "manilla_clam"
                && entry.image.as_str() == PLACEHOLDER_IMAGE));
    }
}
