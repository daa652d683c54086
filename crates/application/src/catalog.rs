use std::ops::Range;

use neptune_domain::{
    visible_rows, CardStyle, CatalogEntry, CropWindow, GridLayout, GridSpec, Viewport,
};
use tracing::debug;

use crate::{ApplicationError, CatalogSource, LoadCatalogCommand, RasterImage, ResourceProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Raster(RasterImage),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardDescription {
    pub image: CardImage,
    pub label: String,
    pub crop: CropWindow,
    pub style: CardStyle,
}

pub struct CatalogGridView {
    entries: Vec<CatalogEntry>,
    spec: GridSpec,
    style: CardStyle,
}

impl CatalogGridView {
    pub fn new(entries: Vec<CatalogEntry>, spec: GridSpec) -> Self {
        Self {
            entries,
            spec,
            style: CardStyle::default(),
        }
    }

    pub fn load(
        source: &dyn CatalogSource,
        spec: GridSpec,
        _command: LoadCatalogCommand,
    ) -> Result<Self, ApplicationError> {
        let entries = source.load_entries()?;
        debug!(entries = entries.len(), columns = spec.columns(), "catalog loaded");
        Ok(Self::new(entries, spec))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    pub fn row_count(&self) -> usize {
        self.spec.row_count(self.entries.len())
    }

    pub fn layout(&self) -> GridLayout<'_> {
        GridLayout::new(&self.entries, self.spec)
    }

    pub fn rows(&self, rows: Range<usize>) -> GridLayout<'_> {
        GridLayout::rows(&self.entries, self.spec, rows)
    }

    pub fn visible(&self, viewport: Viewport) -> GridLayout<'_> {
        let rows = visible_rows(self.spec, &self.style, viewport, self.row_count());
        self.rows(rows)
    }

    pub fn render_card(
        &self,
        entry: &CatalogEntry,
        resources: &dyn ResourceProvider,
    ) -> Result<CardDescription, ApplicationError> {
        let image = resources.resolve_image(&entry.image)?;
        let label = resources.resolve_label(&entry.label)?;
        Ok(CardDescription {
            crop: CropWindow::center_square(image.width, image.height),
            image: CardImage::Raster(image),
            label,
            style: self.style,
        })
    }

    /// Like [`Self::render_card`], but an unresolved asset becomes a grey card.
    pub fn render_card_or_placeholder(
        &self,
        entry: &CatalogEntry,
        resources: &dyn ResourceProvider,
    ) -> CardDescription {
        match self.render_card(entry, resources) {
            Ok(card) => card,
            Err(error) => {
                debug!(image = %entry.image, label = %entry.label, %error, "rendering placeholder card");
                let label = resources
                    .resolve_label(&entry.label)
                    .unwrap_or_else(|_| entry.label.key().to_string());
                CardDescription {
                    image: CardImage::Placeholder,
                    label,
                    crop: CropWindow::FULL,
                    style: self.style,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use neptune_domain::{placeholder_catalog, ImageRef, LabelRef};

    use super::*;

    struct FakeResources {
        images: HashMap<String, (u32, u32)>,
        labels: HashMap<String, String>,
    }

    impl FakeResources {
        fn with_clam() -> Self {
            Self {
                images: HashMap::from([(
                    neptune_domain::PLACEHOLDER_IMAGE.to_string(),
                    (300, 200),
                )]),
                labels: HashMap::from([(
                    "manilla_clam".to_string(),
                    "Manilla Clam".to_string(),
                )]),
            }
        }
    }

    impl ResourceProvider for FakeResources {
        fn resolve_image(&self, image: &ImageRef) -> Result<RasterImage, ApplicationError> {
            let (width, height) = self
                .images
                .get(image.as_str())
                .copied()
                .ok_or_else(|| ApplicationError::missing_asset(image.as_str(), "not found"))?;
            Ok(RasterImage {
                key: image.as_str().to_string(),
                width,
                height,
                rgba: Arc::from(vec![0_u8; (width * height * 4) as usize]),
            })
        }

        fn resolve_label(&self, label: &LabelRef) -> Result<String, ApplicationError> {
            self.labels
                .get(label.key())
                .cloned()
                .ok_or_else(|| ApplicationError::missing_asset(label.key(), "no string"))
        }
    }

    struct FixedSource(usize);

    impl CatalogSource for FixedSource {
        fn load_entries(&self) -> Result<Vec<CatalogEntry>, ApplicationError> {
            Ok(placeholder_catalog(self.0))
        }
    }

    fn missing_entry() -> CatalogEntry {
        CatalogEntry::new(
            ImageRef::raster("mipmap/sea_star.png").expect("raster"),
            LabelRef::new("sea_star"),
        )
    }

    #[test]
    fn load_pulls_entries_from_source() {
        let grid = CatalogGridView::load(&FixedSource(10), GridSpec::default(), LoadCatalogCommand)
            .expect("load");
        assert_eq!(grid.entries().len(), 10);
        assert_eq!(grid.row_count(), 5);
        let last = grid.layout().last().expect("last placement");
        assert_eq!((last.index, last.row, last.column), (9, 4, 1));
    }

    #[test]
    fn render_card_resolves_image_and_label() {
        let grid = CatalogGridView::new(placeholder_catalog(1), GridSpec::default());
        let card = grid
            .render_card(&grid.entries()[0], &FakeResources::with_clam())
            .expect("card");
        assert_eq!(card.label, "Manilla Clam");
        assert!(matches!(card.image, CardImage::Raster(ref image) if image.width == 300));
        assert_eq!(card.crop, CropWindow::center_square(300, 200));
        assert_eq!(card.style.image_size, 128.0);
        assert_eq!(card.style.image_corner_radius, 16.0);
        assert_eq!(card.style.padding, 8.0);
    }

    #[test]
    fn render_card_reports_missing_asset() {
        let grid = CatalogGridView::new(vec![missing_entry()], GridSpec::default());
        let result = grid.render_card(&grid.entries()[0], &FakeResources::with_clam());
        assert!(matches!(
            result,
            Err(ApplicationError::MissingAsset { ref resource, .. }) if resource == "mipmap/sea_star.png"
        ));
    }

    #[test]
    fn placeholder_card_keeps_label_text() {
        let mut resources = FakeResources::with_clam();
        resources
            .labels
            .insert("sea_star".to_string(), "Sea Star".to_string());
        let grid = CatalogGridView::new(vec![missing_entry()], GridSpec::default());

        let card = grid.render_card_or_placeholder(&grid.entries()[0], &resources);
        assert_eq!(card.image, CardImage::Placeholder);
        assert_eq!(card.label, "Sea Star");
        assert_eq!(card.crop, CropWindow::FULL);
    }

    #[test]
    fn placeholder_card_falls_back_to_label_key() {
        let grid = CatalogGridView::new(vec![missing_entry()], GridSpec::default());
        let card = grid.render_card_or_placeholder(&grid.entries()[0], &FakeResources::with_clam());
        assert_eq!(card.label, "sea_star");
    }

    #[test]
    fn visible_limits_placements_to_viewport_rows() {
        let grid = CatalogGridView::new(placeholder_catalog(1_000), GridSpec::default());
        let stride = grid.style().height() + grid.spec().spacing();
        let rows: Vec<_> = grid
            .visible(Viewport {
                offset: stride * 100.0,
                height: stride * 3.0,
            })
            .map(|placement| placement.row)
            .collect();
        assert_eq!(rows, vec![100, 100, 101, 101, 102, 102]);
    }
}
