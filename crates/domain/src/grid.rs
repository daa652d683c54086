//! Grid geometry for the reference catalog.
//!
//! Placements are produced lazily from index arithmetic: entry `i` sits at
//! row `i / columns`, column `i % columns`. Restricting a layout to a row
//! range never walks the entries before it, which keeps scrolling through a
//! large catalog proportional to what is on screen.

use std::ops::Range;

use crate::{CatalogEntry, DomainError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    columns: usize,
    spacing: f32,
    content_padding: f32,
}

impl GridSpec {
    pub const DEFAULT_COLUMNS: usize = 2;
    pub const DEFAULT_SPACING: f32 = 16.0;
    pub const DEFAULT_CONTENT_PADDING: f32 = 16.0;

    pub fn new(columns: usize) -> Result<Self, DomainError> {
        if columns == 0 {
            return Err(DomainError::InvalidColumnCount(columns));
        }
        Ok(Self {
            columns,
            ..Self::default()
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Horizontal inset between the grid and the edges of its container.
    pub fn content_padding(&self) -> f32 {
        self.content_padding
    }

    pub fn row_count(&self, entry_count: usize) -> usize {
        entry_count.div_ceil(self.columns)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
            spacing: Self::DEFAULT_SPACING,
            content_padding: Self::DEFAULT_CONTENT_PADDING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    TitleMedium,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub padding: f32,
    pub image_size: f32,
    pub image_corner_radius: f32,
    pub surface_corner_radius: f32,
    pub label_height: f32,
    pub label_role: TextRole,
}

impl CardStyle {
    pub fn width(&self) -> f32 {
        self.padding * 2.0 + self.image_size
    }

    pub fn height(&self) -> f32 {
        self.padding * 2.0 + self.image_size + self.label_height
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            padding: 8.0,
            image_size: 128.0,
            image_corner_radius: 16.0,
            surface_corner_radius: 12.0,
            label_height: 24.0,
            label_role: TextRole::TitleMedium,
        }
    }
}

/// Normalized texture window, `min`/`max` in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropWindow {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl CropWindow {
    pub const FULL: CropWindow = CropWindow {
        min: [0.0, 0.0],
        max: [1.0, 1.0],
    };

    /// Centered square window filling a square frame without distortion.
    pub fn center_square(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 || width == height {
            return Self::FULL;
        }
        let (w, h) = (width as f32, height as f32);
        if width > height {
            let inset = (w - h) / 2.0 / w;
            Self {
                min: [inset, 0.0],
                max: [1.0 - inset, 1.0],
            }
        } else {
            let inset = (h - w) / 2.0 / h;
            Self {
                min: [0.0, inset],
                max: [1.0, 1.0 - inset],
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement<'a> {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub entry: &'a CatalogEntry,
}

/// Row-major placements over a slice of entries. Cloning restarts from the
/// clone's current position.
#[derive(Debug, Clone)]
pub struct GridLayout<'a> {
    entries: &'a [CatalogEntry],
    columns: usize,
    next: usize,
    end: usize,
}

impl<'a> GridLayout<'a> {
    pub fn new(entries: &'a [CatalogEntry], spec: GridSpec) -> Self {
        Self {
            entries,
            columns: spec.columns(),
            next: 0,
            end: entries.len(),
        }
    }

    pub fn rows(entries: &'a [CatalogEntry], spec: GridSpec, rows: Range<usize>) -> Self {
        let columns = spec.columns();
        let start = rows.start.saturating_mul(columns).min(entries.len());
        let end = rows.end.saturating_mul(columns).min(entries.len()).max(start);
        Self {
            entries,
            columns,
            next: start,
            end,
        }
    }
}

impl<'a> Iterator for GridLayout<'a> {
    type Item = GridPlacement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(GridPlacement {
            index,
            row: index / self.columns,
            column: index % self.columns,
            entry: &self.entries[index],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridLayout<'_> {}

/// Rows of a grid with `total_rows` rows that intersect `viewport`.
///
/// Row `r` occupies `r * stride .. r * stride + card height`; the spacing gap
/// below a card belongs to no row.
pub fn visible_rows(
    spec: GridSpec,
    style: &CardStyle,
    viewport: Viewport,
    total_rows: usize,
) -> Range<usize> {
    let stride = style.height() + spec.spacing();
    if total_rows == 0 || viewport.height <= 0.0 || stride <= 0.0 {
        return 0..0;
    }
    let top = viewport.offset.max(0.0);
    let bottom = top + viewport.height;
    let above = (top - style.height()) / stride;
    let first = if above < 0.0 {
        0
    } else {
        above.floor() as usize + 1
    };
    let first = first.min(total_rows);
    let last = ((bottom / stride).ceil() as usize).min(total_rows);
    first..last.max(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder_catalog;

    #[test]
    fn zero_columns_is_rejected() {
        assert_eq!(GridSpec::new(0), Err(DomainError::InvalidColumnCount(0)));
        assert_eq!(GridSpec::new(2).map(|spec| spec.columns()), Ok(2));
    }

    #[test]
    fn spec_keeps_spacing_and_padding_for_any_column_count() {
        let spec = GridSpec::new(3).expect("spec");
        assert_eq!(spec.spacing(), 16.0);
        assert_eq!(spec.content_padding(), 16.0);
    }

    #[test]
    fn ten_entries_fill_five_rows_of_two() {
        let entries = placeholder_catalog(10);
        let spec = GridSpec::default();
        let placements: Vec<_> = GridLayout::new(&entries, spec).collect();

        assert_eq!(placements.len(), 10);
        assert_eq!(spec.row_count(entries.len()), 5);
        assert_eq!((placements[0].row, placements[0].column), (0, 0));
        assert_eq!((placements[9].row, placements[9].column), (4, 1));
        for row in 0..5 {
            assert_eq!(placements.iter().filter(|p| p.row == row).count(), 2);
        }
    }

    #[test]
    fn placements_are_row_major_for_any_column_count() {
        let entries = placeholder_catalog(17);
        for columns in 1..6 {
            let spec = GridSpec::new(columns).expect("spec");
            let placements: Vec<_> = GridLayout::new(&entries, spec).collect();
            assert_eq!(placements.len(), entries.len());
            for pair in placements.windows(2) {
                assert!(pair[0].row <= pair[1].row);
            }
            for placement in &placements {
                assert!(placement.column < columns);
                assert_eq!(placement.row * columns + placement.column, placement.index);
            }
        }
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        let entries: Vec<CatalogEntry> = Vec::new();
        let mut layout = GridLayout::new(&entries, GridSpec::default());
        assert_eq!(layout.len(), 0);
        assert!(layout.next().is_none());
    }

    #[test]
    fn layout_can_be_restarted() {
        let entries = placeholder_catalog(3);
        let layout = GridLayout::new(&entries, GridSpec::default());
        let first: Vec<_> = layout.clone().map(|p| p.index).collect();
        let second: Vec<_> = layout.map(|p| p.index).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn row_range_starts_mid_catalog() {
        let entries = placeholder_catalog(9);
        let spec = GridSpec::default();
        let indices: Vec<_> = GridLayout::rows(&entries, spec, 3..10)
            .map(|p| (p.index, p.row, p.column))
            .collect();
        assert_eq!(indices, vec![(6, 3, 0), (7, 3, 1), (8, 4, 0)]);
        assert_eq!(GridLayout::rows(&entries, spec, 7..9).count(), 0);
    }

    #[test]
    fn visible_rows_cover_only_the_viewport() {
        let spec = GridSpec::default();
        let style = CardStyle::default();
        let stride = style.height() + spec.spacing();

        let top = visible_rows(
            spec,
            &style,
            Viewport {
                offset: 0.0,
                height: stride * 2.0,
            },
            50,
        );
        assert_eq!(top, 0..2);

        let middle = visible_rows(
            spec,
            &style,
            Viewport {
                offset: stride * 10.5,
                height: stride,
            },
            50,
        );
        assert_eq!(middle, 10..12);

        let past_end = visible_rows(
            spec,
            &style,
            Viewport {
                offset: stride * 80.0,
                height: stride,
            },
            50,
        );
        assert!(past_end.is_empty());
    }

    #[test]
    fn viewport_inside_a_gap_shows_no_rows() {
        let spec = GridSpec::default();
        let style = CardStyle::default();

        let gap = visible_rows(
            spec,
            &style,
            Viewport {
                offset: 170.0,
                height: 10.0,
            },
            50,
        );
        assert!(gap.is_empty());

        let from_row_end = visible_rows(
            spec,
            &style,
            Viewport {
                offset: style.height(),
                height: 100.0,
            },
            50,
        );
        assert_eq!(from_row_end, 1..2);
    }

    #[test]
    fn card_geometry_matches_style() {
        let style = CardStyle::default();
        assert_eq!(style.width(), 144.0);
        assert_eq!(style.height(), 168.0);
    }

    #[test]
    fn crop_window_centers_square() {
        assert_eq!(CropWindow::center_square(100, 100), CropWindow::FULL);
        let wide = CropWindow::center_square(200, 100);
        assert_eq!(wide.min, [0.25, 0.0]);
        assert_eq!(wide.max, [0.75, 1.0]);
        let tall = CropWindow::center_square(100, 400);
        assert_eq!(tall.min, [0.0, 0.375]);
        assert_eq!(tall.max, [1.0, 0.625]);
    }
}
