use neptune_application::{ChromeItem, ViewDescription};
use neptune_domain::{DestinationIcon, GridPlacement};

pub fn present_chrome_item(item: &ChromeItem) -> String {
    format!(
        "{} {}\t{}\t{}",
        if item.selected { "*" } else { " " },
        item.id,
        item.label,
        present_icon(&item.icon)
    )
}

pub fn present_placement(placement: &GridPlacement<'_>) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        placement.index,
        placement.row,
        placement.column,
        placement.entry.image,
        placement.entry.label
    )
}

pub fn present_view(view: &ViewDescription) -> String {
    format!("{}\n{}", view.heading, view.body)
}

fn present_icon(icon: &DestinationIcon) -> String {
    match icon {
        DestinationIcon::Vector(glyph) => format!("vector:{}", glyph.name()),
        DestinationIcon::Raster(image) => format!("raster:{image}"),
    }
}

#[cfg(test)]
mod tests {
    use neptune_domain::{placeholder_catalog, DestinationId, GridLayout, GridSpec, VectorGlyph};

    use super::*;

    #[test]
    fn chrome_rows_mark_selection() {
        let item = ChromeItem {
            id: DestinationId::Camera,
            label: "Camera".to_string(),
            icon: DestinationIcon::Vector(VectorGlyph::CameraAlt),
            selected: true,
        };
        assert_eq!(present_chrome_item(&item), "* camera\tCamera\tvector:camera_alt");
    }

    #[test]
    fn placement_rows_list_grid_position() {
        let entries = placeholder_catalog(3);
        let last = GridLayout::new(&entries, GridSpec::default())
            .last()
            .expect("placement");
        assert_eq!(
            present_placement(&last),
            "2\t1\t0\tmipmap/manilla_clam_foreground.png\tmanilla_clam"
        );
    }
}
