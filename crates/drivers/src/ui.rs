use std::collections::HashMap;

use eframe::egui;
use neptune_adapters::FsResourceProvider;
use neptune_application::{
    CardDescription, CardImage, CatalogGridView, ChromeItem, ContentRoute, NavigationController,
    PersistNavigationCommand, RasterImage, RenderScheduler, ResourceProvider,
    SelectDestinationCommand,
};
use neptune_domain::{
    DestinationIcon, DestinationId, GridPlacement, GridSpec, NavigationState, VectorGlyph,
};
use tracing::{debug, info, warn};

use crate::config::AppConfig;

const NAV_ICON_SIZE: f32 = 24.0;
const LABEL_TEXT_SIZE: f32 = 16.0;
/// Window width at which the bottom bar turns into a side rail.
const RAIL_BREAKPOINT: f32 = 600.0;
const RAIL_WIDTH: f32 = 88.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChromeLayout {
    BottomBar,
    Rail,
}

fn chrome_layout(window_width: f32) -> ChromeLayout {
    if window_width >= RAIL_BREAKPOINT {
        ChromeLayout::Rail
    } else {
        ChromeLayout::BottomBar
    }
}

struct EguiRenderScheduler {
    ctx: egui::Context,
}

impl RenderScheduler for EguiRenderScheduler {
    fn request_render(&self, destination: DestinationId) {
        debug!(%destination, "repaint requested");
        self.ctx.request_repaint();
    }
}

/// GPU textures keyed by asset path, uploaded on first use.
#[derive(Default)]
struct TextureCache {
    handles: HashMap<String, egui::TextureHandle>,
}

impl TextureCache {
    fn get_or_load(&mut self, ctx: &egui::Context, image: &RasterImage) -> egui::TextureHandle {
        self.handles
            .entry(image.key.clone())
            .or_insert_with(|| {
                let pixels = egui::ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.rgba,
                );
                ctx.load_texture(image.key.clone(), pixels, egui::TextureOptions::LINEAR)
            })
            .clone()
    }
}

/// Card descriptions keyed by entry index, resolved once per window.
#[derive(Default)]
struct CardCache {
    cards: HashMap<usize, CardDescription>,
}

impl CardCache {
    fn get_or_render(
        &mut self,
        grid: &CatalogGridView,
        placement: &GridPlacement<'_>,
        resources: &dyn ResourceProvider,
    ) -> &CardDescription {
        self.cards
            .entry(placement.index)
            .or_insert_with(|| grid.render_card_or_placeholder(placement.entry, resources))
    }
}

struct NeptuneApp {
    controller: NavigationController,
    grid: CatalogGridView,
    resources: FsResourceProvider,
    state: NavigationState,
    cards: CardCache,
    textures: TextureCache,
}

impl NeptuneApp {
    fn select(&mut self, destination: DestinationId) {
        let command = SelectDestinationCommand { destination };
        match self.controller.select_destination(&self.state, command) {
            Ok(next) if next != self.state => {
                self.state = next;
                if let Err(error) = self.controller.persist(PersistNavigationCommand { state: next }) {
                    warn!(%error, "failed to save navigation");
                }
            }
            Ok(_) => {}
            Err(error) => warn!(%error, "selection ignored"),
        }
    }

    fn draw_navigation(&mut self, ui: &mut egui::Ui, layout: ChromeLayout) {
        let chrome = self.controller.chrome(&self.state);
        let Self {
            resources,
            textures,
            ..
        } = &mut *self;

        let mut clicked = None;
        match layout {
            ChromeLayout::BottomBar => {
                ui.columns(chrome.len(), |columns| {
                    for (column, item) in columns.iter_mut().zip(&chrome) {
                        column.vertical_centered(|ui| {
                            if draw_nav_item(ui, resources, textures, item) {
                                clicked = Some(item.id);
                            }
                        });
                    }
                });
            }
            ChromeLayout::Rail => {
                ui.vertical_centered(|ui| {
                    for item in &chrome {
                        ui.add_space(12.0);
                        if draw_nav_item(ui, resources, textures, item) {
                            clicked = Some(item.id);
                        }
                    }
                });
            }
        }

        if let Some(destination) = clicked {
            self.select(destination);
        }
    }

    fn draw_content(&mut self, ui: &mut egui::Ui) {
        match self.controller.route(&self.state) {
            Ok(ContentRoute::Catalog) => {
                draw_catalog(
                    ui,
                    &self.grid,
                    &self.resources,
                    &mut self.cards,
                    &mut self.textures,
                );
            }
            Ok(ContentRoute::External(view)) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.heading(view.heading);
                    ui.label(view.body);
                });
            }
            Err(error) => {
                warn!(%error, "no content for destination");
                ui.label(format!("Nothing to show: {error}"));
            }
        }
    }
}

impl eframe::App for NeptuneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let layout = chrome_layout(ctx.screen_rect().width());
        match layout {
            ChromeLayout::BottomBar => {
                egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| {
                    ui.add_space(6.0);
                    self.draw_navigation(ui, layout);
                    ui.add_space(6.0);
                });
            }
            ChromeLayout::Rail => {
                egui::SidePanel::left("navigation")
                    .resizable(false)
                    .exact_width(RAIL_WIDTH)
                    .show(ctx, |ui| {
                        self.draw_navigation(ui, layout);
                    });
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });
    }
}

fn glyph_symbol(glyph: VectorGlyph) -> &'static str {
    match glyph {
        VectorGlyph::CameraAlt => "📷",
        VectorGlyph::AutoStories => "📖",
        VectorGlyph::Settings => "⚙",
    }
}

/// Icon over a selectable label; true when the label was clicked.
fn draw_nav_item(
    ui: &mut egui::Ui,
    resources: &FsResourceProvider,
    textures: &mut TextureCache,
    item: &ChromeItem,
) -> bool {
    draw_nav_icon(ui, resources, textures, item);
    ui.selectable_label(item.selected, item.label.as_str()).clicked()
}

fn draw_nav_icon(
    ui: &mut egui::Ui,
    resources: &FsResourceProvider,
    textures: &mut TextureCache,
    item: &ChromeItem,
) {
    let glyph = match &item.icon {
        DestinationIcon::Vector(glyph) => glyph_symbol(*glyph),
        DestinationIcon::Raster(image) => match resources.resolve_image(image) {
            Ok(raster) => {
                let texture = textures.get_or_load(ui.ctx(), &raster);
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(&texture))
                        .fit_to_exact_size(egui::vec2(NAV_ICON_SIZE, NAV_ICON_SIZE)),
                );
                return;
            }
            Err(error) => {
                debug!(%error, destination = %item.id, "raster icon unavailable");
                "📚"
            }
        },
    };
    ui.label(egui::RichText::new(glyph).size(NAV_ICON_SIZE * 0.8));
}

fn catalog_margin(spec: GridSpec) -> egui::Margin {
    egui::Margin::symmetric(spec.content_padding() as i8, 0)
}

fn draw_catalog(
    ui: &mut egui::Ui,
    grid: &CatalogGridView,
    resources: &FsResourceProvider,
    cards: &mut CardCache,
    textures: &mut TextureCache,
) {
    let spacing = grid.spec().spacing();

    egui::Frame::default()
        .inner_margin(catalog_margin(grid.spec()))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
            // Only the rows egui reports as visible are laid out and rendered.
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show_rows(ui, grid.style().height(), grid.row_count(), |ui, rows| {
                    for row in rows {
                        ui.horizontal(|ui| {
                            for placement in grid.rows(row..row + 1) {
                                let card = cards.get_or_render(grid, &placement, resources);
                                draw_card(ui, textures, card);
                            }
                        });
                    }
                });
        });
}

fn draw_card(ui: &mut egui::Ui, textures: &mut TextureCache, card: &CardDescription) {
    let style = card.style;
    let image_size = egui::vec2(style.image_size, style.image_size);
    let image_radius = egui::CornerRadius::same(style.image_corner_radius as u8);

    egui::Frame::default()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(egui::CornerRadius::same(style.surface_corner_radius as u8))
        .show(ui, |ui| {
            ui.set_width(style.width());
            ui.set_height(style.height());
            ui.vertical_centered(|ui| {
                ui.add_space(style.padding);
                match &card.image {
                    CardImage::Raster(image) => {
                        let texture = textures.get_or_load(ui.ctx(), image);
                        let uv = egui::Rect::from_min_max(
                            egui::pos2(card.crop.min[0], card.crop.min[1]),
                            egui::pos2(card.crop.max[0], card.crop.max[1]),
                        );
                        ui.add(
                            egui::Image::from_texture(egui::load::SizedTexture::from_handle(
                                &texture,
                            ))
                            .uv(uv)
                            .fit_to_exact_size(image_size)
                            .corner_radius(image_radius),
                        );
                    }
                    CardImage::Placeholder => {
                        let (rect, _) = ui.allocate_exact_size(image_size, egui::Sense::hover());
                        ui.painter()
                            .rect_filled(rect, image_radius, egui::Color32::from_gray(96));
                    }
                }
                ui.add_space(style.padding);
                ui.label(
                    egui::RichText::new(&card.label)
                        .size(LABEL_TEXT_SIZE)
                        .strong(),
                );
            });
        });
}

pub fn launch_window(config: &AppConfig) -> Result<(), String> {
    let grid = crate::build_catalog(config).map_err(|error| format!("catalog failed: {error}"))?;
    let resources =
        crate::build_resources(config).map_err(|error| format!("resources failed: {error}"))?;
    info!(
        entries = grid.entries().len(),
        columns = grid.spec().columns(),
        assets = %config.assets_dir,
        "starting neptune window"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };
    let config = config.clone();

    eframe::run_native(
        "Neptune",
        options,
        Box::new(move |cc| {
            let controller = crate::build_controller(
                &config,
                Box::new(EguiRenderScheduler {
                    ctx: cc.egui_ctx.clone(),
                }),
            );
            let state = crate::restore_or_initialize(&controller);
            Ok(Box::new(NeptuneApp {
                controller,
                grid,
                resources,
                state,
                cards: CardCache::default(),
                textures: TextureCache::default(),
            }))
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
