mod config;
mod logging;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use config::AppConfig;
use neptune_adapters::{
    present_chrome_item, present_placement, present_view, FsResourceProvider,
    JsonNavigationStore, PlaceholderCatalogSource, PlaceholderContent, WalkdirCatalogSource,
};
use neptune_application::{
    ApplicationError, CatalogGridView, CatalogSource, ContentRoute, LoadCatalogCommand,
    NavigationController, PersistNavigationCommand, RenderScheduler, RestoreNavigationCommand,
    SelectByKeyCommand,
};
use neptune_domain::{DestinationId, DestinationTable, NavigationState, Viewport};
use tracing::{debug, warn};

#[derive(Debug, Parser)]
#[command(name = "neptune", version, about = "Field guide shell with a reference catalog")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
enum Command {
    /// Open the window (default).
    Ui,
    /// Print the navigation chrome for the saved selection.
    Destinations,
    /// Select a destination by key and remember it.
    Select { key: String },
    /// Print grid placements, optionally only those inside a viewport.
    Catalog {
        #[arg(long, requires = "height")]
        offset: Option<f32>,
        #[arg(long, requires = "offset")]
        height: Option<f32>,
    },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to load neptune config: {error}");
            return ExitCode::from(1);
        }
    };
    logging::init_logging(&config.log_filter);

    match run_command(cli.command.unwrap_or(Command::Ui), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

/// Logs render requests where no window exists to repaint.
struct LoggingRenderScheduler;

impl RenderScheduler for LoggingRenderScheduler {
    fn request_render(&self, destination: DestinationId) {
        debug!(%destination, "render requested");
    }
}

pub(crate) fn build_controller(
    config: &AppConfig,
    scheduler: Box<dyn RenderScheduler>,
) -> NavigationController {
    let mut controller = NavigationController::new(
        DestinationTable::standard(),
        scheduler,
        Box::new(JsonNavigationStore::new(&config.state_path)),
    );
    for destination in DestinationId::ALL {
        if let Some(content) = PlaceholderContent::for_destination(destination) {
            controller = controller.with_content(destination, Box::new(content));
        }
    }
    controller
}

pub(crate) fn build_catalog(config: &AppConfig) -> Result<CatalogGridView, ApplicationError> {
    let spec = config.grid_spec()?;
    let source: Box<dyn CatalogSource> = match &config.catalog_dir {
        Some(dir) => Box::new(WalkdirCatalogSource::new(dir, &config.assets_dir)),
        None => Box::new(PlaceholderCatalogSource {
            count: config.placeholder_entries,
        }),
    };
    CatalogGridView::load(source.as_ref(), spec, LoadCatalogCommand)
}

pub(crate) fn build_resources(config: &AppConfig) -> Result<FsResourceProvider, ApplicationError> {
    FsResourceProvider::open(&config.assets_dir, Path::new(&config.strings_path))
}

/// A saved selection that no longer resolves is dropped rather than fatal.
pub(crate) fn restore_or_initialize(controller: &NavigationController) -> NavigationState {
    controller
        .restore(RestoreNavigationCommand)
        .unwrap_or_else(|error| {
            warn!(%error, "discarding saved navigation");
            controller.initialize()
        })
}

fn run_command(command: Command, config: &AppConfig) -> Result<(), CommandError> {
    match command {
        Command::Ui => ui::launch_window(config).map_err(CommandError::Runtime),
        Command::Destinations => {
            for line in destinations_report(config) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Select { key } => {
            let controller = build_controller(config, Box::new(LoggingRenderScheduler));
            let state = restore_or_initialize(&controller);
            let state = controller
                .select_by_key(&state, SelectByKeyCommand { key })
                .map_err(|error| CommandError::Usage(format!("select failed: {error}")))?;
            controller
                .persist(PersistNavigationCommand { state })
                .map_err(|error| CommandError::Runtime(format!("save failed: {error}")))?;
            print_chrome(&controller, &state);
            if let Ok(ContentRoute::External(view)) = controller.route(&state) {
                println!();
                println!("{}", present_view(&view));
            }
            Ok(())
        }
        Command::Catalog { offset, height } => {
            let viewport = offset
                .zip(height)
                .map(|(offset, height)| Viewport { offset, height });
            for line in catalog_report(config, viewport)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn destinations_report(config: &AppConfig) -> Vec<String> {
    let controller = build_controller(config, Box::new(LoggingRenderScheduler));
    let state = restore_or_initialize(&controller);
    controller
        .chrome(&state)
        .iter()
        .map(present_chrome_item)
        .collect()
}

fn catalog_report(
    config: &AppConfig,
    viewport: Option<Viewport>,
) -> Result<Vec<String>, CommandError> {
    let grid = build_catalog(config)
        .map_err(|error| CommandError::Runtime(format!("catalog failed: {error}")))?;
    if grid.entries().is_empty() {
        return Ok(vec!["catalog is empty".to_string()]);
    }
    let placements = match viewport {
        Some(viewport) => grid.visible(viewport),
        None => grid.layout(),
    };
    Ok(placements.map(|placement| present_placement(&placement)).collect())
}

fn print_chrome(controller: &NavigationController, state: &NavigationState) {
    for item in controller.chrome(state) {
        println!("{}", present_chrome_item(&item));
    }
}
