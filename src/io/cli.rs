//! Command-line interface for replaying placements and exporting layouts

use crate::algorithm::placement::PlacementOrchestrator;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED, GIF_FRAME_DELAY_MS,
    PIXELS_PER_CELL,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::PlacementProgress;
use crate::io::render::render_text_map;
use crate::io::script::PlacementScript;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::grid::GridConfig;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "beltgrid")]
#[command(
    author,
    version,
    about = "Place conveyor connectors on a grid and resolve their orientations"
)]
/// Command-line arguments for the placement replay tool
pub struct Cli {
    /// Placement script: one `x y` grid coordinate or `@ x y` world position per line
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Cell edge length in world units
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f64,

    /// Append this many random placements after the script
    #[arg(short = 'n', long)]
    pub scatter: Option<usize>,

    /// Random seed for scatter placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the final layout as a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Write an animated GIF with one frame per placement
    #[arg(short, long, value_name = "GIF")]
    pub animate: Option<PathBuf>,

    /// Pixels per cell in exported images
    #[arg(short, long, default_value_t = PIXELS_PER_CELL)]
    pub pixels: u32,

    /// Print the final layout as a text map
    #[arg(short, long)]
    pub map: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Grid configuration described by the arguments
    pub const fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.width, self.height, self.cell_size)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Install the log subscriber for the binary
///
/// `RUST_LOG` overrides the default filter of `info` (or `warn` when quiet).
pub fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Replays a placement script against a fresh grid and exports the result
pub struct Session {
    cli: Cli,
}

impl Session {
    /// Create a session for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Collect every placement requested by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or parsed, or if the
    /// scatter extent is invalid
    pub fn collect_placements(&self) -> Result<PlacementScript> {
        let mut script = match &self.cli.script {
            Some(path) => PlacementScript::from_path(path)?,
            None => PlacementScript::default(),
        };

        if let Some(count) = self.cli.scatter {
            script.extend(PlacementScript::scatter(
                self.cli.width,
                self.cli.height,
                count,
                self.cli.seed,
            )?);
        }

        Ok(script)
    }

    /// Replay placements, skipping rejected ones
    ///
    /// Rejections (out of bounds, occupied) are expected from clicks and are
    /// logged rather than treated as failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid configuration is invalid
    pub fn replay(
        &self,
        mut script: PlacementScript,
        mut capture: Option<&mut VisualizationCapture>,
    ) -> Result<(PlacementOrchestrator, PlacementProgress)> {
        let mut orchestrator = PlacementOrchestrator::from_config(self.cli.grid_config())?;
        let mut progress = if self.cli.should_show_progress() {
            PlacementProgress::new(script.len())
        } else {
            PlacementProgress::hidden()
        };

        while let Some(request) = script.next_placement() {
            match orchestrator.apply(request) {
                Ok(report) => {
                    if let Some(capture) = capture.as_deref_mut() {
                        capture.record(&report);
                    }
                    progress.record(true);
                }
                Err(err) if err.is_placement_rejection() => {
                    log::warn!("Skipped placement: {err}");
                    progress.record(false);
                }
                Err(err) => return Err(err),
            }
        }

        progress.finish();
        Ok((orchestrator, progress))
    }

    /// Run the full session: collect, replay, then export
    ///
    /// # Errors
    ///
    /// Returns an error if loading placements, building the grid or any
    /// requested export fails
    // Allow print for the requested text map
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let script = self.collect_placements()?;

        let mut capture = self
            .cli
            .animate
            .is_some()
            .then(|| VisualizationCapture::new(self.cli.width, self.cli.height));

        let (orchestrator, progress) = self.replay(script, capture.as_mut())?;

        log::info!(
            "Replay finished in {:.2?}: {}",
            start_time.elapsed(),
            progress.summary()
        );

        if self.cli.map {
            print!("{}", render_text_map(&orchestrator));
        }

        if let Some(path) = &self.cli.output {
            export_grid_as_png(&orchestrator, path, self.cli.pixels)?;
        }

        if let (Some(path), Some(capture)) = (&self.cli.animate, &capture) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS, self.cli.pixels)?;
        }

        Ok(())
    }
}
