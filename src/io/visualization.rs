//! Frame capture and GIF generation for placement replays

use image::{Delay, Frame};
use ndarray::Array2;
use std::path::Path;

use crate::algorithm::autotile::ConnectorOrientation;
use crate::algorithm::placement::PlacementReport;
use crate::io::configuration::GIF_FINAL_FRAME_HOLD;
use crate::io::error::{GridError, Result, WithContext};
use crate::io::image::render_orientation_map;

/// Captures placement reports for visualization
///
/// Each report carries every orientation touched by one placement, so
/// replaying them in order reproduces the layout after each click.
pub struct VisualizationCapture {
    reports: Vec<PlacementReport>,
    dims: (usize, usize),
}

impl VisualizationCapture {
    /// Create an empty capture for a `width` x `height` grid
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            reports: Vec::new(),
            dims: (width, height),
        }
    }

    /// Record one successful placement
    pub fn record(&mut self, report: &PlacementReport) {
        self.reports.push(report.clone());
    }

    /// Returns all recorded placements
    pub fn reports(&self) -> &[PlacementReport] {
        &self.reports
    }

    /// Returns the total number of placement events
    pub const fn placement_count(&self) -> usize {
        self.reports.len()
    }

    /// Export one frame per placement as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - A frame cannot be rendered
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        output_path: &Path,
        frame_delay_ms: u32,
        pixels_per_cell: u32,
    ) -> Result<()> {
        if self.reports.is_empty() {
            return Err(GridError::InvalidParameter {
                parameter: "visualization",
                value: output_path.display().to_string(),
                reason: "no placements captured".to_string(),
            });
        }

        let frames = self.generate_frames(frame_delay_ms, pixels_per_cell)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|source| GridError::ImageExport {
                path: output_path.to_path_buf(),
                source,
            })?;

        log::info!(
            "Wrote {} ({} placement frames)",
            output_path.display(),
            self.reports.len()
        );
        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, pixels_per_cell: u32) -> Result<Vec<Frame>> {
        let mut layout: Array2<Option<ConnectorOrientation>> = Array2::from_elem(self.dims, None);
        let mut frames = Vec::with_capacity(self.reports.len() + 1);

        for report in &self.reports {
            for update in &report.updates {
                if let (Ok(x), Ok(y)) = (
                    usize::try_from(update.position.x),
                    usize::try_from(update.position.y),
                ) && let Some(slot) = layout.get_mut([x, y])
                {
                    *slot = Some(update.current);
                }
            }

            let img = render_orientation_map(&layout, pixels_per_cell)?;
            frames.push(Frame::from_parts(
                img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            ));
        }

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms.saturating_mul(GIF_FINAL_FRAME_HOLD), 1),
            ));
        }

        Ok(frames)
    }
}
