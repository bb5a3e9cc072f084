//! PNG export of connector layouts
//!
//! Each occupied cell is drawn as a hub in the cell centre plus one arm per
//! connected side. Arms come from [`ConnectorOrientation::connected_sides`],
//! so the picture reflects family and rotation exactly as resolved.

use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

use crate::algorithm::autotile::ConnectorOrientation;
use crate::algorithm::placement::PlacementOrchestrator;
use crate::io::configuration::{
    EMPTY_CELL_COLOR, FAMILY_COLORS, GRID_LINE_COLOR, MAX_IMAGE_DIMENSION,
};
use crate::io::error::{GridError, Result, WithContext, invalid_parameter};
use crate::spatial::neighbors::Direction;

/// Pixel rectangle, half-open on both axes
#[derive(Debug, Clone, Copy)]
struct PixelRect {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

fn fill(img: &mut RgbaImage, rect: PixelRect, color: Rgba<u8>) {
    for y in rect.y0..rect.y1.min(img.height()) {
        for x in rect.x0..rect.x1.min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

/// Image dimensions for a `width` x `height` grid
///
/// # Errors
///
/// Returns an error if either edge would exceed [`MAX_IMAGE_DIMENSION`]
pub fn image_dimensions(width: usize, height: usize, pixels_per_cell: u32) -> Result<(u32, u32)> {
    let edge = |cells: usize, parameter: &'static str| {
        u32::try_from(cells)
            .ok()
            .and_then(|count| count.checked_mul(pixels_per_cell))
            .filter(|&pixels| pixels > 0 && pixels <= MAX_IMAGE_DIMENSION)
            .ok_or_else(|| {
                invalid_parameter(
                    parameter,
                    &cells,
                    &format!("image edge must be within 1..={MAX_IMAGE_DIMENSION} pixels"),
                )
            })
    };

    Ok((edge(width, "width")?, edge(height, "height")?))
}

/// Draw one connector into the cell whose top-left pixel is `(left, top)`
pub fn draw_connector(
    img: &mut RgbaImage,
    left: u32,
    top: u32,
    pixels_per_cell: u32,
    orientation: ConnectorOrientation,
) {
    let color = Rgba(
        FAMILY_COLORS
            .get(orientation.family.index())
            .copied()
            .unwrap_or([255, 255, 255, 255]),
    );

    // Belt is roughly a third of the cell wide, centred
    let band = (pixels_per_cell / 3).max(1);
    let lo = (pixels_per_cell - band) / 2;
    let hi = lo + band;
    let end = pixels_per_cell;

    fill(
        img,
        PixelRect {
            x0: left + lo,
            y0: top + lo,
            x1: left + hi,
            y1: top + hi,
        },
        color,
    );

    for side in orientation.connected_sides().directions() {
        // Image rows grow downwards, so Up is toward row 0
        let (x0, y0, x1, y1) = match side {
            Direction::Up => (lo, 0, hi, lo),
            Direction::Down => (lo, hi, hi, end),
            Direction::Left => (0, lo, lo, hi),
            Direction::Right => (hi, lo, end, hi),
        };
        fill(
            img,
            PixelRect {
                x0: left + x0,
                y0: top + y0,
                x1: left + x1,
                y1: top + y1,
            },
            color,
        );
    }
}

/// Rasterise an `[x, y]` orientation map, grid row 0 at the bottom
///
/// # Errors
///
/// Returns an error if the image would be empty or too large
pub fn render_orientation_map(
    map: &Array2<Option<ConnectorOrientation>>,
    pixels_per_cell: u32,
) -> Result<RgbaImage> {
    let (width, height) = map.dim();
    let (img_width, img_height) = image_dimensions(width, height, pixels_per_cell)?;

    let mut img = RgbaImage::from_pixel(img_width, img_height, Rgba(GRID_LINE_COLOR));

    for ((x, y), orientation) in map.indexed_iter() {
        let left = x as u32 * pixels_per_cell;
        let top = (height - 1 - y) as u32 * pixels_per_cell;

        // One-pixel gutter on the bottom-right edge acts as the grid line
        let inner = pixels_per_cell.saturating_sub(1).max(1);
        fill(
            &mut img,
            PixelRect {
                x0: left,
                y0: top,
                x1: left + inner,
                y1: top + inner,
            },
            Rgba(EMPTY_CELL_COLOR),
        );

        if let Some(orientation) = orientation {
            draw_connector(&mut img, left, top, pixels_per_cell, *orientation);
        }
    }

    Ok(img)
}

/// Export the current layout as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The image would exceed [`MAX_IMAGE_DIMENSION`]
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    orchestrator: &PlacementOrchestrator,
    output_path: &Path,
    pixels_per_cell: u32,
) -> Result<()> {
    let img = render_orientation_map(&orchestrator.orientation_map(), pixels_per_cell)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|source| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;

    log::info!("Wrote {}", output_path.display());
    Ok(())
}
