//! Grid constants and runtime configuration defaults

// Grid defaults match the sandbox scene the engine was built for
/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 100;
/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 100;
/// Default edge length of a cell in world units
pub const DEFAULT_CELL_SIZE: f64 = 1.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible scatter placement
pub const DEFAULT_SEED: u64 = 42;

// Rendering settings
/// Edge length of one cell in exported images, in pixels
pub const PIXELS_PER_CELL: u32 = 16;
/// Largest exported image edge, in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Hold time multiplier for the final GIF frame
pub const GIF_FINAL_FRAME_HOLD: u32 = 10;

/// Background color of empty cells
pub const EMPTY_CELL_COLOR: [u8; 4] = [40, 42, 48, 255];
/// Color of the thin grid lines between cells
pub const GRID_LINE_COLOR: [u8; 4] = [28, 29, 33, 255];
/// Belt colors indexed by connector family (isolated, straight, corner, junction, cross)
pub const FAMILY_COLORS: [[u8; 4]; 5] = [
    [150, 150, 150, 255],
    [230, 180, 60, 255],
    [90, 170, 230, 255],
    [120, 200, 110, 255],
    [220, 90, 90, 255],
];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
