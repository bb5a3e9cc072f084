//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use beltgrid::io::configuration::{
        DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, FAMILY_COLORS,
        GIF_FINAL_FRAME_HOLD, MAX_GRID_DIMENSION, MAX_IMAGE_DIMENSION, PIXELS_PER_CELL,
    };
    use beltgrid::spatial::grid::GridConfig;

    // Tests the default grid passes its own validation
    // Verified by raising the default width past the maximum
    #[test]
    fn test_defaults_are_valid() {
        assert!(DEFAULT_GRID_WIDTH <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_GRID_HEIGHT <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_CELL_SIZE > 0.0);
        assert!(
            GridConfig::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT, DEFAULT_CELL_SIZE)
                .validate()
                .is_ok()
        );
    }

    // Tests the maximum grid dimension still fits in i32 coordinates
    // Verified by setting the maximum above i32::MAX
    #[test]
    fn test_max_dimension_fits_coordinates() {
        assert!(i32::try_from(MAX_GRID_DIMENSION).is_ok());
    }

    // Tests the default grid renders within the image limit
    // Verified by doubling PIXELS_PER_CELL past the limit
    #[test]
    fn test_default_render_fits() {
        let edge = u32::try_from(DEFAULT_GRID_WIDTH).unwrap() * PIXELS_PER_CELL;
        assert!(edge <= MAX_IMAGE_DIMENSION);
        assert!(GIF_FINAL_FRAME_HOLD >= 1);
    }

    // Tests each connector family has a distinct opaque color
    // Verified by duplicating the corner color
    #[test]
    fn test_family_colors_distinct() {
        for (index, color) in FAMILY_COLORS.iter().enumerate() {
            assert_eq!(color[3], 255);
            for other in FAMILY_COLORS.iter().skip(index + 1) {
                assert_ne!(color, other);
            }
        }
    }
}
