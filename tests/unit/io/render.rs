//! Tests for text map rendering

#[cfg(test)]
mod tests {
    use beltgrid::algorithm::autotile::{ConnectorFamily, ConnectorOrientation, Rotation};
    use beltgrid::algorithm::placement::PlacementOrchestrator;
    use beltgrid::io::render::{EMPTY_GLYPH, ISOLATED_GLYPH, glyph, render_text_map};
    use beltgrid::spatial::grid::{GridConfig, GridCoord};

    // Tests glyphs follow the sides each orientation connects
    // Verified by ignoring rotation when choosing glyphs
    #[test]
    fn test_glyphs() {
        let of = |family, rotation| glyph(Some(ConnectorOrientation::new(family, rotation)));

        assert_eq!(glyph(None), EMPTY_GLYPH);
        assert_eq!(glyph(Some(ConnectorOrientation::ISOLATED)), ISOLATED_GLYPH);
        assert_eq!(of(ConnectorFamily::Straight, Rotation::Deg0), '│');
        assert_eq!(of(ConnectorFamily::Straight, Rotation::Deg90), '─');
        assert_eq!(of(ConnectorFamily::Corner, Rotation::Deg0), '└');
        assert_eq!(of(ConnectorFamily::Corner, Rotation::Deg90), '┘');
        assert_eq!(of(ConnectorFamily::Corner, Rotation::Deg180), '┐');
        assert_eq!(of(ConnectorFamily::Corner, Rotation::DegNeg90), '┌');
        assert_eq!(of(ConnectorFamily::TJunction, Rotation::Deg0), '┴');
        assert_eq!(of(ConnectorFamily::TJunction, Rotation::Deg180), '┬');
        assert_eq!(of(ConnectorFamily::Cross, Rotation::Deg0), '┼');
    }

    // Tests the map prints the highest row first
    // Verified by printing rows bottom-up
    #[test]
    fn test_render_text_map() {
        let mut orchestrator =
            PlacementOrchestrator::from_config(GridConfig::new(3, 2, 1.0)).unwrap();
        for (x, y) in [(0, 1), (0, 0), (1, 0), (2, 0)] {
            orchestrator.place(GridCoord::new(x, y)).unwrap();
        }

        assert_eq!(render_text_map(&orchestrator), "│..\n└──\n");
    }
}
