//! Tests for connector placement and neighbor propagation

#[cfg(test)]
mod tests {
    use beltgrid::algorithm::autotile::{ConnectorFamily, ConnectorOrientation, Rotation};
    use beltgrid::algorithm::placement::{
        ConnectorId, PlacementOrchestrator, PlacementRequest,
    };
    use beltgrid::io::error::GridError;
    use beltgrid::spatial::grid::{GridConfig, GridCoord, WorldPos};

    fn orchestrator(width: usize, height: usize) -> PlacementOrchestrator {
        PlacementOrchestrator::from_config(GridConfig::new(width, height, 1.0)).unwrap()
    }

    // Tests a lone connector resolves as isolated
    // Verified by resolving before occupying the cell
    #[test]
    fn test_first_placement_is_isolated() {
        let mut orchestrator = orchestrator(3, 3);
        let report = orchestrator.place(GridCoord::new(1, 1)).unwrap();

        assert_eq!(report.connector, ConnectorId::new(0));
        assert_eq!(report.orientation(), Some(ConnectorOrientation::ISOLATED));
        assert!(report.neighbor_updates().is_empty());
        assert_eq!(orchestrator.connectors().len(), 1);
        assert_eq!(orchestrator.grid().occupied_count(), 1);
    }

    // Tests the existing neighbor is re-resolved when a new one arrives
    // Verified by skipping neighbor propagation
    #[test]
    fn test_neighbor_is_updated() {
        let mut orchestrator = orchestrator(3, 3);
        orchestrator.place(GridCoord::new(1, 1)).unwrap();
        let report = orchestrator.place(GridCoord::new(1, 2)).unwrap();

        let straight_up = ConnectorOrientation::new(ConnectorFamily::Straight, Rotation::Deg0);
        let straight_down = ConnectorOrientation::new(ConnectorFamily::Straight, Rotation::Deg180);

        assert_eq!(report.orientation(), Some(straight_down));
        let [update] = report.neighbor_updates() else {
            panic!("expected one neighbor update");
        };
        assert_eq!(update.position, GridCoord::new(1, 1));
        assert_eq!(update.previous, Some(ConnectorOrientation::ISOLATED));
        assert_eq!(update.current, straight_up);
        assert_eq!(orchestrator.orientation_at(GridCoord::new(1, 1)), Some(straight_up));
    }

    // Tests out-of-range placement is rejected without mutation
    // Verified by occupying before the bounds check
    #[test]
    fn test_out_of_bounds_rejected() {
        let mut orchestrator = orchestrator(2, 2);

        for coord in [GridCoord::new(-1, 0), GridCoord::new(2, 0), GridCoord::new(0, 2)] {
            let err = orchestrator.place(coord).unwrap_err();
            assert!(matches!(err, GridError::OutOfBounds { position, .. } if position == coord));
            assert!(err.is_placement_rejection());
        }

        assert!(orchestrator.connectors().is_empty());
        assert_eq!(orchestrator.grid().occupied_count(), 0);
    }

    // Tests placing twice in one cell leaves the first connector untouched
    // Verified by overwriting the cell's back-reference
    #[test]
    fn test_occupied_cell_rejected() {
        let mut orchestrator = orchestrator(3, 3);
        orchestrator.place(GridCoord::new(0, 0)).unwrap();
        orchestrator.place(GridCoord::new(1, 0)).unwrap();
        let before = orchestrator.orientation_map();

        let err = orchestrator.place(GridCoord::new(0, 0)).unwrap_err();

        assert!(matches!(err, GridError::CellOccupied { .. }));
        assert_eq!(orchestrator.connectors().len(), 2);
        assert_eq!(orchestrator.orientation_map(), before);
        assert_eq!(
            orchestrator
                .connector_at(GridCoord::new(0, 0))
                .map(|c| c.grid_position()),
            Some(GridCoord::new(0, 0))
        );
    }

    // Tests world placement lands on the cell containing the point
    // Verified by truncating instead of half-cell flooring
    #[test]
    fn test_place_at_world() {
        let mut orchestrator =
            PlacementOrchestrator::from_config(GridConfig::new(4, 4, 2.0)).unwrap();

        let report = orchestrator.place_at_world(WorldPos::new(2.9, 4.6)).unwrap();
        assert_eq!(report.position, GridCoord::new(1, 2));

        let report = orchestrator
            .apply(PlacementRequest::World(WorldPos::new(-0.9, 0.0)))
            .unwrap();
        assert_eq!(report.position, GridCoord::new(0, 0));

        let err = orchestrator
            .apply(PlacementRequest::World(WorldPos::new(-1.1, 0.0)))
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
    }

    // Tests resolve_at is a pure query
    // Verified by storing the resolution in resolve_at
    #[test]
    fn test_resolve_at_does_not_mutate() {
        let mut orchestrator = orchestrator(3, 3);
        orchestrator.place(GridCoord::new(0, 1)).unwrap();
        orchestrator.place(GridCoord::new(2, 1)).unwrap();

        let resolution = orchestrator.resolve_at(GridCoord::new(1, 1)).unwrap();
        assert_eq!(
            resolution.orientation,
            ConnectorOrientation::new(ConnectorFamily::Straight, Rotation::Deg90)
        );
        assert_eq!(orchestrator.orientation_at(GridCoord::new(1, 1)), None);
        assert!(orchestrator.resolve_at(GridCoord::new(3, 1)).is_none());
        assert_eq!(orchestrator.connectors().len(), 2);
    }

    // Tests connector handles index the store in placement order
    // Verified by reusing handle zero
    #[test]
    fn test_connector_handles() {
        let mut orchestrator = orchestrator(3, 1);
        let a = orchestrator.place(GridCoord::new(2, 0)).unwrap().connector;
        let b = orchestrator.place(GridCoord::new(0, 0)).unwrap().connector;

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(
            orchestrator.connector(b).map(|c| c.grid_position()),
            Some(GridCoord::new(0, 0))
        );
        assert!(orchestrator.connector(ConnectorId::new(5)).is_none());
    }
}
