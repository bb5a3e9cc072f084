//! Connector placement with one-hop orientation propagation
//!
//! Placing a connector only changes the neighbor set of the placed cell and
//! of its four direct neighbors, so those are the only cells re-resolved.
//! Validation happens before any mutation: a placement either completes in
//! full or leaves the grid untouched.

use ndarray::Array2;

use crate::algorithm::autotile::{ConnectorOrientation, Resolution, resolve};
use crate::io::error::{GridError, Result};
use crate::spatial::grid::{GridConfig, GridCoord, GridSpace, WorldPos};
use crate::spatial::neighbors::{occupied_directions, occupied_neighbors};

/// Non-owning handle to a connector stored by [`PlacementOrchestrator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectorId(usize);

impl ConnectorId {
    /// Wrap a raw store index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw store index
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A placed belt piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    grid_position: GridCoord,
    orientation: ConnectorOrientation,
}

impl Connector {
    /// Cell this connector sits in
    pub const fn grid_position(&self) -> GridCoord {
        self.grid_position
    }

    /// Orientation from the most recent resolution
    pub const fn orientation(&self) -> ConnectorOrientation {
        self.orientation
    }
}

/// Where to place a connector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementRequest {
    /// Target a cell directly
    Grid(GridCoord),
    /// Target the cell containing a world position
    World(WorldPos),
}

/// Orientation change applied to one cell during a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationUpdate {
    /// Cell whose connector was resolved
    pub position: GridCoord,
    /// Orientation before this placement, `None` for the new connector
    pub previous: Option<ConnectorOrientation>,
    /// Orientation after this placement
    pub current: ConnectorOrientation,
}

/// Every orientation touched by one successful placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    /// Handle of the newly placed connector
    pub connector: ConnectorId,
    /// Cell the connector was placed in
    pub position: GridCoord,
    /// The placed cell first, then each re-resolved neighbor
    pub updates: Vec<OrientationUpdate>,
}

impl PlacementReport {
    /// Orientation of the newly placed connector
    pub fn orientation(&self) -> Option<ConnectorOrientation> {
        self.updates.first().map(|update| update.current)
    }

    /// Re-resolved neighbors, excluding the placed cell
    pub fn neighbor_updates(&self) -> &[OrientationUpdate] {
        self.updates.get(1..).unwrap_or(&[])
    }
}

/// Owns the grid and its connectors, and applies placements
#[derive(Debug, Clone)]
pub struct PlacementOrchestrator {
    grid: GridSpace,
    connectors: Vec<Connector>,
}

impl PlacementOrchestrator {
    /// Take ownership of an existing grid
    pub const fn new(grid: GridSpace) -> Self {
        Self {
            grid,
            connectors: Vec::new(),
        }
    }

    /// Build a fresh grid from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn from_config(config: GridConfig) -> Result<Self> {
        GridSpace::new(config).map(Self::new)
    }

    /// Read-only view of the grid
    pub const fn grid(&self) -> &GridSpace {
        &self.grid
    }

    /// All connectors in placement order
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Look up a connector by handle
    pub fn connector(&self, id: ConnectorId) -> Option<&Connector> {
        self.connectors.get(id.index())
    }

    /// Connector placed at `coord`, if any
    pub fn connector_at(&self, coord: GridCoord) -> Option<&Connector> {
        self.grid
            .cell(coord)
            .and_then(|cell| cell.connector())
            .and_then(|id| self.connector(id))
    }

    /// Current orientation at `coord`, if occupied
    pub fn orientation_at(&self, coord: GridCoord) -> Option<ConnectorOrientation> {
        self.connector_at(coord).map(Connector::orientation)
    }

    /// Recompute the orientation at `coord` without storing it
    ///
    /// Returns `None` for out-of-range coordinates. Empty cells resolve as
    /// if a connector were placed there.
    pub fn resolve_at(&self, coord: GridCoord) -> Option<Resolution> {
        self.grid
            .is_valid(coord)
            .then(|| resolve(occupied_directions(&self.grid, coord)))
    }

    /// Snapshot of every cell's orientation, indexed `[x, y]`
    pub fn orientation_map(&self) -> Array2<Option<ConnectorOrientation>> {
        Array2::from_shape_fn((self.grid.width(), self.grid.height()), |(x, y)| {
            self.orientation_at(GridCoord::new(x as i32, y as i32))
        })
    }

    /// Place a connector at `coord` and re-resolve its occupied neighbors
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` lies outside the grid and
    /// [`GridError::CellOccupied`] if the cell already holds a connector. No
    /// state changes in either case.
    pub fn place(&mut self, coord: GridCoord) -> Result<PlacementReport> {
        let id = ConnectorId::new(self.connectors.len());
        let (width, height) = (self.grid.width(), self.grid.height());

        let cell = self
            .grid
            .cell_mut(coord)
            .ok_or(GridError::OutOfBounds {
                position: coord,
                width,
                height,
            })?;
        if cell.is_occupied() {
            return Err(GridError::CellOccupied { position: coord });
        }
        cell.occupy(id);

        let orientation = self.resolve_stored(coord);
        self.connectors.push(Connector {
            grid_position: coord,
            orientation,
        });

        let mut updates = vec![OrientationUpdate {
            position: coord,
            previous: None,
            current: orientation,
        }];

        // Collected first: re-resolution needs the grid while connectors mutate
        let affected: Vec<(GridCoord, ConnectorId)> = occupied_neighbors(&self.grid, coord)
            .filter_map(|neighbor| {
                neighbor
                    .cell
                    .connector()
                    .map(|id| (neighbor.cell.grid_position(), id))
            })
            .collect();

        for (position, neighbor_id) in affected {
            let current = self.resolve_stored(position);
            if let Some(connector) = self.connectors.get_mut(neighbor_id.index()) {
                let previous = std::mem::replace(&mut connector.orientation, current);
                log::debug!("Re-resolved {position}: {previous} -> {current}");
                updates.push(OrientationUpdate {
                    position,
                    previous: Some(previous),
                    current,
                });
            }
        }

        log::debug!(
            "Placed connector at {coord} as {orientation} ({} neighbor(s) updated)",
            updates.len() - 1
        );

        Ok(PlacementReport {
            connector: id,
            position: coord,
            updates,
        })
    }

    /// Place a connector in the cell containing a world position
    ///
    /// # Errors
    ///
    /// Same as [`Self::place`] for the converted coordinate
    pub fn place_at_world(&mut self, world: WorldPos) -> Result<PlacementReport> {
        let coord = self.grid.world_to_grid(world);
        self.place(coord)
    }

    /// Apply a placement request
    ///
    /// # Errors
    ///
    /// Same as [`Self::place`]
    pub fn apply(&mut self, request: PlacementRequest) -> Result<PlacementReport> {
        match request {
            PlacementRequest::Grid(coord) => self.place(coord),
            PlacementRequest::World(world) => self.place_at_world(world),
        }
    }

    fn resolve_stored(&self, coord: GridCoord) -> ConnectorOrientation {
        resolve(occupied_directions(&self.grid, coord)).orientation
    }
}
