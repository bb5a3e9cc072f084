//! Grid space with dense cell storage and world/grid coordinate transforms
//!
//! Cells are allocated once at construction and live as long as the grid.
//! Storage is indexed `[x, y]` with `y` growing upwards in world space.

use ndarray::Array2;
use num_traits::Float;
use std::fmt;

use crate::algorithm::placement::ConnectorId;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::neighbors::Direction;

/// Integer cell coordinate in grid space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column, growing to the right
    pub x: i32,
    /// Row, growing upwards
    pub y: i32,
}

impl GridCoord {
    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinate one step in `direction`
    ///
    /// Returns `None` if the step would overflow `i32`.
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let [dx, dy] = direction.vector();
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl From<[i32; 2]> for GridCoord {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Continuous position in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPos {
    /// Horizontal world coordinate
    pub x: f64,
    /// Vertical world coordinate
    pub y: f64,
}

impl WorldPos {
    /// Create a world position from its components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Map one world axis onto a cell index using half-cell-centered floor
///
/// Cell `n` covers `[n - 0.5, n + 0.5) * cell_size`, so any point inside a
/// cell's footprint lands on that cell. Values that cannot be represented
/// as `i32` (NaN, infinities, huge magnitudes) return `None`.
pub fn half_cell_floor<T: Float>(coord: T, cell_size: T) -> Option<i32> {
    let half = cell_size / (T::one() + T::one());
    ((coord + half) / cell_size).floor().to_i32()
}

/// Construction-time grid parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of cells along x
    pub width: usize,
    /// Number of cells along y
    pub height: usize,
    /// Edge length of a cell in world units
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl GridConfig {
    /// Create a configuration with the given extent and cell size
    pub const fn new(width: usize, height: usize, cell_size: f64) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::InvalidParameter`] if a dimension is zero or
    /// exceeds [`MAX_GRID_DIMENSION`], or if the cell size is not a positive
    /// finite number
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be a positive finite number",
            ));
        }

        Ok(())
    }
}

/// One addressable grid position
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    grid_position: GridCoord,
    world_position: WorldPos,
    connector: Option<ConnectorId>,
}

impl Cell {
    const fn new(grid_position: GridCoord, world_position: WorldPos) -> Self {
        Self {
            grid_position,
            world_position,
            connector: None,
        }
    }

    /// Integer coordinate of this cell
    pub const fn grid_position(&self) -> GridCoord {
        self.grid_position
    }

    /// World position of the cell centre
    pub const fn world_position(&self) -> WorldPos {
        self.world_position
    }

    /// Whether a connector has been placed here
    pub const fn is_occupied(&self) -> bool {
        self.connector.is_some()
    }

    /// Handle of the connector placed here, if any
    pub const fn connector(&self) -> Option<ConnectorId> {
        self.connector
    }

    pub(crate) const fn occupy(&mut self, connector: ConnectorId) {
        self.connector = Some(connector);
    }
}

/// Fixed-size rectangular grid owning every cell
#[derive(Debug, Clone)]
pub struct GridSpace {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
    cell_size: f64,
}

impl GridSpace {
    /// Allocate every cell of a validated grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`GridConfig::validate`]
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;

        let GridConfig {
            width,
            height,
            cell_size,
        } = config;

        // Dimensions are capped by MAX_GRID_DIMENSION, well inside i32
        let cells = Array2::from_shape_fn((width, height), |(x, y)| {
            let grid_position = GridCoord::new(x as i32, y as i32);
            let world_position = WorldPos::new(x as f64 * cell_size, y as f64 * cell_size);
            Cell::new(grid_position, world_position)
        });

        log::info!("Grid of size {width}x{height} created (cell size {cell_size})");

        Ok(Self {
            cells,
            width,
            height,
            cell_size,
        })
    }

    /// Number of cells along x
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along y
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Edge length of a cell in world units
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Convert a world position to the coordinate of the cell containing it
    ///
    /// Positions that cannot be represented map to an always-invalid
    /// coordinate rather than failing.
    pub fn world_to_grid(&self, world: WorldPos) -> GridCoord {
        GridCoord::new(
            half_cell_floor(world.x, self.cell_size).unwrap_or(i32::MIN),
            half_cell_floor(world.y, self.cell_size).unwrap_or(i32::MIN),
        )
    }

    /// World position of a cell centre
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPos {
        WorldPos::new(
            f64::from(coord.x) * self.cell_size,
            f64::from(coord.y) * self.cell_size,
        )
    }

    /// Check whether both axes lie inside the grid
    pub fn is_valid(&self, coord: GridCoord) -> bool {
        self.index_of(coord).is_some()
    }

    fn index_of(&self, coord: GridCoord) -> Option<[usize; 2]> {
        let x = usize::try_from(coord.x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(coord.y).ok().filter(|&y| y < self.height)?;
        Some([x, y])
    }

    /// Look up a cell, returning `None` for out-of-range coordinates
    pub fn cell(&self, coord: GridCoord) -> Option<&Cell> {
        self.index_of(coord).and_then(|index| self.cells.get(index))
    }

    pub(crate) fn cell_mut(&mut self, coord: GridCoord) -> Option<&mut Cell> {
        let index = self.index_of(coord)?;
        self.cells.get_mut(index)
    }

    /// Look up the cell containing a world position
    pub fn cell_at_world(&self, world: WorldPos) -> Option<&Cell> {
        self.cell(self.world_to_grid(world))
    }

    /// Iterate over every cell, ordered by x then y
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells currently holding a connector
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }
}
