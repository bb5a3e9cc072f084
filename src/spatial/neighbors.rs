//! Axis-aligned adjacency between grid cells
//!
//! The four [`Direction`] unit vectors defined here are the only notion of
//! adjacency in the crate; orientation math in [`crate::algorithm`] derives
//! from the same set.

use crate::spatial::grid::{Cell, GridCoord, GridSpace};

/// One of the four axis directions in grid space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, 1)`
    Up,
    /// `(0, -1)`
    Down,
    /// `(-1, 0)`
    Left,
    /// `(1, 0)`
    Right,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector pointing in this direction
    pub const fn vector(self) -> [i32; 2] {
        match self {
            Self::Up => [0, 1],
            Self::Down => [0, -1],
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
        }
    }

    /// Bit position of this direction in a neighbor mask
    pub const fn bit(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Direction for a mask bit position
    pub const fn from_bit(bit: usize) -> Option<Self> {
        match bit {
            0 => Some(Self::Up),
            1 => Some(Self::Down),
            2 => Some(Self::Left),
            3 => Some(Self::Right),
            _ => None,
        }
    }

    /// Direction for a unit vector, `None` for anything else
    pub const fn from_vector(vector: [i32; 2]) -> Option<Self> {
        match vector {
            [0, 1] => Some(Self::Up),
            [0, -1] => Some(Self::Down),
            [-1, 0] => Some(Self::Left),
            [1, 0] => Some(Self::Right),
            _ => None,
        }
    }

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Rotate a quarter turn counter-clockwise
    pub const fn rotate_ccw(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }
}

/// A cell adjacent to some origin cell
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    /// Direction from the origin to this neighbor
    pub direction: Direction,
    /// The neighboring cell
    pub cell: &'a Cell,
}

/// In-bounds neighbors of `coord` in canonical order (Up, Down, Left, Right)
pub fn neighbors(grid: &GridSpace, coord: GridCoord) -> impl Iterator<Item = Neighbor<'_>> {
    Direction::ALL.into_iter().filter_map(move |direction| {
        coord
            .step(direction)
            .and_then(|position| grid.cell(position))
            .map(|cell| Neighbor { direction, cell })
    })
}

/// Neighbors of `coord` that currently hold a connector
pub fn occupied_neighbors(
    grid: &GridSpace,
    coord: GridCoord,
) -> impl Iterator<Item = Neighbor<'_>> {
    neighbors(grid, coord).filter(|neighbor| neighbor.cell.is_occupied())
}

/// Directions from `coord` toward its occupied neighbors
pub fn occupied_directions(grid: &GridSpace, coord: GridCoord) -> Vec<Direction> {
    occupied_neighbors(grid, coord)
        .map(|neighbor| neighbor.direction)
        .collect()
}
