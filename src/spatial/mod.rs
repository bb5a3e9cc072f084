//! Spatial data structures and adjacency
//!
//! This module contains spatial-related functionality including:
//! - Grid storage and coordinate transforms
//! - Axis-aligned neighbor lookup

/// Grid storage, cells and coordinate transforms
pub mod grid;
/// Direction vectors and neighbor lookup
pub mod neighbors;

pub use grid::{Cell, GridConfig, GridCoord, GridSpace, WorldPos};
pub use neighbors::Direction;
