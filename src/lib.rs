//! Grid connectivity and autotile orientation for conveyor placement
//!
//! Connectors placed on a rectangular grid join visually with their occupied
//! axis-aligned neighbors. Each connector's shape (straight, corner, junction
//! or cross) and rotation is a pure function of which of its four neighbors
//! are occupied, and a placement re-resolves only the placed cell and its
//! direct neighbors.

#![forbid(unsafe_code)]

/// Orientation resolution and connector placement
pub mod algorithm;
/// Input/output collaborators and error handling
pub mod io;
/// Grid storage, coordinates and adjacency
pub mod spatial;

pub use algorithm::autotile::{ConnectorFamily, ConnectorOrientation, Rotation};
pub use algorithm::placement::{ConnectorId, PlacementOrchestrator, PlacementReport};
pub use io::error::{GridError, Result};
pub use spatial::{GridConfig, GridCoord, GridSpace, WorldPos};
