/// Orientation resolution from neighbor occupancy
pub mod autotile;
/// Four-bit neighbor direction sets
pub mod mask;
/// Connector placement and one-hop re-resolution
pub mod placement;
