//! Connector orientation from neighbor occupancy
//!
//! The geometric rule in [`resolve_mask`] is the single source of truth. It
//! classifies by neighbor count and, for corners, by the sum of the neighbor
//! unit vectors. The 16-entry lookup table used on the hot path is generated
//! from it, so the two formulations cannot drift apart.
//!
//! Sprites are assumed to be drawn in a base pose and rotated
//! counter-clockwise by [`Rotation`]:
//!
//! - Straight: vertical, joining Up and Down
//! - Corner: joining Up and Right
//! - `TJunction`: joining Up, Left and Right
//! - Cross: joining all four sides

use std::fmt;
use std::sync::LazyLock;

use crate::algorithm::mask::NeighborMask;
use crate::io::error::GridError;
use crate::spatial::neighbors::Direction;

/// Shape class of a connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorFamily {
    /// No occupied neighbors; drawn as a straight piece heading up
    Isolated,
    /// One neighbor, or two on opposite sides
    Straight,
    /// Two neighbors on perpendicular sides
    Corner,
    /// Three neighbors
    TJunction,
    /// All four neighbors
    Cross,
}

impl ConnectorFamily {
    /// Position of this family in per-family lookup tables
    pub const fn index(self) -> usize {
        match self {
            Self::Isolated => 0,
            Self::Straight => 1,
            Self::Corner => 2,
            Self::TJunction => 3,
            Self::Cross => 4,
        }
    }

    /// Sides joined by the family's base sprite at zero rotation
    pub fn base_sides(self) -> NeighborMask {
        match self {
            Self::Isolated => NeighborMask::EMPTY,
            Self::Straight => NeighborMask::from_directions([Direction::Up, Direction::Down]),
            Self::Corner => NeighborMask::from_directions([Direction::Up, Direction::Right]),
            Self::TJunction => NeighborMask::from_directions([
                Direction::Up,
                Direction::Left,
                Direction::Right,
            ]),
            Self::Cross => NeighborMask::from_bits(0b1111),
        }
    }
}

/// Counter-clockwise sprite rotation in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// 0°
    Deg0,
    /// 90°
    Deg90,
    /// 180°
    Deg180,
    /// −90°
    DegNeg90,
}

impl Rotation {
    /// Rotation in degrees, in `{0, 90, 180, -90}`
    pub const fn degrees(self) -> i16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::DegNeg90 => -90,
        }
    }

    /// Parse a rotation from degrees, accepting 270 as an alias of −90
    pub const fn from_degrees(degrees: i16) -> Option<Self> {
        match degrees {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 | -180 => Some(Self::Deg180),
            -90 | 270 => Some(Self::DegNeg90),
            _ => None,
        }
    }

    /// Number of counter-clockwise quarter turns
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::DegNeg90 => 3,
        }
    }

    /// Heading that turns the base "up" pose to face `direction`
    pub const fn heading(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Deg0,
            Direction::Down => Self::Deg180,
            Direction::Left => Self::Deg90,
            Direction::Right => Self::DegNeg90,
        }
    }

    /// Apply this rotation to a direction
    pub const fn apply(self, direction: Direction) -> Direction {
        match self {
            Self::Deg0 => direction,
            Self::Deg90 => direction.rotate_ccw(),
            Self::Deg180 => direction.opposite(),
            Self::DegNeg90 => direction.rotate_ccw().opposite(),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Shape family plus rotation describing how a connector is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorOrientation {
    /// Shape class
    pub family: ConnectorFamily,
    /// Counter-clockwise rotation of the base sprite
    pub rotation: Rotation,
}

impl ConnectorOrientation {
    /// Orientation of a connector with no occupied neighbors
    pub const ISOLATED: Self = Self::new(ConnectorFamily::Isolated, Rotation::Deg0);

    /// Fallback used when a pattern cannot be classified
    pub const FALLBACK: Self = Self::new(ConnectorFamily::Straight, Rotation::Deg0);

    /// Pair a family with a rotation
    pub const fn new(family: ConnectorFamily, rotation: Rotation) -> Self {
        Self { family, rotation }
    }

    /// Sides this orientation draws a belt toward
    ///
    /// Always a superset of the neighbor mask it was resolved from. A lone
    /// neighbor still yields a straight piece spanning both ends.
    pub fn connected_sides(&self) -> NeighborMask {
        let base = self.family.base_sides();
        NeighborMask::from_directions(base.directions().map(|side| self.rotation.apply(side)))
    }
}

impl fmt::Display for ConnectorOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.family, self.rotation)
    }
}

/// Adjacency pattern the rules could not classify
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnresolvedAdjacency {
    /// Raw mask value
    pub mask: u8,
    /// Which rule rejected the pattern
    pub reason: &'static str,
}

impl From<UnresolvedAdjacency> for GridError {
    fn from(value: UnresolvedAdjacency) -> Self {
        Self::UnresolvedAdjacency {
            mask: value.mask,
            reason: value.reason,
        }
    }
}

/// Outcome of resolving one cell
///
/// Always carries a usable orientation; `unresolved` is set when that
/// orientation is a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Orientation to apply
    pub orientation: ConnectorOrientation,
    /// Diagnostic for a fallback orientation
    pub unresolved: Option<UnresolvedAdjacency>,
}

impl Resolution {
    const fn resolved(family: ConnectorFamily, rotation: Rotation) -> Self {
        Self {
            orientation: ConnectorOrientation::new(family, rotation),
            unresolved: None,
        }
    }

    fn fallback(orientation: ConnectorOrientation, mask: u8, reason: &'static str) -> Self {
        log::warn!("No orientation for neighbor mask {mask:#06b} ({reason}); using {orientation}");
        Self {
            orientation,
            unresolved: Some(UnresolvedAdjacency { mask, reason }),
        }
    }

    /// Convert to a strict result, rejecting fallback orientations
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnresolvedAdjacency`] if the orientation is a fallback
    pub fn into_result(self) -> crate::Result<ConnectorOrientation> {
        match self.unresolved {
            Some(unresolved) => Err(unresolved.into()),
            None => Ok(self.orientation),
        }
    }
}

/// Resolve the orientation for a set of occupied-neighbor directions
///
/// Duplicates and ordering in `directions` are ignored.
pub fn resolve<I>(directions: I) -> Resolution
where
    I: IntoIterator<Item = Direction>,
{
    resolve_mask(NeighborMask::from_directions(directions))
}

/// Orientation only, for callers that accept fallbacks silently
pub fn resolve_orientation<I>(directions: I) -> ConnectorOrientation
where
    I: IntoIterator<Item = Direction>,
{
    resolve(directions).orientation
}

/// Geometric rule: classify by neighbor count and unit-vector geometry
pub fn resolve_mask(mask: NeighborMask) -> Resolution {
    let first = mask.directions().next();

    match (mask.count(), first) {
        (0, _) => Resolution::resolved(ConnectorFamily::Isolated, Rotation::Deg0),
        (1, Some(toward)) => {
            Resolution::resolved(ConnectorFamily::Straight, Rotation::heading(toward))
        }
        // Canonical order yields Up before Down and Left before Right,
        // giving 0° for a vertical pair and 90° for a horizontal one
        (2, Some(toward)) if mask.vector_sum() == [0, 0] => {
            Resolution::resolved(ConnectorFamily::Straight, Rotation::heading(toward))
        }
        (2, _) => match mask.vector_sum() {
            [1, 1] => Resolution::resolved(ConnectorFamily::Corner, Rotation::Deg0),
            [1, -1] => Resolution::resolved(ConnectorFamily::Corner, Rotation::DegNeg90),
            [-1, -1] => Resolution::resolved(ConnectorFamily::Corner, Rotation::Deg180),
            [-1, 1] => Resolution::resolved(ConnectorFamily::Corner, Rotation::Deg90),
            _ => Resolution::fallback(
                ConnectorOrientation::new(ConnectorFamily::Corner, Rotation::Deg0),
                mask.bits(),
                "corner vector sum is not diagonal",
            ),
        },
        (3, _) => match mask.missing().next() {
            Some(Direction::Up) => {
                Resolution::resolved(ConnectorFamily::TJunction, Rotation::Deg180)
            }
            Some(Direction::Down) => {
                Resolution::resolved(ConnectorFamily::TJunction, Rotation::Deg0)
            }
            Some(Direction::Left) => {
                Resolution::resolved(ConnectorFamily::TJunction, Rotation::DegNeg90)
            }
            Some(Direction::Right) => {
                Resolution::resolved(ConnectorFamily::TJunction, Rotation::Deg90)
            }
            None => Resolution::fallback(
                ConnectorOrientation::FALLBACK,
                mask.bits(),
                "junction has no missing side",
            ),
        },
        (4, _) => Resolution::resolved(ConnectorFamily::Cross, Rotation::Deg0),
        _ => Resolution::fallback(
            ConnectorOrientation::FALLBACK,
            mask.bits(),
            "neighbor count outside 0..=4",
        ),
    }
}

/// Bitmask lookup table, generated from [`resolve_mask`]
pub static TILE_TABLE: LazyLock<[ConnectorOrientation; 16]> = LazyLock::new(|| {
    std::array::from_fn(|bits| resolve_mask(NeighborMask::from_bits(bits as u8)).orientation)
});

/// Table lookup for a raw mask
///
/// Masks above 15 fall back to a straight piece at 0° with a diagnostic.
pub fn orientation_for_mask(mask: u8) -> Resolution {
    TILE_TABLE.get(usize::from(mask)).map_or_else(
        || {
            Resolution::fallback(
                ConnectorOrientation::FALLBACK,
                mask,
                "mask outside the 4-bit table",
            )
        },
        |&orientation| Resolution {
            orientation,
            unresolved: None,
        },
    )
}
