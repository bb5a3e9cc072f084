//! Text rendering of connector layouts with box-drawing glyphs

use ndarray::Array2;

use crate::algorithm::autotile::ConnectorOrientation;
use crate::algorithm::placement::PlacementOrchestrator;

/// Glyph for an empty cell
pub const EMPTY_GLYPH: char = '.';
/// Glyph for a connector with no neighbors
pub const ISOLATED_GLYPH: char = '■';

// Indexed by mask bits: Up=1, Down=2, Left=4, Right=8
const GLYPHS: [char; 16] = [
    ISOLATED_GLYPH,
    '╵',
    '╷',
    '│',
    '╴',
    '┘',
    '┐',
    '┤',
    '╶',
    '└',
    '┌',
    '├',
    '─',
    '┴',
    '┬',
    '┼',
];

/// Glyph for one cell, chosen from the sides its belt connects to
pub fn glyph(orientation: Option<ConnectorOrientation>) -> char {
    let Some(orientation) = orientation else {
        return EMPTY_GLYPH;
    };

    let bits = orientation.connected_sides().bits();
    GLYPHS.get(usize::from(bits)).copied().unwrap_or('?')
}

/// Render an `[x, y]` orientation map, highest row first
pub fn render_orientation_map(map: &Array2<Option<ConnectorOrientation>>) -> String {
    let (width, height) = map.dim();
    let mut out = String::with_capacity((width + 1) * height * 3);

    for y in (0..height).rev() {
        for x in 0..width {
            out.push(glyph(map.get([x, y]).copied().flatten()));
        }
        out.push('\n');
    }

    out
}

/// Render every connector placed so far
pub fn render_text_map(orchestrator: &PlacementOrchestrator) -> String {
    render_orientation_map(&orchestrator.orientation_map())
}
