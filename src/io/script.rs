//! Placement script parsing and seeded scatter generation
//!
//! Script format, one placement per line:
//!
//! ```text
//! # comment
//! 3 4          grid coordinate
//! @ 2.6 -0.4   world position
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::path::Path;

use crate::algorithm::placement::PlacementRequest;
use crate::io::error::{GridError, Result, WithContext, invalid_parameter};
use crate::spatial::grid::{GridCoord, WorldPos};

/// Ordered queue of placements to replay
#[derive(Debug, Clone, Default)]
pub struct PlacementScript {
    /// Placements in replay order
    pub placement_queue: VecDeque<PlacementRequest>,
}

impl PlacementScript {
    /// Read and parse a script file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any line fails to parse
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path, "read script")?;
        let script = Self::parse(&text)?;
        log::info!(
            "Loaded {} placement(s) from {}",
            script.len(),
            path.display()
        );
        Ok(script)
    }

    /// Parse script text
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ScriptParse`] naming the first malformed line
    pub fn parse(text: &str) -> Result<Self> {
        let mut placement_queue = VecDeque::new();

        for (index, raw) in text.lines().enumerate() {
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let request = parse_line(content).map_err(|reason| GridError::ScriptParse {
                line: index + 1,
                content: raw.trim().to_string(),
                reason,
            })?;
            placement_queue.push_back(request);
        }

        Ok(Self { placement_queue })
    }

    /// Generate `count` uniformly random grid placements
    ///
    /// Duplicates are possible and are rejected at replay time like any
    /// other click on an occupied cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid extent is empty or too large for `i32`
    pub fn scatter(width: usize, height: usize, count: usize, seed: u64) -> Result<Self> {
        let max_x = i32::try_from(width)
            .ok()
            .filter(|&w| w > 0)
            .ok_or_else(|| invalid_parameter("width", &width, &"must be in 1..=i32::MAX"))?;
        let max_y = i32::try_from(height)
            .ok()
            .filter(|&h| h > 0)
            .ok_or_else(|| invalid_parameter("height", &height, &"must be in 1..=i32::MAX"))?;

        let mut rng = StdRng::seed_from_u64(seed);
        let placement_queue = (0..count)
            .map(|_| {
                PlacementRequest::Grid(GridCoord::new(
                    rng.random_range(0..max_x),
                    rng.random_range(0..max_y),
                ))
            })
            .collect();

        Ok(Self { placement_queue })
    }

    /// Append another script's placements
    pub fn extend(&mut self, other: Self) {
        self.placement_queue.extend(other.placement_queue);
    }

    /// Get the next placement from the queue
    pub fn next_placement(&mut self) -> Option<PlacementRequest> {
        self.placement_queue.pop_front()
    }

    /// Number of queued placements
    pub fn len(&self) -> usize {
        self.placement_queue.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.placement_queue.is_empty()
    }
}

fn parse_line(content: &str) -> std::result::Result<PlacementRequest, String> {
    let (world, values) = content
        .strip_prefix('@')
        .map_or((false, content), |rest| (true, rest));

    let tokens: Vec<&str> = values.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(format!("expected two values, found {}", tokens.len()));
    };

    if world {
        Ok(PlacementRequest::World(WorldPos::new(
            parse_value(x)?,
            parse_value(y)?,
        )))
    } else {
        Ok(PlacementRequest::Grid(GridCoord::new(
            parse_value(x)?,
            parse_value(y)?,
        )))
    }
}

fn parse_value<T>(token: &str) -> std::result::Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    token
        .parse()
        .map_err(|e| format!("cannot parse '{token}': {e}"))
}
