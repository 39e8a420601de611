//! The rectangle of plausible coordinate values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SgnError;

use super::coord::Coord;

/// An inclusive axis-aligned rectangle used to separate real coordinate
/// data from header noise: a decoded record whose point leaves this box
/// is treated as evidence against the current stream-start hypothesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: i16,
    pub x_max: i16,
    pub y_min: i16,
    pub y_max: i16,
}

impl Bounds {
    /// Creates a new bounds rectangle from explicit limits.
    #[inline]
    pub fn new(x_min: i16, x_max: i16, y_min: i16, y_max: i16) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Returns true if the coordinate lies inside the rectangle
    /// (limits inclusive).
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.x_min <= coord.x
            && coord.x <= self.x_max
            && self.y_min <= coord.y
            && coord.y <= self.y_max
    }
}

impl Default for Bounds {
    /// The measured extent of the reference artwork.
    fn default() -> Self {
        Self::new(0, 591, 0, 392)
    }
}

/// Parses `XMIN,XMAX,YMIN,YMAX`, e.g. `0,591,0,392`.
impl FromStr for Bounds {
    type Err = SgnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SgnError::InvalidBounds(s.to_string());

        let parts: Vec<i16> = s
            .split(',')
            .map(|part| part.trim().parse::<i16>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;
        let [x_min, x_max, y_min, y_max] = parts[..] else {
            return Err(invalid());
        };
        if x_min > x_max || y_min > y_max {
            return Err(invalid());
        }
        Ok(Self::new(x_min, x_max, y_min, y_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = Bounds::default();
        assert!(bounds.contains(Coord::new(0, 0)));
        assert!(bounds.contains(Coord::new(591, 392)));
        assert!(bounds.contains(Coord::new(300, 200)));
    }

    #[test]
    fn test_rejects_outside_points() {
        let bounds = Bounds::default();
        assert!(!bounds.contains(Coord::new(-1, 0)));
        assert!(!bounds.contains(Coord::new(592, 0)));
        assert!(!bounds.contains(Coord::new(0, 393)));
        assert!(!bounds.contains(Coord::new(0, -5)));
    }

    #[test]
    fn test_parse_from_str() {
        let bounds: Bounds = "0,591,0,392".parse().unwrap();
        assert_eq!(bounds, Bounds::default());

        let spaced: Bounds = " -10, 10, -20, 20 ".parse().unwrap();
        assert_eq!(spaced, Bounds::new(-10, 10, -20, 20));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("0,591,0".parse::<Bounds>().is_err());
        assert!("0,591,0,392,7".parse::<Bounds>().is_err());
        assert!("a,b,c,d".parse::<Bounds>().is_err());
        // inverted ranges
        assert!("591,0,0,392".parse::<Bounds>().is_err());
    }
}
