//! Signed 16-bit coordinate pairs and their byte-level codec.

use serde::{Deserialize, Serialize};

use crate::error::SgnError;

/// Byte order of a 16-bit coordinate field.
///
/// Every file examined so far encodes little-endian, but the scanner
/// still tries both orders when hunting for a stream start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    Little,
    Big,
}

/// A point in drawing space: a pair of signed 16-bit integers.
///
/// Ordered and hashable so coordinates can key deterministic maps in the
/// correlator. Construction is permissive — whether a value is plausible
/// for a given piece of artwork is the caller's policy, expressed through
/// [`Bounds`](super::Bounds).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    /// Creates a new coordinate with the given x and y values.
    #[inline]
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Decodes a coordinate pair from exactly 4 bytes at `offset`.
    ///
    /// Fails with [`SgnError::OutOfBounds`] iff `offset + 4 > blob.len()`.
    /// No plausibility check is applied here.
    pub fn decode_pair(blob: &[u8], offset: usize, endian: Endian) -> Result<Self, SgnError> {
        let bytes: &[u8; 4] = blob
            .get(offset..offset + 4)
            .and_then(|window| window.try_into().ok())
            .ok_or(SgnError::OutOfBounds {
                offset,
                len: blob.len(),
            })?;

        let (x, y) = match endian {
            Endian::Little => (
                i16::from_le_bytes([bytes[0], bytes[1]]),
                i16::from_le_bytes([bytes[2], bytes[3]]),
            ),
            Endian::Big => (
                i16::from_be_bytes([bytes[0], bytes[1]]),
                i16::from_be_bytes([bytes[2], bytes[3]]),
            ),
        };
        Ok(Self { x, y })
    }

    /// Encodes this coordinate as the exact 4-byte pattern
    /// [`decode_pair`](Self::decode_pair) reads.
    pub fn encode_pair(&self, endian: Endian) -> [u8; 4] {
        let (x, y) = match endian {
            Endian::Little => (self.x.to_le_bytes(), self.y.to_le_bytes()),
            Endian::Big => (self.x.to_be_bytes(), self.y.to_be_bytes()),
        };
        [x[0], x[1], y[0], y[1]]
    }
}

impl std::fmt::Debug for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pair_little_endian() {
        let blob = [0x0A, 0x00, 0x14, 0x00];
        let coord = Coord::decode_pair(&blob, 0, Endian::Little).unwrap();
        assert_eq!(coord, Coord::new(10, 20));
    }

    #[test]
    fn test_decode_pair_big_endian() {
        let blob = [0x00, 0x0A, 0x00, 0x14];
        let coord = Coord::decode_pair(&blob, 0, Endian::Big).unwrap();
        assert_eq!(coord, Coord::new(10, 20));
    }

    #[test]
    fn test_decode_pair_negative_values() {
        let blob = Coord::new(-1, -300).encode_pair(Endian::Little);
        let coord = Coord::decode_pair(&blob, 0, Endian::Little).unwrap();
        assert_eq!(coord, Coord::new(-1, -300));
    }

    #[test]
    fn test_decode_pair_out_of_bounds() {
        let blob = [0x0A, 0x00, 0x14];
        let err = Coord::decode_pair(&blob, 0, Endian::Little).unwrap_err();
        assert!(matches!(err, SgnError::OutOfBounds { offset: 0, len: 3 }));
    }

    #[test]
    fn test_decode_pair_at_exact_end() {
        let blob = [0xFF, 0xFF, 0x0A, 0x00, 0x14, 0x00];
        let coord = Coord::decode_pair(&blob, 2, Endian::Little).unwrap();
        assert_eq!(coord, Coord::new(10, 20));
        assert!(Coord::decode_pair(&blob, 3, Endian::Little).is_err());
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        for &(x, y) in &[(0, 0), (591, 392), (-32768, 32767), (1000, 300)] {
            let coord = Coord::new(x, y);
            for endian in [Endian::Little, Endian::Big] {
                let bytes = coord.encode_pair(endian);
                assert_eq!(Coord::decode_pair(&bytes, 0, endian).unwrap(), coord);
            }
        }
    }
}
