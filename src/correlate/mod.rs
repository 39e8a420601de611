//! Ground-truth correlation.
//!
//! Given coordinates known to appear in the artwork (extracted from a
//! reference drawing) and the raw file, find every byte offset where
//! each coordinate's binary encoding occurs. The byte right before a
//! hit is a candidate opcode — this search is how the opcode table and
//! field layout were discovered in the first place, and it remains the
//! empirical check for any new offset/encoding hypothesis.

mod report;

pub use report::{CoordHits, CorrelationReport, Occurrence};

use std::collections::BTreeSet;

use crate::format::{Coord, Endian};

/// Finds every occurrence (overlapping included) of each distinct
/// coordinate's 4-byte encoding in `blob`.
///
/// Coordinates with no hits are omitted. Expected file sizes are tens
/// of KB, so a naive window scan per pattern is adequate; no index is
/// built.
pub fn correlate(blob: &[u8], coords: &[Coord], endian: Endian) -> CorrelationReport {
    // BTreeSet both dedups and fixes the report order
    let distinct: BTreeSet<Coord> = coords.iter().copied().collect();

    let hits = distinct
        .into_iter()
        .filter_map(|coord| {
            let pattern = coord.encode_pair(endian);
            let occurrences: Vec<Occurrence> = find_pattern(blob, &pattern)
                .map(|offset| Occurrence {
                    offset,
                    preceding: offset.checked_sub(1).map(|prev| blob[prev]),
                })
                .collect();
            (!occurrences.is_empty()).then_some(CoordHits { coord, occurrences })
        })
        .collect();

    CorrelationReport { hits }
}

/// Offsets of every occurrence of `pattern` in `blob`, ascending,
/// overlapping matches included.
fn find_pattern<'a>(blob: &'a [u8], pattern: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
    blob.windows(pattern.len())
        .enumerate()
        .filter_map(move |(offset, window)| (window == pattern).then_some(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlate_reports_offset_and_opcode() {
        // (10, 20) little-endian at offset 5, preceded by 0x01
        let mut blob = vec![0x90, 0x91, 0x92, 0x93, 0x01];
        blob.extend_from_slice(&[0x0A, 0x00, 0x14, 0x00]);
        blob.push(0xFF);

        let report = correlate(&blob, &[Coord::new(10, 20)], Endian::Little);
        assert_eq!(report.unique_coords(), 1);
        let hit = &report.hits[0];
        assert_eq!(hit.coord, Coord::new(10, 20));
        assert_eq!(
            hit.occurrences,
            vec![Occurrence {
                offset: 5,
                preceding: Some(0x01),
            }]
        );
    }

    #[test]
    fn test_correlate_omits_missing_coords() {
        let blob = [0x01, 0x0A, 0x00, 0x14, 0x00];
        let coords = [Coord::new(10, 20), Coord::new(99, 99)];
        let report = correlate(&blob, &coords, Endian::Little);
        assert_eq!(report.unique_coords(), 1);
        assert_eq!(report.hits[0].coord, Coord::new(10, 20));
    }

    #[test]
    fn test_correlate_finds_overlapping_occurrences() {
        // (0, 0) encodes as four zero bytes; six zeros give three
        // overlapping hits
        let blob = [0x00u8; 6];
        let report = correlate(&blob, &[Coord::new(0, 0)], Endian::Little);
        let offsets: Vec<usize> = report.hits[0].occurrences.iter().map(|o| o.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn test_correlate_hit_at_offset_zero_has_no_preceding_byte() {
        let blob = Coord::new(7, 8).encode_pair(Endian::Little);
        let report = correlate(&blob, &[Coord::new(7, 8)], Endian::Little);
        assert_eq!(report.hits[0].occurrences[0].preceding, None);
    }

    #[test]
    fn test_correlate_dedups_and_sorts_input_coords() {
        let mut blob = Vec::new();
        for coord in [Coord::new(30, 0), Coord::new(20, 0)] {
            blob.push(0x02);
            blob.extend_from_slice(&coord.encode_pair(Endian::Little));
        }
        let coords = [
            Coord::new(30, 0),
            Coord::new(20, 0),
            Coord::new(30, 0), // duplicate
        ];
        let report = correlate(&blob, &coords, Endian::Little);
        let listed: Vec<Coord> = report.hits.iter().map(|h| h.coord).collect();
        assert_eq!(listed, vec![Coord::new(20, 0), Coord::new(30, 0)]);
    }

    #[test]
    fn test_correlate_respects_endianness() {
        let blob = Coord::new(10, 20).encode_pair(Endian::Big);
        let little = correlate(&blob, &[Coord::new(10, 20)], Endian::Little);
        let big = correlate(&blob, &[Coord::new(10, 20)], Endian::Big);
        assert_eq!(little.unique_coords(), 0);
        assert_eq!(big.unique_coords(), 1);
    }
}
