//! Correlation report types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::Coord;

/// One occurrence of a coordinate's byte pattern in the raw file.
///
/// `preceding` is the byte immediately before the pattern — if the
/// coordinate really is a record operand, that byte is its opcode. It is
/// `None` only for a hit at offset 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub offset: usize,
    pub preceding: Option<u8>,
}

/// All occurrences of one reference coordinate, offsets ascending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordHits {
    pub coord: Coord,
    pub occurrences: Vec<Occurrence>,
}

/// The result of correlating reference-drawing coordinates against a
/// raw file: every place each known coordinate's encoding occurs, with
/// candidate opcode bytes. Only coordinates with at least one hit
/// appear; rows are sorted by coordinate for deterministic output.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub hits: Vec<CoordHits>,
}

impl CorrelationReport {
    /// Number of distinct reference coordinates that were found at all.
    pub fn unique_coords(&self) -> usize {
        self.hits.len()
    }

    /// Limits the per-coordinate example listing in [`fmt::Display`].
    /// Stored on the value so both text and JSON paths see the same
    /// report data; JSON always carries every occurrence.
    pub fn display_with(self, max_examples: usize) -> DisplayReport {
        DisplayReport {
            report: self,
            max_examples,
        }
    }
}

/// A [`CorrelationReport`] paired with its text-rendering limit.
pub struct DisplayReport {
    pub report: CorrelationReport,
    pub max_examples: usize,
}

impl fmt::Display for DisplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in &self.report.hits {
            let offsets: Vec<usize> = hit.occurrences.iter().map(|o| o.offset).collect();
            writeln!(f, "Coord {} -> offsets {:?}", hit.coord, offsets)?;
            for occurrence in hit.occurrences.iter().take(self.max_examples) {
                match occurrence.preceding {
                    Some(byte) => writeln!(
                        f,
                        "  opcode byte @ {}: 0x{:02X}",
                        occurrence.offset - 1,
                        byte
                    )?,
                    None => writeln!(f, "  hit at offset 0: no preceding byte")?,
                }
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total unique coords found: {}",
            self.report.unique_coords()
        )
    }
}
