//! Scan report types for stream-start candidates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::Endian;

/// One plausible stream start: an offset, the byte order it was decoded
/// under, and how many consecutive commands validated there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub offset: usize,
    pub endian: Endian,
    pub run: usize,
}

/// The result of a bounding-box-validated scan.
///
/// Candidates are sorted by run length descending, then offset
/// ascending, and truncated to the configured limit. The true stream
/// start is not always the global maximum when a header contains
/// coincidental opcode-like bytes, which is why the top candidates are
/// reported rather than a single winner.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Minimum run length a candidate had to reach.
    pub min_run: usize,
    /// Total candidates that met the threshold, before truncation.
    pub total_candidates: usize,
    /// The top candidates, best first.
    pub candidates: Vec<Candidate>,
}

impl ScanReport {
    /// The best-scoring candidate, if any met the threshold.
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Returns true if no candidate met the threshold.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.candidates.is_empty() {
            return writeln!(
                f,
                "No runs of {} or more commands found; loosen --min-run or widen --bounds",
                self.min_run
            );
        }

        writeln!(
            f,
            "Top candidates for vector stream start ({} of {} above threshold):",
            self.candidates.len(),
            self.total_candidates
        )?;
        for candidate in &self.candidates {
            writeln!(
                f,
                "  offset={} (0x{:X})  endian={}  run={}",
                candidate.offset,
                candidate.offset,
                match candidate.endian {
                    Endian::Little => "little",
                    Endian::Big => "big",
                },
                candidate.run
            )?;
        }
        Ok(())
    }
}
