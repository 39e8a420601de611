//! Stream location: finding where the command stream starts.
//!
//! An SGN file carries a header of unknown, apparently variable length
//! before its command stream, so every decode starts with a search.
//! Three strategies, all pure functions over the blob:
//!
//! - [`longest_run`]: exhaustive opcode-anchored trial decoding; the
//!   true start, by construction, decodes the longest coherent run.
//! - [`scan_validated`]: every offset under both byte orders through the
//!   bounds-validated decoder, reporting all candidates above a run
//!   threshold rather than a single winner.
//! - [`first_move_to`]: the first MoveTo opcode whose operand is already
//!   in bounds — cheap, for files known to open their stream with a move.

mod report;

pub use report::{Candidate, ScanReport};

use crate::decode::{decode_commands, decode_validated};
use crate::format::{Bounds, DecodeRun, Endian, FormatProfile};

/// Options for the bounding-box-validated scan.
#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    /// Minimum consecutive validated commands for an offset to qualify.
    pub min_run: usize,
    /// Maximum number of candidates to keep in the report.
    pub limit: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_run: 5,
            limit: 10,
        }
    }
}

/// Exhaustive search: trial-decode at every index holding a command
/// opcode and keep the offset with the most decoded commands, breaking
/// ties toward the lowest offset.
///
/// Returns `None` when no index holds a command opcode at all. False
/// starts (opcode bytes occurring inside coordinate data) almost always
/// hit an unknown opcode within a few records, so the winner's run
/// length dwarfs theirs.
pub fn longest_run(blob: &[u8], profile: &FormatProfile) -> Option<(usize, DecodeRun)> {
    let scored: Vec<(usize, usize)> = blob
        .iter()
        .enumerate()
        .filter(|&(_, &byte)| profile.is_command_opcode(byte))
        .map(|(offset, _)| (offset, decode_commands(&blob[offset..], profile).len()))
        .collect();

    let &(best_offset, _) = scored
        .iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))?;

    // scoring kept only lengths; decode the winner once more in full
    Some((best_offset, decode_commands(&blob[best_offset..], profile)))
}

/// Bounding-box-validated scan over every offset and both byte orders.
///
/// An empty report is a normal outcome (the bounds or opcode table may
/// simply be wrong for this file), not an error.
pub fn scan_validated(
    blob: &[u8],
    profile: &FormatProfile,
    bounds: &Bounds,
    opts: &ScanOptions,
) -> ScanReport {
    let mut candidates: Vec<Candidate> = Vec::new();

    for offset in 0..blob.len() {
        for endian in [Endian::Little, Endian::Big] {
            let run = decode_validated(&blob[offset..], &profile.with_endian(endian), bounds).len();
            if run >= opts.min_run {
                candidates.push(Candidate {
                    offset,
                    endian,
                    run,
                });
            }
        }
    }

    candidates.sort_by(|a, b| b.run.cmp(&a.run).then(a.offset.cmp(&b.offset)));
    let total_candidates = candidates.len();
    candidates.truncate(opts.limit);

    ScanReport {
        min_run: opts.min_run,
        total_candidates,
        candidates,
    }
}

/// The first index whose byte is the MoveTo opcode and whose decoded
/// operand already lies inside `bounds`.
///
/// Narrower than [`longest_run`] but far cheaper; useful when the stream
/// is known to begin with a MoveTo and in-range false positives are
/// rare.
pub fn first_move_to(blob: &[u8], profile: &FormatProfile, bounds: &Bounds) -> Option<usize> {
    blob.iter().enumerate().find_map(|(offset, &byte)| {
        if byte != profile.move_to {
            return None;
        }
        let coord = crate::format::Coord::decode_pair(blob, offset + 1, profile.endian).ok()?;
        bounds.contains(coord).then_some(offset)
    })
}

/// The first index holding any byte the profile recognizes, terminator
/// included. The crudest locator, kept as the fallback when nothing
/// better applies.
pub fn first_opcode(blob: &[u8], profile: &FormatProfile) -> Option<usize> {
    blob.iter()
        .position(|&byte| profile.classify(byte).is_some())
}
