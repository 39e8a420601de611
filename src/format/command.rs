//! Decoded drawing commands and the runs they are collected into.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// The kind of record an opcode byte tags, independent of its operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    MoveTo,
    LineTo,
    CurveTo,
    End,
}

impl OpKind {
    /// Fixed operand size in bytes for this record kind.
    #[inline]
    pub fn operand_len(self) -> usize {
        match self {
            OpKind::MoveTo | OpKind::LineTo => 4,
            OpKind::CurveTo => 12,
            OpKind::End => 0,
        }
    }
}

/// One decoded drawing command.
///
/// Commands are pure values produced by the decoder from a fixed-size
/// byte window and consumed by the serializer or diagnostic printers.
/// A `CurveTo` carries its two control points followed by the end point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveTo(Coord),
    LineTo(Coord),
    CurveTo(Coord, Coord, Coord),
    End,
}

impl Command {
    /// The coordinate a bounding-box policy judges this command by: the
    /// operand point for move/line, the end point for a curve (control
    /// points may legitimately overshoot the artwork box).
    #[inline]
    pub fn anchor(&self) -> Option<Coord> {
        match *self {
            Command::MoveTo(p) | Command::LineTo(p) => Some(p),
            Command::CurveTo(_, _, p3) => Some(p3),
            Command::End => None,
        }
    }
}

/// Why a decode run stopped where it did.
///
/// Only `EndMarker` means the stream terminated the way the format
/// intends; the others mark the point at which the current offset or
/// encoding hypothesis stopped explaining the bytes. None of these are
/// errors — a run always ends at the last good position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The terminator opcode was read (and consumed).
    EndMarker,
    /// A byte value no hypothesis maps to a record kind.
    UnknownOpcode(u8),
    /// An opcode was read but its operand ran past the buffer.
    Truncated,
    /// The buffer ended cleanly on a record boundary.
    OutOfData,
    /// A validated decode rejected a record whose coordinate left the
    /// configured bounds.
    OutOfBounds,
}

/// An ordered sequence of commands decoded from one contiguous byte
/// range: a single hypothesis about where the real stream lives.
///
/// `start..end` is the half-open byte range consumed, relative to the
/// blob handed to the decoder; `end` sits past the terminator when the
/// run stopped on one. Run length, for scoring candidates, is
/// `commands.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeRun {
    pub start: usize,
    pub end: usize,
    pub commands: Vec<Command>,
    pub stop: StopReason,
}

impl DecodeRun {
    /// Number of commands decoded — the score used to compare
    /// stream-start candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the run contains no commands at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
