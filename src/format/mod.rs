//! Core types for the recovered SGN vector format.
//!
//! This module defines the data model every other part of the crate works
//! in terms of: signed 16-bit coordinate pairs, the drawing-command
//! variants, and the format hypothesis (opcode values, byte order,
//! plausible coordinate bounds) under which a byte stream is decoded.
//!
//! # Design Principles
//!
//! 1. **Hypotheses are configuration**: nothing about the format (opcode
//!    byte values, endianness, bounding box) lives in module constants.
//!    Every decoder takes a [`FormatProfile`], so competing hypotheses
//!    can be evaluated side by side without interference.
//!
//! 2. **Permissive values, strict reads**: a [`Coord`] may hold any i16
//!    pair; plausibility (the bounding box) is the caller's policy. Reads
//!    are strict the other way around — a command is never materialized
//!    from bytes that are not fully inside the buffer.

mod bounds;
mod command;
mod coord;
mod profile;

// Re-export core types for convenient access
pub use bounds::Bounds;
pub use command::{Command, DecodeRun, OpKind, StopReason};
pub use coord::{Coord, Endian};
pub use profile::FormatProfile;
