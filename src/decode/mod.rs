//! Command-stream decoding.
//!
//! Turns a byte slice into an ordered run of drawing commands under a
//! given [`FormatProfile`]. Decoding is deliberately forgiving at the
//! edges: running out of data, hitting an unknown opcode, or reading a
//! truncated operand all end the run at the last good position rather
//! than erroring, because "does a long coherent run decode here?" is
//! exactly the question the stream locator asks of every candidate
//! offset.

use crate::format::{Bounds, Command, Coord, DecodeRun, FormatProfile, OpKind, StopReason};

/// Decodes commands from the start of `blob` until a terminator,
/// unknown opcode, or short record is hit.
///
/// A partially readable record is never materialized: the run's `end`
/// always sits on a record boundary (or just past the terminator).
pub fn decode_commands(blob: &[u8], profile: &FormatProfile) -> DecodeRun {
    decode_inner(blob, profile, None)
}

/// Like [`decode_commands`], but additionally stops the run when a
/// record's coordinate leaves `bounds`.
///
/// Move/line records are judged by their operand point, curves by their
/// end point only — control points may legitimately overshoot the
/// artwork box. This is the variant the locator uses to separate true
/// data from header bytes that happen to parse.
pub fn decode_validated(blob: &[u8], profile: &FormatProfile, bounds: &Bounds) -> DecodeRun {
    decode_inner(blob, profile, Some(bounds))
}

fn decode_inner(blob: &[u8], profile: &FormatProfile, bounds: Option<&Bounds>) -> DecodeRun {
    let mut cursor = 0usize;
    let mut commands = Vec::new();

    let stop = loop {
        let Some(&opcode) = blob.get(cursor) else {
            break StopReason::OutOfData;
        };
        let Some(kind) = profile.classify(opcode) else {
            break StopReason::UnknownOpcode(opcode);
        };
        if kind == OpKind::End {
            // consumed, but not materialized as a command
            cursor += 1;
            break StopReason::EndMarker;
        }

        let operand = cursor + 1;
        let command = match kind {
            OpKind::MoveTo | OpKind::LineTo => {
                let Ok(point) = Coord::decode_pair(blob, operand, profile.endian) else {
                    break StopReason::Truncated;
                };
                if kind == OpKind::MoveTo {
                    Command::MoveTo(point)
                } else {
                    Command::LineTo(point)
                }
            }
            OpKind::CurveTo => {
                let pairs = [
                    Coord::decode_pair(blob, operand, profile.endian),
                    Coord::decode_pair(blob, operand + 4, profile.endian),
                    Coord::decode_pair(blob, operand + 8, profile.endian),
                ];
                let [Ok(p1), Ok(p2), Ok(p3)] = pairs else {
                    break StopReason::Truncated;
                };
                Command::CurveTo(p1, p2, p3)
            }
            OpKind::End => unreachable!("handled above"),
        };

        if let (Some(bounds), Some(anchor)) = (bounds, command.anchor()) {
            if !bounds.contains(anchor) {
                break StopReason::OutOfBounds;
            }
        }

        cursor = operand + kind.operand_len();
        commands.push(command);
    };

    DecodeRun {
        start: 0,
        end: cursor,
        commands,
        stop,
    }
}

/// The X/Y extent of the move/line operand points in a command list, or
/// `None` when there are none. Curve operands are excluded so the result
/// reflects on-path geometry only.
pub fn coord_ranges(commands: &[Command]) -> Option<Bounds> {
    let mut points = commands.iter().filter_map(|command| match *command {
        Command::MoveTo(p) | Command::LineTo(p) => Some(p),
        _ => None,
    });

    let first = points.next()?;
    let mut ranges = Bounds::new(first.x, first.x, first.y, first.y);
    for p in points {
        ranges.x_min = ranges.x_min.min(p.x);
        ranges.x_max = ranges.x_max.max(p.x);
        ranges.y_min = ranges.y_min.min(p.y);
        ranges.y_max = ranges.y_max.max(p.y);
    }
    Some(ranges)
}
