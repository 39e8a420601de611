//! EPS-style path program output, and coordinate extraction from
//! reference drawings in the same vocabulary.
//!
//! The writer is a thin serializer over a decoded command list — all
//! the decoding intelligence lives upstream. The reader exists for the
//! correlator: it pulls integer coordinates out of a known-good
//! reference drawing so they can be matched back into raw bytes.
//! Replaying the emitted operators reproduces the exact decoded
//! coordinate sequence; nothing is transformed on the way out.

use std::fmt::Write;
use std::str::FromStr;

use crate::error::SgnError;
use crate::format::{Command, Coord};

/// Output canvas dimensions, declared in the EPS bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
        }
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `600x600`.
impl FromStr for Canvas {
    type Err = SgnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SgnError::InvalidCanvas(s.to_string());
        let (width, height) = s.split_once('x').ok_or_else(invalid)?;
        Ok(Self {
            width: width.trim().parse().map_err(|_| invalid())?,
            height: height.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Serializes a command list as an EPS path program: header and
/// bounding box, one operator per command, then stroke and showpage.
///
/// `End` commands emit nothing (the terminator has no textual form).
pub fn write_eps(commands: &[Command], canvas: Canvas) -> String {
    let mut out = String::new();
    out.push_str("%!PS-Adobe-3.0 EPSF-3.0\n");
    let _ = writeln!(out, "%%BoundingBox: 0 0 {} {}", canvas.width, canvas.height);
    out.push_str("newpath\n");

    for command in commands {
        match *command {
            Command::MoveTo(p) => {
                let _ = writeln!(out, "{} {} moveto", p.x, p.y);
            }
            Command::LineTo(p) => {
                let _ = writeln!(out, "{} {} lineto", p.x, p.y);
            }
            Command::CurveTo(p1, p2, p3) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} curveto",
                    p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
                );
            }
            Command::End => {}
        }
    }

    out.push_str("stroke\nshowpage\n");
    out
}

/// Extracts integer coordinates from a reference drawing.
///
/// Lines ending in `moveto`/`lineto` yield one coordinate; `curveto`
/// lines yield all three of their point pairs, in written order.
/// Numeric literals are rounded to the nearest integer before use as
/// lookup keys. Lines that match no recognized operator pattern (or
/// whose literals do not parse, or overflow i16) are skipped — a
/// reference drawing full of prose and DSC comments is normal input.
pub fn parse_reference_coords(text: &str) -> Vec<Coord> {
    let mut coords = Vec::new();

    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&operator, literals)) = tokens.split_last() else {
            continue;
        };

        let wanted = match operator {
            "moveto" | "lineto" => 2,
            "curveto" => 6,
            _ => continue,
        };
        if literals.len() != wanted {
            continue;
        }
        let Some(values) = parse_literals(literals) else {
            continue;
        };

        for pair in values.chunks_exact(2) {
            coords.push(Coord::new(pair[0], pair[1]));
        }
    }

    coords
}

fn parse_literals(literals: &[&str]) -> Option<Vec<i16>> {
    literals.iter().map(|token| round_i16(token)).collect()
}

fn round_i16(token: &str) -> Option<i16> {
    let value = token.parse::<f64>().ok()?.round();
    if value < f64::from(i16::MIN) || value > f64::from(i16::MAX) {
        return None;
    }
    Some(value as i16)
}
