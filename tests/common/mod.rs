#![allow(dead_code)]

use std::fs;
use std::path::Path;

use sgntrace::format::{Command, Coord, Endian};

/// Encodes a command list as SGN stream bytes under the default opcode
/// table, appending the 0xFF terminator. The inverse of the decoder,
/// used only to synthesize fixtures.
pub fn sgn_bytes(commands: &[Command], endian: Endian) -> Vec<u8> {
    let mut bytes = Vec::new();
    for command in commands {
        match *command {
            Command::MoveTo(p) => {
                bytes.push(0x01);
                bytes.extend_from_slice(&p.encode_pair(endian));
            }
            Command::LineTo(p) => {
                bytes.push(0x02);
                bytes.extend_from_slice(&p.encode_pair(endian));
            }
            Command::CurveTo(p1, p2, p3) => {
                bytes.push(0x03);
                bytes.extend_from_slice(&p1.encode_pair(endian));
                bytes.extend_from_slice(&p2.encode_pair(endian));
                bytes.extend_from_slice(&p3.encode_pair(endian));
            }
            Command::End => bytes.push(0xFF),
        }
    }
    bytes.push(0xFF);
    bytes
}

/// A small in-bounds drawing: move, a few lines, one curve.
pub fn sample_commands() -> Vec<Command> {
    vec![
        Command::MoveTo(Coord::new(10, 20)),
        Command::LineTo(Coord::new(100, 40)),
        Command::LineTo(Coord::new(250, 300)),
        Command::CurveTo(Coord::new(260, 310), Coord::new(400, 380), Coord::new(591, 392)),
        Command::LineTo(Coord::new(0, 0)),
    ]
}

/// `sample_commands` serialized behind `header` bytes of junk, the way
/// a real file buries its stream.
pub fn sgn_file_bytes(header: &[u8], endian: Endian) -> Vec<u8> {
    let mut bytes = header.to_vec();
    bytes.extend_from_slice(&sgn_bytes(&sample_commands(), endian));
    bytes
}

pub fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, bytes).expect("write fixture file");
}

/// Header bytes that hold no opcode values and decode nowhere: every
/// byte is outside {0x01, 0x02, 0x03, 0xFF}.
pub fn junk_header() -> Vec<u8> {
    vec![0x53, 0x47, 0x4E, 0x30, 0xAA, 0xBB, 0xCC, 0xDD, 0x7E, 0x7D]
}
