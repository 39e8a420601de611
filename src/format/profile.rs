//! The format hypothesis under which a byte stream is decoded.

use serde::{Deserialize, Serialize};

use super::command::OpKind;
use super::coord::Endian;

/// One hypothesis about the command encoding: which byte value tags each
/// record kind, and the byte order of coordinate fields.
///
/// Passed explicitly into every decoder and search so that competing
/// hypotheses can be evaluated side by side. The default is the mapping
/// confirmed by correlating reference-artwork coordinates back into raw
/// files: `0x01` move, `0x02` line, `0x03` curve, `0xFF` terminator,
/// little-endian operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatProfile {
    pub move_to: u8,
    pub line_to: u8,
    pub curve_to: u8,
    pub end: u8,
    pub endian: Endian,
}

impl Default for FormatProfile {
    fn default() -> Self {
        Self {
            move_to: 0x01,
            line_to: 0x02,
            curve_to: 0x03,
            end: 0xFF,
            endian: Endian::Little,
        }
    }
}

impl FormatProfile {
    /// Returns the same profile with the byte order swapped out.
    #[inline]
    pub fn with_endian(self, endian: Endian) -> Self {
        Self { endian, ..self }
    }

    /// Classifies an opcode byte under this hypothesis, or `None` for an
    /// unknown byte value.
    #[inline]
    pub fn classify(&self, byte: u8) -> Option<OpKind> {
        if byte == self.move_to {
            Some(OpKind::MoveTo)
        } else if byte == self.line_to {
            Some(OpKind::LineTo)
        } else if byte == self.curve_to {
            Some(OpKind::CurveTo)
        } else if byte == self.end {
            Some(OpKind::End)
        } else {
            None
        }
    }

    /// Returns true if the byte tags a drawing record (not the
    /// terminator). Anchor points for the exhaustive search.
    #[inline]
    pub fn is_command_opcode(&self, byte: u8) -> bool {
        byte == self.move_to || byte == self.line_to || byte == self.curve_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification() {
        let profile = FormatProfile::default();
        assert_eq!(profile.classify(0x01), Some(OpKind::MoveTo));
        assert_eq!(profile.classify(0x02), Some(OpKind::LineTo));
        assert_eq!(profile.classify(0x03), Some(OpKind::CurveTo));
        assert_eq!(profile.classify(0xFF), Some(OpKind::End));
        assert_eq!(profile.classify(0x07), None);
        assert_eq!(profile.classify(0x00), None);
    }

    #[test]
    fn test_command_opcodes_exclude_terminator() {
        let profile = FormatProfile::default();
        assert!(profile.is_command_opcode(0x01));
        assert!(profile.is_command_opcode(0x02));
        assert!(profile.is_command_opcode(0x03));
        assert!(!profile.is_command_opcode(0xFF));
        assert!(!profile.is_command_opcode(0x04));
    }

    #[test]
    fn test_alternate_hypothesis() {
        // a shifted opcode table must not inherit the default mapping
        let profile = FormatProfile {
            move_to: 0x10,
            line_to: 0x20,
            curve_to: 0x30,
            end: 0x00,
            endian: Endian::Big,
        };
        assert_eq!(profile.classify(0x01), None);
        assert_eq!(profile.classify(0x10), Some(OpKind::MoveTo));
        assert_eq!(profile.classify(0x00), Some(OpKind::End));
    }
}
