//! Constants and limits for the Framelink frame grammar

use serde::{Deserialize, Serialize};

/// Character that opens every frame
pub const FRAME_OPEN: char = '<';

/// Character that closes every frame
pub const FRAME_CLOSE: char = '>';

/// Field separator between TYPE, LEN, PAYLOAD and CHK
pub const FIELD_SEPARATOR: char = '-';

/// Number of digits in the LEN field
pub const LEN_DIGITS: usize = 2;

/// Number of digits in the CHK field
pub const CHECKSUM_DIGITS: usize = 2;

/// Modulus applied to the code-point sum when computing CHK
pub const CHECKSUM_MODULUS: u64 = 100;

/// Maximum payload length representable by the two-digit LEN field
pub const MAX_PAYLOAD_LEN: usize = 99;

/// Non-payload characters per frame:
/// `<` + TYPE + `-` + LEN (2) + `-` + `-` + CHK (2) + `>` = 10
pub const FRAME_OVERHEAD: usize = 10;

/// Shortest well-formed frame, an empty payload: `<E-00--00>`
pub const MIN_FRAME_LEN: usize = FRAME_OVERHEAD;

/// Frame type marker (the TYPE field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameType {
    /// Non-terminal frame (`D`): more frames of this message follow
    Data,
    /// Terminal frame (`E`): last frame of this message
    End,
}

impl FrameType {
    /// The on-the-wire character for this frame type
    pub const fn as_char(&self) -> char {
        match self {
            FrameType::Data => 'D',
            FrameType::End => 'E',
        }
    }

    /// Parse a TYPE character; anything outside {`D`, `E`} is not a frame type
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'D' => Some(FrameType::Data),
            'E' => Some(FrameType::End),
            _ => None,
        }
    }

    /// True for the terminal (`E`) type
    pub const fn is_terminal(&self) -> bool {
        matches!(self, FrameType::End)
    }
}
