//! Receiver-side frame parsing and validation
//!
//! Parsing is an explicit fixed-field extraction rather than a scan for
//! delimiters: the `<TYPE-LL-` head and the `-CC>` tail are fixed width and
//! anchored at the string boundaries, so the payload is everything in
//! between and may itself contain `<`, `>` or `-` without ambiguity.

use crate::checksum::compute_checksum;
use crate::constants::{
    FrameType, CHECKSUM_DIGITS, FIELD_SEPARATOR, FRAME_CLOSE, FRAME_OPEN, MAX_PAYLOAD_LEN,
    MIN_FRAME_LEN,
};
use crate::error::ProtocolError;
use crate::types::Frame;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A structurally parsed frame, before validation
///
/// Carries the fields exactly as transmitted so the validator can compare
/// the claimed LEN and CHK values against recomputed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
    /// The TYPE field
    pub frame_type: FrameType,
    /// Numeric value of the two-digit LEN field
    pub declared_len: usize,
    /// The payload characters between the fixed-width head and tail
    pub payload: String,
    /// The two CHK digits exactly as transmitted
    pub claimed_checksum: String,
    /// Total character count of the raw frame, for the MTU check
    pub raw_len: usize,
}

fn malformed(raw: &str) -> ProtocolError {
    ProtocolError::MalformedFrame(raw.to_string())
}

/// Parse one raw frame string into its structural fields
///
/// Only the grammar is checked here; LEN, CHK and MTU compliance are the
/// validator's concern. Any structural mismatch yields a malformed-frame
/// error naming the offending input and the expected grammar.
pub fn parse_frame(raw: &str) -> Result<ParsedFrame, ProtocolError> {
    let chars: Vec<char> = raw.chars().collect();
    let n = chars.len();

    if n < MIN_FRAME_LEN {
        return Err(malformed(raw));
    }

    // Fixed-width head: '<' TYPE '-' digit digit '-'
    if chars[0] != FRAME_OPEN || chars[2] != FIELD_SEPARATOR || chars[5] != FIELD_SEPARATOR {
        return Err(malformed(raw));
    }
    let frame_type = FrameType::from_char(chars[1]).ok_or_else(|| malformed(raw))?;
    let (d1, d2) = (chars[3], chars[4]);
    if !d1.is_ascii_digit() || !d2.is_ascii_digit() {
        return Err(malformed(raw));
    }
    let declared_len =
        (d1 as usize - '0' as usize) * 10 + (d2 as usize - '0' as usize);

    // Fixed-width tail, anchored at the end: '-' digit digit '>'
    if chars[n - 1] != FRAME_CLOSE || chars[n - 4] != FIELD_SEPARATOR {
        return Err(malformed(raw));
    }
    let (c1, c2) = (chars[n - 3], chars[n - 2]);
    if !c1.is_ascii_digit() || !c2.is_ascii_digit() {
        return Err(malformed(raw));
    }
    let mut claimed_checksum = String::with_capacity(CHECKSUM_DIGITS);
    claimed_checksum.push(c1);
    claimed_checksum.push(c2);

    let payload: String = chars[6..n - 4].iter().collect();

    Ok(ParsedFrame {
        frame_type,
        declared_len,
        payload,
        claimed_checksum,
        raw_len: n,
    })
}

/// Validate a parsed frame against the configured MTU
///
/// The three checks are mandatory and run in a fixed order, stopping at the
/// first failure: MTU compliance, checksum compliance, length compliance.
pub fn validate_frame(parsed: &ParsedFrame, mtu: usize) -> Result<(), ProtocolError> {
    if parsed.raw_len > mtu {
        return Err(ProtocolError::MtuExceeded {
            frame_len: parsed.raw_len,
            mtu,
        });
    }

    // CHK covers TYPE-LEN-PAYLOAD- with all three hyphens, LEN exactly as
    // transmitted (always two digits, so re-rendering is faithful)
    let prefix = format!(
        "{}{sep}{:02}{sep}{}{sep}",
        parsed.frame_type.as_char(),
        parsed.declared_len,
        parsed.payload,
        sep = FIELD_SEPARATOR,
    );
    let computed = compute_checksum(&prefix);
    if computed != parsed.claimed_checksum {
        return Err(ProtocolError::ChecksumMismatch {
            computed,
            claimed: parsed.claimed_checksum.clone(),
        });
    }

    let actual = parsed.payload.chars().count();
    if actual > MAX_PAYLOAD_LEN {
        return Err(ProtocolError::PayloadTooLong(actual));
    }
    if actual != parsed.declared_len {
        return Err(ProtocolError::LengthMismatch {
            declared: parsed.declared_len,
            actual,
        });
    }

    Ok(())
}

/// Parse and validate one raw frame in a single call
pub fn decode_frame(raw: &str, mtu: usize) -> Result<Frame, ProtocolError> {
    let parsed = parse_frame(raw)?;
    validate_frame(&parsed, mtu)?;
    Ok(Frame::new(parsed.frame_type, parsed.payload))
}
