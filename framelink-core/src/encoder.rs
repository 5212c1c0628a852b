//! Sender-side segmentation and frame encoding

use crate::checksum::compute_checksum;
use crate::constants::{FrameType, FIELD_SEPARATOR, FRAME_CLOSE, FRAME_OPEN, MIN_FRAME_LEN};
use crate::error::ProtocolError;
use crate::types::{Frame, LinkConfig};
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Split a message into payload chunks that respect the MTU
///
/// Chunks come out in message order, each at most
/// [`LinkConfig::max_payload_len`] characters, the last possibly shorter.
/// An empty message yields exactly one empty chunk, so that an empty
/// message still produces one terminal frame.
///
/// Fails with a configuration error when the MTU is below 10, or is exactly
/// 10 (room for an empty frame only) while the message is non-empty.
pub fn split_message(message: &str, config: &LinkConfig) -> Result<Vec<String>, ProtocolError> {
    if config.below_minimum() || (config.mtu == MIN_FRAME_LEN && !message.is_empty()) {
        return Err(ProtocolError::InvalidMtu(config.mtu));
    }

    if message.is_empty() {
        return Ok(vec![String::new()]);
    }

    let chars: Vec<char> = message.chars().collect();
    Ok(chars
        .chunks(config.max_payload_len())
        .map(|chunk| chunk.iter().collect())
        .collect())
}

/// Encode one frame into its wire form `<TYPE-LEN-PAYLOAD-CHK>`
///
/// The checksum is computed over `TYPE-LEN-PAYLOAD-` including all three
/// separator hyphens.
pub fn encode_frame(frame: &Frame) -> Result<String, ProtocolError> {
    frame.validate()?;

    let prefix = format!(
        "{}{sep}{:02}{sep}{}{sep}",
        frame.frame_type.as_char(),
        frame.payload_len(),
        frame.payload,
        sep = FIELD_SEPARATOR,
    );
    let checksum = compute_checksum(&prefix);

    Ok(format!("{FRAME_OPEN}{prefix}{checksum}{FRAME_CLOSE}"))
}

/// Segment a message and tag the resulting frames
///
/// Every chunk but the last is tagged `D`; the last is tagged `E`, so a
/// single-chunk message produces exactly one terminal frame.
pub fn frames_for_message(
    message: &str,
    config: &LinkConfig,
) -> Result<Vec<Frame>, ProtocolError> {
    let chunks = split_message(message, config)?;
    let last = chunks.len() - 1;

    Ok(chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let frame_type = if i == last {
                FrameType::End
            } else {
                FrameType::Data
            };
            Frame::new(frame_type, chunk)
        })
        .collect())
}
