//! Error types for Framelink protocol operations

use alloc::string::String;

/// Errors that can occur while sending or receiving a message
///
/// Every variant is fatal to the current send or receive call; there is no
/// local recovery or partial result. End-of-stream is not an error and is
/// reported separately as `Ok(None)` by the receive path.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// MTU too small for the message being sent
    #[cfg_attr(
        feature = "std",
        error("MTU value error ({0}): MTU should be greater than 10 if it includes data, otherwise 10 is enough for empty frames")
    )]
    InvalidMtu(usize),

    /// Raw input does not match the frame grammar at all
    #[cfg_attr(
        feature = "std",
        error("no frame found in {0:?}: a frame should match <[E or D]-[data length value (two digits)]-[data (can be empty)]-[checksum value (two digits)]> e.g. \"<E-02-Hi-79>\"")
    )]
    MalformedFrame(String),

    /// Received frame is longer than the configured MTU
    #[cfg_attr(
        feature = "std",
        error("MTU mismatch detected: frame is {frame_len} characters but the MTU is {mtu}")
    )]
    MtuExceeded {
        /// Total character length of the offending frame.
        frame_len: usize,
        /// The configured MTU.
        mtu: usize,
    },

    /// Computed checksum differs from the frame's CHK field
    #[cfg_attr(
        feature = "std",
        error("checksum mismatch detected: computed {computed}, frame carries {claimed}")
    )]
    ChecksumMismatch {
        /// Checksum recomputed over the frame's non-checksum prefix.
        computed: String,
        /// Checksum claimed by the frame.
        claimed: String,
    },

    /// LEN field disagrees with the actual payload length
    #[cfg_attr(
        feature = "std",
        error("data segment length mismatch detected: field says {declared}, payload is {actual} characters")
    )]
    LengthMismatch {
        /// Value of the two-digit LEN field.
        declared: usize,
        /// Actual payload character count.
        actual: usize,
    },

    /// Payload exceeds the two-digit LEN field's ceiling
    #[cfg_attr(
        feature = "std",
        error("data segment length cannot be greater than 99 (got {0})")
    )]
    PayloadTooLong(usize),

    /// Input stream ended after a data frame but before the terminal frame
    #[cfg_attr(
        feature = "std",
        error("input stream ended before the terminal frame of the current message")
    )]
    TruncatedMessage,

    /// The physical link itself failed
    #[cfg_attr(feature = "std", error("transport failure: {0}"))]
    Transport(String),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ProtocolError {
    fn from(err: std::io::Error) -> Self {
        ProtocolError::Transport(err.to_string())
    }
}
