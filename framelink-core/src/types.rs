//! Core types for Framelink frames and per-instance configuration

use crate::constants::{FrameType, FRAME_OVERHEAD, MAX_PAYLOAD_LEN, MIN_FRAME_LEN};
use crate::error::ProtocolError;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// One logical frame: a type marker plus the payload it carries
///
/// A `Frame` holds the decoded fields only; the wire form (delimiters, LEN
/// and CHK fields) is produced by the encoder and consumed by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame type: `Data` (more frames follow) or `End` (terminal)
    pub frame_type: FrameType,

    /// The message fragment carried by this frame (may be empty)
    pub payload: String,
}

impl Frame {
    /// Create a new frame
    pub fn new(frame_type: FrameType, payload: impl Into<String>) -> Self {
        Self {
            frame_type,
            payload: payload.into(),
        }
    }

    /// Payload length in characters (the value the LEN field must carry)
    pub fn payload_len(&self) -> usize {
        self.payload.chars().count()
    }

    /// Total character length of this frame once encoded
    pub fn encoded_len(&self) -> usize {
        self.payload_len() + FRAME_OVERHEAD
    }

    /// True if this frame terminates its message
    pub fn is_terminal(&self) -> bool {
        self.frame_type.is_terminal()
    }

    /// Validate the frame against the grammar's limits
    pub fn validate(&self) -> Result<(), ProtocolError> {
        let len = self.payload_len();
        if len > MAX_PAYLOAD_LEN {
            return Err(ProtocolError::PayloadTooLong(len));
        }
        Ok(())
    }
}

/// Per-instance protocol configuration
///
/// Supplied once at construction of each sender or receiver; there is no
/// process-wide mutable configuration. The `debug` toggle affects trace
/// verbosity only, never protocol behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Maximum total character length of a frame, sent or received
    pub mtu: usize,

    /// Emit per-frame diagnostic traces
    pub debug: bool,
}

impl LinkConfig {
    /// Create a configuration with diagnostics disabled
    pub fn new(mtu: usize) -> Self {
        Self { mtu, debug: false }
    }

    /// Enable or disable diagnostic traces
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Largest payload a single frame may carry under this MTU
    ///
    /// Bounded by both the MTU (minus the 10 fixed frame characters) and
    /// the two-digit LEN field's ceiling of 99.
    pub fn max_payload_len(&self) -> usize {
        self.mtu.saturating_sub(FRAME_OVERHEAD).min(MAX_PAYLOAD_LEN)
    }

    /// True if this MTU cannot carry even an empty frame
    pub fn below_minimum(&self) -> bool {
        self.mtu < MIN_FRAME_LEN
    }
}
