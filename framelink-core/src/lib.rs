//! # Framelink Core
//!
//! A minimal data-link framing protocol: split an arbitrarily long text
//! message into length-prefixed, checksummed frames that respect an MTU,
//! and losslessly reassemble it on the far side, detecting corruption and
//! malformed framing.
//!
//! ## Modules
//!
//! - `constants`: Frame grammar constants and limits
//! - `types`: Core types (Frame, FrameType, LinkConfig)
//! - `checksum`: Modulo-100 checksum codec
//! - `encoder`: Sender-side segmentation and frame encoding
//! - `decoder`: Fixed-field frame parsing and validation
//! - `transport`: Frame Transport boundary (physical link collaborators)
//! - `sender`: Message sender (segment, frame, emit)
//! - `receiver`: Message receiver (read, validate, reassemble)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod checksum;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod receiver;
pub mod sender;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use constants::FrameType;
pub use error::ProtocolError;
pub use receiver::{MessageReceiver, ReceiveState, Reassembler};
pub use sender::MessageSender;
pub use transport::{ReceiveFrame, SendFrame};
pub use types::{Frame, LinkConfig};

/// Result type alias for Framelink operations
pub type Result<T> = core::result::Result<T, ProtocolError>;
