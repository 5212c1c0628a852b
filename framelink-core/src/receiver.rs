//! Receiver-side Message Codec: read, validate, reassemble

use crate::decoder::decode_frame;
use crate::error::ProtocolError;
use crate::transport::ReceiveFrame;
use crate::types::{Frame, LinkConfig};
use alloc::string::String;

#[cfg(feature = "logging")]
use tracing::debug;

/// Reassembly states, one terminal state per outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveState {
    /// Initial state, no frame accepted yet
    AwaitingFrame,
    /// At least one `D` frame accepted, more frames expected
    Accumulating,
    /// Terminal: an `E` frame was validated and appended
    Done,
    /// Terminal: the transport signaled end-of-stream before any frame
    StreamEnded,
    /// Terminal: a protocol violation aborted the message
    Failed,
}

impl ReceiveState {
    /// True once no further frames will be consumed
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReceiveState::AwaitingFrame | ReceiveState::Accumulating)
    }
}

/// Accumulates validated payloads until a terminal frame arrives
///
/// Pure state machine over already-decoded frames; transport and validation
/// concerns stay with [`MessageReceiver`].
#[derive(Debug)]
pub struct Reassembler {
    state: ReceiveState,
    message: String,
}

impl Default for Reassembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reassembler {
    /// Create an empty reassembler in `AwaitingFrame`
    pub fn new() -> Self {
        Self {
            state: ReceiveState::AwaitingFrame,
            message: String::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> ReceiveState {
        self.state
    }

    /// Append one validated frame's payload, advancing the state
    ///
    /// `D` keeps the machine in `Accumulating`; `E` moves it to `Done`.
    pub fn accept(&mut self, frame: Frame) -> ReceiveState {
        self.message.push_str(&frame.payload);
        let next = if frame.is_terminal() {
            ReceiveState::Done
        } else {
            ReceiveState::Accumulating
        };
        self.state = next;
        next
    }

    /// Record that the transport ended before a terminal frame
    pub fn stream_ended(&mut self) -> ReceiveState {
        self.state = ReceiveState::StreamEnded;
        ReceiveState::StreamEnded
    }

    /// Record a protocol violation; the partial message is discarded
    pub fn fail(&mut self) -> ReceiveState {
        self.state = ReceiveState::Failed;
        self.message.clear();
        ReceiveState::Failed
    }

    /// The fully assembled message, only once the machine reached `Done`
    pub fn into_message(self) -> Option<String> {
        match self.state {
            ReceiveState::Done => Some(self.message),
            _ => None,
        }
    }
}

/// Data-link message receiver over a frame transport
///
/// One instance handles one logical message per call. The receive loop has
/// no frame-count bound and no timeout: a sender that never emits `E` keeps
/// the call blocked on the next frame.
#[derive(Debug)]
pub struct MessageReceiver<T> {
    transport: T,
    config: LinkConfig,
}

impl<T: ReceiveFrame> MessageReceiver<T> {
    /// Create a receiver over the given physical link
    pub fn new(transport: T, config: LinkConfig) -> Self {
        #[cfg(feature = "logging")]
        if config.debug {
            debug!(mtu = config.mtu, "data link layer ready");
        }
        Self { transport, config }
    }

    /// Receive one logical message
    ///
    /// Returns `Ok(None)` only when the very first frame read hits
    /// end-of-stream, meaning no message was started. End-of-stream after a
    /// `D` frame was accepted is a [`ProtocolError::TruncatedMessage`]. Any
    /// parse or validation failure aborts with that specific error and no
    /// partial message.
    pub fn receive_message(&mut self) -> Result<Option<String>, ProtocolError> {
        #[cfg(feature = "logging")]
        if self.config.debug {
            debug!("receiveMessage starting");
        }

        let mut assembler = Reassembler::new();

        loop {
            let raw = match self.transport.receive_frame() {
                Ok(raw) => raw,
                Err(e) => {
                    assembler.fail();
                    return Err(e);
                }
            };

            let Some(raw) = raw else {
                return match assembler.state() {
                    ReceiveState::AwaitingFrame => {
                        assembler.stream_ended();
                        #[cfg(feature = "logging")]
                        if self.config.debug {
                            debug!("receiveMessage: end of input stream");
                        }
                        Ok(None)
                    }
                    _ => {
                        assembler.fail();
                        Err(ProtocolError::TruncatedMessage)
                    }
                };
            };

            #[cfg(feature = "logging")]
            if self.config.debug {
                debug!(frame = %raw, "frame received");
            }

            let frame = match decode_frame(&raw, self.config.mtu) {
                Ok(frame) => frame,
                Err(e) => {
                    assembler.fail();
                    return Err(e);
                }
            };

            if assembler.accept(frame) == ReceiveState::Done {
                // into_message is always Some here: the machine is in Done
                let message = assembler.into_message().unwrap_or_default();
                #[cfg(feature = "logging")]
                if self.config.debug {
                    debug!(message = %message, "receiveMessage finished");
                }
                return Ok(Some(message));
            }
        }
    }

    /// The configuration this receiver was built with
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Recover the underlying transport
    pub fn into_transport(self) -> T {
        self.transport
    }
}
