//! Sender-side Message Codec: segment, frame, emit

use crate::encoder::{encode_frame, frames_for_message};
use crate::error::ProtocolError;
use crate::transport::SendFrame;
use crate::types::LinkConfig;

#[cfg(feature = "logging")]
use tracing::debug;

/// Data-link message sender over a frame transport
///
/// One instance handles one logical message at a time; frames are emitted
/// strictly in message order, one transport send per frame. The call blocks
/// for the full duration of all constituent frame sends.
#[derive(Debug)]
pub struct MessageSender<T> {
    transport: T,
    config: LinkConfig,
}

impl<T: SendFrame> MessageSender<T> {
    /// Create a sender over the given physical link
    pub fn new(transport: T, config: LinkConfig) -> Self {
        #[cfg(feature = "logging")]
        if config.debug {
            debug!(mtu = config.mtu, "data link layer ready");
        }
        Self { transport, config }
    }

    /// Send one logical message
    ///
    /// The message may be empty but is always a defined value; an empty
    /// message still produces exactly one terminal frame. Fails without
    /// sending further frames as soon as the MTU precondition is violated
    /// or the transport reports a failure.
    pub fn send_message(&mut self, message: &str) -> Result<(), ProtocolError> {
        #[cfg(feature = "logging")]
        if self.config.debug {
            debug!(message, "sendMessage starting");
        }

        let frames = frames_for_message(message, &self.config)?;
        for frame in &frames {
            let raw = encode_frame(frame)?;
            #[cfg(feature = "logging")]
            if self.config.debug {
                debug!(frame = %raw, "sending frame");
            }
            self.transport.send_frame(&raw)?;
        }

        #[cfg(feature = "logging")]
        if self.config.debug {
            debug!(frames = frames.len(), "sendMessage finished");
        }
        Ok(())
    }

    /// The configuration this sender was built with
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Recover the underlying transport
    pub fn into_transport(self) -> T {
        self.transport
    }
}
