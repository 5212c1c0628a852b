//! Frame Transport boundary: one opaque text frame in, one out
//!
//! The physical layer is a line-oriented text collaborator: each frame
//! occupies exactly one line. The traits carry no framing semantics; they
//! move already-built frame strings and report end-of-stream.

use crate::error::ProtocolError;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

/// Sender half of the physical link
pub trait SendFrame {
    /// Hand one already-built frame to the link
    fn send_frame(&mut self, frame: &str) -> Result<(), ProtocolError>;
}

/// Receiver half of the physical link
///
/// Blocks until one raw frame line is available; `Ok(None)` signals that
/// the underlying source is exhausted.
pub trait ReceiveFrame {
    /// Receive the next raw frame, or `None` at end-of-stream
    fn receive_frame(&mut self) -> Result<Option<String>, ProtocolError>;
}

/// In-memory sender that records every frame, for tests and loopback
impl SendFrame for Vec<String> {
    fn send_frame(&mut self, frame: &str) -> Result<(), ProtocolError> {
        self.push(String::from(frame));
        Ok(())
    }
}

/// In-memory frame source, for tests and loopback
#[derive(Debug, Clone, Default)]
pub struct FrameQueue {
    frames: VecDeque<String>,
}

impl FrameQueue {
    /// Create a queue that will yield the given frames in order
    pub fn new(frames: impl IntoIterator<Item = String>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl ReceiveFrame for FrameQueue {
    fn receive_frame(&mut self) -> Result<Option<String>, ProtocolError> {
        Ok(self.frames.pop_front())
    }
}

/// Line-oriented sender over any [`std::io::Write`], one frame per line
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct LineSender<W> {
    writer: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> LineSender<W> {
    /// Wrap a writer as the sending half of the physical link
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> SendFrame for LineSender<W> {
    fn send_frame(&mut self, frame: &str) -> Result<(), ProtocolError> {
        writeln!(self.writer, "{frame}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Line-oriented receiver over any [`std::io::BufRead`], one frame per line
///
/// An optional stop string lets an interactive user signal end-of-stream;
/// a line equal to the stop string is treated exactly like end of input.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct LineReceiver<R> {
    reader: R,
    stop: Option<String>,
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead> LineReceiver<R> {
    /// Wrap a reader as the receiving half of the physical link
    pub fn new(reader: R) -> Self {
        Self { reader, stop: None }
    }

    /// Treat a line equal to `stop` as end-of-stream
    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop = Some(stop.into());
        self
    }
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead> ReceiveFrame for LineReceiver<R> {
    fn receive_frame(&mut self) -> Result<Option<String>, ProtocolError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }

        // Strip the line terminator; frame content is never trimmed beyond it
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        if self.stop.as_deref() == Some(line.as_str()) {
            return Ok(None);
        }

        Ok(Some(line))
    }
}
