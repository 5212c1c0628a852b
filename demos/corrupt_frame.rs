//! Show corruption being caught by the checksum and MTU checks.
//!
//! Run with: cargo run --example corrupt_frame

use framelink_core::{transport::FrameQueue, LinkConfig, MessageReceiver, MessageSender};

fn main() -> framelink_core::Result<()> {
    let config = LinkConfig::new(20);

    let mut tx = MessageSender::new(Vec::new(), config);
    tx.send_message("Hi")?;
    let mut frames = tx.into_transport();
    println!("clean frame:     {}", frames[0]);

    // Flip one payload character without fixing the checksum
    frames[0] = frames[0].replace("Hi", "Ho");
    println!("corrupted frame: {}", frames[0]);

    let mut rx = MessageReceiver::new(FrameQueue::new(frames), config);
    match rx.receive_message() {
        Err(e) => println!("receiver rejected it: {e}"),
        Ok(m) => println!("unexpectedly accepted: {m:?}"),
    }

    Ok(())
}
