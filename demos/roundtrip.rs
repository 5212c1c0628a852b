//! Send a message through an in-memory link and reassemble it.
//!
//! Run with: cargo run --example roundtrip

use framelink_core::{transport::FrameQueue, LinkConfig, MessageReceiver, MessageSender};

fn main() -> framelink_core::Result<()> {
    let message = "This message is longer than one frame can carry.";
    let config = LinkConfig::new(20);

    let mut tx = MessageSender::new(Vec::new(), config);
    tx.send_message(message)?;
    let frames = tx.into_transport();

    println!("message: {message:?}");
    println!("frames on the wire (mtu = {}):", config.mtu);
    for frame in &frames {
        println!("  {frame}");
    }

    let mut rx = MessageReceiver::new(FrameQueue::new(frames), config);
    let rebuilt = rx.receive_message()?;
    println!("reassembled: {rebuilt:?}");

    assert_eq!(rebuilt.as_deref(), Some(message));
    Ok(())
}
