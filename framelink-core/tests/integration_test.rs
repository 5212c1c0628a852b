//! Integration tests for the complete send → transport → receive flow

use framelink_core::{
    transport::FrameQueue, LinkConfig, MessageReceiver, MessageSender, ProtocolError,
};

/// Send a message into an in-memory link, then receive it back.
fn loopback(message: &str, mtu: usize) -> Result<Option<String>, ProtocolError> {
    let mut tx = MessageSender::new(Vec::new(), LinkConfig::new(mtu));
    tx.send_message(message)?;
    let frames = tx.into_transport();

    let mut rx = MessageReceiver::new(FrameQueue::new(frames), LinkConfig::new(mtu));
    rx.receive_message()
}

#[test]
fn test_round_trip_simple() {
    assert_eq!(
        loopback("hello world", 20).unwrap().as_deref(),
        Some("hello world")
    );
}

#[test]
fn test_round_trip_empty_message() {
    assert_eq!(loopback("", 10).unwrap().as_deref(), Some(""));
}

#[test]
fn test_round_trip_multi_frame() {
    let message = "The quick brown fox jumps over the lazy dog, repeatedly, \
                   until the message no longer fits in a single frame.";
    for mtu in [11, 12, 15, 20, 50, 109, 500] {
        assert_eq!(
            loopback(message, mtu).unwrap().as_deref(),
            Some(message),
            "round trip failed at mtu {mtu}"
        );
    }
}

#[test]
fn test_round_trip_payload_with_delimiters() {
    // Payload content is unrestricted: frame delimiters inside the payload
    // must survive because parsing is fixed-field, not delimiter scanning
    let message = "a<b>c-d--<E-02-Hi-79>-e";
    assert_eq!(loopback(message, 20).unwrap().as_deref(), Some(message));
}

#[test]
fn test_round_trip_multibyte_text() {
    let message = "héllo wörld — ελληνικά 日本語";
    assert_eq!(loopback(message, 16).unwrap().as_deref(), Some(message));
}

#[test]
fn test_sender_frame_shape_mtu_twenty() {
    // MTU 20 with a 15-character message: exactly two frames, D then E
    let mut tx = MessageSender::new(Vec::new(), LinkConfig::new(20));
    tx.send_message("abcdefghijklmno").unwrap();
    let frames = tx.into_transport();

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], "<D-10-abcdefghij-15>");
    assert_eq!(frames[1], "<E-05-klmno-50>");
}

#[test]
fn test_corrupted_checksum_is_rejected() {
    let mut tx = MessageSender::new(Vec::new(), LinkConfig::new(20));
    tx.send_message("Hi").unwrap();
    let mut frames = tx.into_transport();

    // Mutate the CHK field to a different two-digit value
    assert_eq!(frames[0], "<E-02-Hi-79>");
    frames[0] = String::from("<E-02-Hi-80>");

    let mut rx = MessageReceiver::new(FrameQueue::new(frames), LinkConfig::new(20));
    assert!(matches!(
        rx.receive_message(),
        Err(ProtocolError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_corrupted_payload_is_rejected() {
    // Flip one payload character; the checksum no longer matches
    let frames = vec![String::from("<E-02-Ho-79>")];
    let mut rx = MessageReceiver::new(FrameQueue::new(frames), LinkConfig::new(20));
    assert!(matches!(
        rx.receive_message(),
        Err(ProtocolError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_garbage_input_is_malformed() {
    let frames = vec![String::from("garbage")];
    let mut rx = MessageReceiver::new(FrameQueue::new(frames), LinkConfig::new(20));
    match rx.receive_message() {
        Err(ProtocolError::MalformedFrame(raw)) => assert_eq!(raw, "garbage"),
        other => panic!("expected malformed frame, got {other:?}"),
    }
}

#[test]
fn test_receiver_rejects_frames_above_its_own_mtu() {
    // Sender allowed a bigger frame than the receiver's MTU permits
    let mut tx = MessageSender::new(Vec::new(), LinkConfig::new(50));
    tx.send_message("fits in a single fifty-char frame").unwrap();
    let frames = tx.into_transport();
    assert_eq!(frames.len(), 1);

    let mut rx = MessageReceiver::new(FrameQueue::new(frames), LinkConfig::new(20));
    assert!(matches!(
        rx.receive_message(),
        Err(ProtocolError::MtuExceeded { .. })
    ));
}

#[test]
fn test_mtu_ten_carries_only_the_empty_message() {
    assert_eq!(loopback("", 10).unwrap().as_deref(), Some(""));
    assert!(matches!(
        loopback("x", 10),
        Err(ProtocolError::InvalidMtu(10))
    ));
    assert!(matches!(
        loopback("", 9),
        Err(ProtocolError::InvalidMtu(9))
    ));
}

#[test]
fn test_back_to_back_messages_share_one_stream() {
    let mut tx = MessageSender::new(Vec::new(), LinkConfig::new(14));
    tx.send_message("first").unwrap();
    tx.send_message("").unwrap();
    tx.send_message("the third message").unwrap();
    let frames = tx.into_transport();

    let mut rx = MessageReceiver::new(FrameQueue::new(frames), LinkConfig::new(14));
    assert_eq!(rx.receive_message().unwrap().as_deref(), Some("first"));
    assert_eq!(rx.receive_message().unwrap().as_deref(), Some(""));
    assert_eq!(
        rx.receive_message().unwrap().as_deref(),
        Some("the third message")
    );
    assert_eq!(rx.receive_message().unwrap(), None);
}
