//! Property-based tests using proptest

use framelink_core::{
    checksum::{compute_checksum, verify_checksum},
    decoder::{decode_frame, parse_frame},
    encoder::{encode_frame, frames_for_message},
    transport::FrameQueue,
    LinkConfig, MessageReceiver, MessageSender,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_round_trip_any_message_any_mtu(
        message in ".{0,300}",
        mtu in 11usize..600
    ) {
        let mut tx = MessageSender::new(Vec::new(), LinkConfig::new(mtu));
        tx.send_message(&message).unwrap();
        let frames = tx.into_transport();

        // Every frame respects the MTU, and only the last one is terminal
        prop_assert!(frames.iter().all(|f| f.chars().count() <= mtu));
        prop_assert!(frames[..frames.len() - 1].iter().all(|f| f.starts_with("<D")));
        prop_assert!(frames.last().unwrap().starts_with("<E"));

        let mut rx = MessageReceiver::new(FrameQueue::new(frames), LinkConfig::new(mtu));
        prop_assert_eq!(rx.receive_message().unwrap(), Some(message));
    }

    #[test]
    fn prop_checksum_is_deterministic_and_self_verifying(
        prefix in ".{0,200}"
    ) {
        let digits = compute_checksum(&prefix);
        prop_assert_eq!(digits.len(), 2);
        prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(&digits, &compute_checksum(&prefix));
        prop_assert!(verify_checksum(&prefix, &digits));
    }

    #[test]
    fn prop_encode_decode_is_identity(
        payload in ".{0,99}",
        terminal in any::<bool>()
    ) {
        let frame_type = if terminal {
            framelink_core::FrameType::End
        } else {
            framelink_core::FrameType::Data
        };
        let frame = framelink_core::Frame::new(frame_type, payload);
        // The strategy caps the payload at 99 chars, so encoding succeeds
        let raw = encode_frame(&frame).unwrap();
        let decoded = decode_frame(&raw, usize::MAX).unwrap();
        prop_assert_eq!(decoded, frame);
    }

    #[test]
    fn prop_parse_never_panics(raw in ".{0,400}") {
        // Arbitrary text either parses or errors, never panics
        let _ = parse_frame(&raw);
    }

    #[test]
    fn prop_decode_never_panics(raw in ".{0,400}", mtu in 0usize..500) {
        let _ = decode_frame(&raw, mtu);
    }

    #[test]
    fn prop_segmentation_preserves_order_and_content(
        message in ".{1,300}",
        mtu in 11usize..600
    ) {
        let frames = frames_for_message(&message, &LinkConfig::new(mtu)).unwrap();
        let rebuilt: String = frames.iter().map(|f| f.payload.as_str()).collect();
        prop_assert_eq!(rebuilt, message);

        let terminals = frames.iter().filter(|f| f.is_terminal()).count();
        prop_assert_eq!(terminals, 1);
        prop_assert!(frames.last().unwrap().is_terminal());
    }

    #[test]
    fn prop_corrupting_the_checksum_is_always_caught(
        payload in "[a-zA-Z0-9 ]{0,40}",
        bump in 1u64..100
    ) {
        let frame = framelink_core::Frame::new(framelink_core::FrameType::End, payload);
        let raw = encode_frame(&frame).unwrap();

        // Replace CHK with a different two-digit value
        let n = raw.chars().count();
        let good: String = raw.chars().skip(n - 3).take(2).collect();
        let bad = format!("{:02}", (good.parse::<u64>().unwrap() + bump) % 100);
        let corrupted: String = raw
            .chars()
            .take(n - 3)
            .chain(bad.chars())
            .chain(std::iter::once('>'))
            .collect();

        let mut rx = MessageReceiver::new(
            FrameQueue::new([corrupted]),
            LinkConfig::new(usize::MAX),
        );
        prop_assert!(
            matches!(
                rx.receive_message(),
                Err(framelink_core::ProtocolError::ChecksumMismatch { .. })
            ),
            "expected ChecksumMismatch error"
        );
    }
}
