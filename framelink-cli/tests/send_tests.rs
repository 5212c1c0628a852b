use framelink_cli::commands::send;
use framelink_core::LinkConfig;
use std::io::Cursor;

fn run_send(input: &str, mtu: usize) -> anyhow::Result<String> {
    let mut output = Vec::new();
    send::run(
        Cursor::new(input.as_bytes()),
        &mut output,
        LinkConfig::new(mtu),
        ".",
    )?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn send_emits_one_frame_line_per_short_message() {
    let out = run_send("Hi\n", 20).unwrap();
    assert_eq!(out, "<E-02-Hi-79>\n");
}

#[test]
fn send_splits_long_messages_across_frames() {
    let out = run_send("abcdefghijklmno\n", 20).unwrap();
    assert_eq!(out, "<D-10-abcdefghij-15>\n<E-05-klmno-50>\n");
}

#[test]
fn send_stops_at_the_stop_line() {
    let out = run_send("Hi\n.\nnever sent\n", 20).unwrap();
    assert_eq!(out, "<E-02-Hi-79>\n");
}

#[test]
fn send_frames_an_empty_message_line() {
    let out = run_send("\n", 20).unwrap();
    assert_eq!(out, "<E-00--00>\n");
}

#[test]
fn send_fails_fast_on_a_bad_mtu() {
    let err = run_send("too big for mtu ten\n", 10).unwrap_err();
    assert!(err.to_string().contains("sendMessage failed"));
}

#[test]
fn send_handles_multiple_messages_in_order() {
    let out = run_send("one\ntwo\n", 20).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("<E-03-one-"));
    assert!(lines[1].starts_with("<E-03-two-"));
}
