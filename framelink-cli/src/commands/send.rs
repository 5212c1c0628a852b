use anyhow::{Context, Result};
use framelink_core::{transport::LineSender, LinkConfig, MessageSender};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Wire the send rig to stdin (messages) and stdout (frames).
pub fn execute(mtu: usize, stop: &str, debug: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        stdin.lock(),
        stdout.lock(),
        LinkConfig::new(mtu).with_debug(debug),
        stop,
    )
}

/// Read one message per line from `input` until end of input or the stop
/// line, and emit each message's frames to `output`, one frame per line.
///
/// The first protocol or transport error aborts the rig; messages entered
/// after it are not sent.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: LinkConfig,
    stop: &str,
) -> Result<()> {
    info!(mtu = config.mtu, "send rig starting");

    let mut sender = MessageSender::new(LineSender::new(output), config);
    let mut messages = 0usize;

    for line in input.lines() {
        let message = line.context("failed to read message line")?;
        if message == stop {
            break;
        }

        sender
            .send_message(&message)
            .with_context(|| format!("sendMessage failed for {message:?}"))?;
        messages += 1;
    }

    info!(messages, "send rig finished");
    Ok(())
}
