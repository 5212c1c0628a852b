use anyhow::{Context, Result};
use framelink_core::{transport::LineReceiver, LinkConfig, MessageReceiver};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Wire the receive rig to stdin (frames) and stdout (messages).
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

/// Read one frame per line from `input` and print each reassembled message
/// to `output`, until end of input or the stop line.
///
/// The first protocol error aborts the rig with that error; frames after it
/// are not consumed.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: LinkConfig,
    stop: &str,
) -> Result<()> {
    info!(mtu = config.mtu, "receive rig starting");

    let transport = LineReceiver::new(input).with_stop(stop);
    let mut receiver = MessageReceiver::new(transport, config);
    let mut messages = 0usize;

    loop {
        match receiver.receive_message() {
            Ok(Some(message)) => {
                writeln!(output, "{message}").context("failed to write message")?;
                messages += 1;
            }
            Ok(None) => {
                info!("end of input stream reached");
                break;
            }
            Err(e) => return Err(e).context("receiveMessage failed"),
        }
    }

    info!(messages, "receive rig finished");
    Ok(())
}
