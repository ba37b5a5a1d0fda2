use super::send::CommandRequest;
use anyhow::{Context, Result};
use bytes::Bytes;
use std::fs;
use tracing::info;

/// Encode `request` without sending it
///
/// `output` of `-` prints hex to stdout; anything else is a file path that
/// receives the raw packet bytes.
pub fn execute(request: &CommandRequest, output: &str) -> Result<Bytes> {
    let packet = request.encode();

    if output == "-" {
        println!("{}", hex::encode(&packet));
    } else {
        fs::write(output, &packet)
            .with_context(|| format!("Failed to write output file: {}", output))?;
        info!("Wrote {} byte packet to {}", packet.len(), output);
    }

    Ok(packet)
}
