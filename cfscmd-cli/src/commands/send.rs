use anyhow::{Context, Result};
use bytes::Bytes;
use cfscmd_core::{
    encoder::encode_command_with, ChecksumAlgorithm, CommandSink, Destination, UdpTransport,
};
use tracing::info;

/// Everything needed to encode one command packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Raw message id (masked to 11 bits on the wire)
    pub message_id: u16,
    /// Command code
    pub command_code: u8,
    /// Payload bytes
    pub payload: Vec<u8>,
    /// Raw sequence count (masked to 14 bits on the wire)
    pub sequence: u16,
    /// Checksum convention
    pub checksum: ChecksumAlgorithm,
}

impl CommandRequest {
    /// A payload-less request with the XOR checksum
    pub fn new(message_id: u16, command_code: u8, sequence: u16) -> Self {
        Self {
            message_id,
            command_code,
            payload: Vec::new(),
            sequence,
            checksum: ChecksumAlgorithm::XorFold,
        }
    }

    /// Attach a payload
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Encode the packet
    pub fn encode(&self) -> Bytes {
        encode_command_with(
            self.checksum,
            self.message_id,
            self.command_code,
            &self.payload,
            self.sequence,
        )
    }
}

/// Encode `request` and send it to `destination`
///
/// With `dry_run` the packet is printed as hex instead of sent.
pub fn execute(request: &CommandRequest, destination: &Destination, dry_run: bool) -> Result<Bytes> {
    let packet = request.encode();

    if dry_run {
        info!(
            "Dry run: {} bytes for {} (MID=0x{:04X}, CC={})",
            packet.len(),
            destination,
            request.message_id,
            request.command_code
        );
        println!("{}", hex::encode(&packet));
        return Ok(packet);
    }

    info!(
        "Sending {} bytes to {} (MID=0x{:04X}, CC={}, seq={}) ...",
        packet.len(),
        destination,
        request.message_id,
        request.command_code,
        request.sequence
    );

    send_via(&UdpTransport::new(destination.clone()), &packet)
        .with_context(|| format!("Failed to send command to {}", destination))?;

    info!("Sent.");
    Ok(packet)
}

/// Hand an encoded packet to any sink
pub fn send_via<S: CommandSink + ?Sized>(sink: &S, packet: &[u8]) -> Result<()> {
    sink.send(packet)?;
    Ok(())
}
