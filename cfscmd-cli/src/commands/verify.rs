use anyhow::{Context, Result};
use bytes::Bytes;
use cfscmd_core::{
    constants::SEQ_FLAGS_UNSEGMENTED,
    decoder::decode_command_with,
    ChecksumAlgorithm, CommandPacket,
};
use colored::*;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};

#[derive(Serialize)]
struct PacketReport {
    packet_id: String,
    message_id: u16,
    sequence: u16,
    length_field: u16,
    command_code: u8,
    checksum: String,
    checksum_algorithm: ChecksumAlgorithm,
    payload_len: usize,
    payload: String,
}

impl PacketReport {
    fn new(packet: &CommandPacket, algorithm: ChecksumAlgorithm) -> Self {
        Self {
            packet_id: format!("0x{:04X}", packet.header.packet_id),
            message_id: packet.message_id().value(),
            sequence: packet.sequence().value(),
            length_field: packet.header.length_field,
            command_code: packet.command_code,
            checksum: format!("0x{:02X}", packet.checksum),
            checksum_algorithm: algorithm,
            payload_len: packet.payload.len(),
            payload: hex::encode(&packet.payload),
        }
    }
}

/// Read a packet from a file (or `-` for stdin)
///
/// With `hex_input` the contents are hex text rather than raw bytes.
pub fn read_packet(input: &str, hex_input: bool) -> Result<Vec<u8>> {
    let data = if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?
    };

    if hex_input {
        let text = String::from_utf8(data).context("Hex input is not valid UTF-8")?;
        crate::parse_hex(&text).map_err(anyhow::Error::msg)
    } else {
        Ok(data)
    }
}

/// Decode and verify a packet, printing a report
pub fn execute(
    input: &str,
    hex_input: bool,
    algorithm: ChecksumAlgorithm,
    json: bool,
) -> Result<CommandPacket> {
    info!("Verifying packet: {}", input);

    let data = read_packet(input, hex_input)?;
    let packet = match decode_command_with(algorithm, Bytes::from(data)) {
        Ok(packet) => packet,
        Err(e) => {
            println!("{} Invalid packet: {}", "✗".red(), e);
            return Err(e).context("Packet verification failed");
        }
    };

    if json {
        let report = PacketReport::new(&packet, algorithm);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(packet);
    }

    println!("\n=== Primary Header ===");
    println!("Packet ID:          0x{:04X}", packet.header.packet_id);
    println!("Message ID:         0x{:03X}", packet.message_id().value());
    println!("Sequence:           {}", packet.sequence().value());
    println!("Length field:       {}", packet.header.length_field);

    println!("\n=== Secondary Header ===");
    println!("Command code:       {}", packet.command_code);
    println!(
        "Checksum:           0x{:02X} ({})",
        packet.checksum,
        algorithm.name()
    );

    println!("\n=== Payload ===");
    println!("Length:             {} bytes", packet.payload.len());
    if !packet.payload.is_empty() {
        println!("Data:               {}", hex::encode(&packet.payload));
    }

    if packet.header.sequence_flags() != SEQ_FLAGS_UNSEGMENTED {
        warn!(
            "Sequence flags are {:#04b}, expected unsegmented",
            packet.header.sequence_flags()
        );
    }

    println!("\n=== Summary ===");
    println!("{} Packet is a valid command ({} bytes)", "✓".green(), packet.total_size());

    Ok(packet)
}
