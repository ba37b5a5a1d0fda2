//! Build a sample app DISPLAY_PARAM command and dump it without sending

use cfscmd_core::{
    catalog::{SAMPLE_APP_CMD_MID, SAMPLE_APP_DISPLAY_PARAM_CC},
    decoder::decode_command,
    encoder::CommandBuilder,
    payload::display_param_payload,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cfscmd DISPLAY_PARAM example\n");

    let payload = display_param_payload(42, -7, "hello from the ground");
    let packet = CommandBuilder::new(SAMPLE_APP_CMD_MID)
        .code(SAMPLE_APP_DISPLAY_PARAM_CC)
        .sequence(1)
        .payload(payload)
        .build();

    for (i, chunk) in packet.chunks(16).enumerate() {
        let line: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        println!("{:04x}: {}", i * 16, line.join(" "));
    }

    let decoded = decode_command(&packet)?;
    println!(
        "\nMID=0x{:04X} CC={} seq={} checksum=0x{:02X} ({} bytes)",
        decoded.header.packet_id,
        decoded.command_code,
        decoded.sequence().value(),
        decoded.checksum,
        decoded.total_size()
    );

    Ok(())
}
