//! Send an Executive Services NOOP to CI_LAB
//!
//! Usage: cargo run -p cfscmd-core --example es_noop -- <host> [port]

use cfscmd_core::{
    catalog::{ES_CMD_MID, ES_NOOP_CC},
    constants::DEFAULT_CI_LAB_PORT,
    encoder::encode_command,
    transport::send_packet,
    Destination,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "127.0.0.1".to_string());
    let port = match args.next() {
        Some(p) => p.parse()?,
        None => DEFAULT_CI_LAB_PORT,
    };
    let destination = Destination::new(host, port);

    let packet = encode_command(ES_CMD_MID, ES_NOOP_CC, b"", 1);

    println!(
        "Sending {} bytes to {} (MID=0x{:04X}, CC={}) ...",
        packet.len(),
        destination,
        ES_CMD_MID,
        ES_NOOP_CC
    );
    send_packet(&packet, &destination)?;
    println!("Sent.");

    Ok(())
}
