//! Fuzzing entry points for cfscmd-core
//!
//! `fuzz_decode` and `fuzz_encode` take arbitrary bytes and are meant to be
//! called from a fuzz target body; the unit tests below exercise them with
//! fixed inputs.

use cfscmd_core::{decoder::decode_command, encoder::encode_command_with, ChecksumAlgorithm};

/// Decode arbitrary bytes as a command packet
pub fn fuzz_decode(data: &[u8]) {
    // Try to decode - should never panic
    let _ = decode_command(data);
}

/// Treat the input as `mid(2) cc(1) seq(2) alg(1) payload..` and check the
/// encoder's invariants
pub fn fuzz_encode(data: &[u8]) {
    if data.len() < 6 {
        return;
    }

    let message_id = u16::from_be_bytes([data[0], data[1]]);
    let command_code = data[2];
    let sequence = u16::from_be_bytes([data[3], data[4]]);
    let algorithm = if data[5] & 1 == 0 {
        ChecksumAlgorithm::XorFold
    } else {
        ChecksumAlgorithm::AdditiveFold
    };
    let payload = &data[6..];

    let packet = encode_command_with(algorithm, message_id, command_code, payload, sequence);
    assert_eq!(packet.len(), 8 + payload.len());
    assert_eq!(algorithm.fold(&packet), 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_decode_header_only() {
        fuzz_decode(&[0x18, 0x06, 0xC0, 0x01, 0xFF, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn test_fuzz_encode_short_input() {
        fuzz_encode(&[0xFF; 3]);
    }

    #[test]
    fn test_fuzz_encode_random() {
        fuzz_encode(&[0xFF; 1024]);
        fuzz_encode(&[0x00; 64]);
    }
}
