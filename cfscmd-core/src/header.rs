//! CCSDS primary header codec
//!
//! Layout (three big-endian `u16` fields, 6 bytes total):
//!
//! ```text
//! packet id        | ver(3)=0 | type(1)=1 | shdr(1)=1 | message id(11) |
//! sequence control | flags(2)=0b11 | sequence count(14)              |
//! length           | bytes after the primary header, minus one        |
//! ```

use crate::constants::{
    COMMAND_PACKET_ID_FLAGS, MESSAGE_ID_MASK, PRIMARY_HEADER_SIZE, SEQUENCE_MASK,
    SEQ_FLAGS_UNSEGMENTED,
};
use crate::error::PacketError;
use crate::types::PrimaryHeader;
use bytes::BufMut;

/// Encode a primary header
///
/// `message_id` is masked to 11 bits, `sequence` to 14 bits and
/// `length_field` to 16 bits. Nothing is rejected.
pub fn encode_primary_header(
    message_id: u16,
    sequence: u16,
    length_field: usize,
) -> [u8; PRIMARY_HEADER_SIZE] {
    let packet_id = COMMAND_PACKET_ID_FLAGS | (message_id & MESSAGE_ID_MASK);
    let seq_ctrl = (SEQ_FLAGS_UNSEGMENTED << 14) | (sequence & SEQUENCE_MASK);
    let length = (length_field & 0xFFFF) as u16;

    let mut out = [0u8; PRIMARY_HEADER_SIZE];
    let mut buf = &mut out[..];
    buf.put_u16(packet_id);
    buf.put_u16(seq_ctrl);
    buf.put_u16(length);
    out
}

/// Decode the first six bytes of `data` as a primary header
///
/// No flag validation happens here; see [`crate::decoder`] for that.
pub fn decode_primary_header(data: &[u8]) -> Result<PrimaryHeader, PacketError> {
    if data.len() < PRIMARY_HEADER_SIZE {
        return Err(PacketError::IncompletePacket {
            expected: PRIMARY_HEADER_SIZE,
            actual: data.len(),
        });
    }

    Ok(PrimaryHeader {
        packet_id: u16::from_be_bytes([data[0], data[1]]),
        sequence_control: u16::from_be_bytes([data[2], data[3]]),
        length_field: u16::from_be_bytes([data[4], data[5]]),
    })
}
