//! Command packet decoding (strict mode)

use crate::checksum::ChecksumAlgorithm;
use crate::constants::{
    CHECKSUM_OFFSET, COMMAND_CODE_OFFSET, COMMAND_PACKET_ID_FLAGS, MIN_PACKET_SIZE,
    PRIMARY_HEADER_SIZE,
};
use crate::error::PacketError;
use crate::header::decode_primary_header;
use crate::types::CommandPacket;
use bytes::Bytes;

/// Decode a command packet from a byte slice, expecting the XOR checksum
///
/// This function performs strict validation:
/// - Validates minimum size
/// - Validates the command/secondary-header flag bits
/// - Validates the length field against the buffer
/// - Validates the checksum fixpoint
pub fn decode_command(data: &[u8]) -> Result<CommandPacket, PacketError> {
    decode_command_with(ChecksumAlgorithm::XorFold, Bytes::copy_from_slice(data))
}

/// Decode a command packet without copying the payload
///
/// `buf` must contain exactly one packet; the returned payload is a slice
/// of `buf`.
pub fn decode_command_with(
    algorithm: ChecksumAlgorithm,
    buf: Bytes,
) -> Result<CommandPacket, PacketError> {
    if buf.len() < MIN_PACKET_SIZE {
        return Err(PacketError::IncompletePacket {
            expected: MIN_PACKET_SIZE,
            actual: buf.len(),
        });
    }

    let header = decode_primary_header(&buf)?;

    // Version, type and secondary-header bits must match a command packet
    if header.packet_id & 0xF800 != COMMAND_PACKET_ID_FLAGS {
        return Err(PacketError::NotACommand(header.packet_id));
    }

    let declared = header.length_field as usize + 1;
    let actual = buf.len() - PRIMARY_HEADER_SIZE;
    if declared != actual {
        return Err(PacketError::LengthMismatch { declared, actual });
    }

    let residue = algorithm.fold(&buf);
    if residue != 0 {
        return Err(PacketError::ChecksumMismatch { residue });
    }

    Ok(CommandPacket {
        header,
        command_code: buf[COMMAND_CODE_OFFSET],
        checksum: buf[CHECKSUM_OFFSET],
        payload: buf.slice(MIN_PACKET_SIZE..),
    })
}
