//! Command packet encoding

use crate::checksum::ChecksumAlgorithm;
use crate::constants::{CHECKSUM_OFFSET, MIN_PACKET_SIZE, PRIMARY_HEADER_SIZE};
use crate::header::encode_primary_header;
use crate::types::MessageId;
use bytes::{BufMut, Bytes, BytesMut};

/// Encode a command packet with the XOR checksum
///
/// The packet is encoded with the following layout:
/// 1. Primary header (6 bytes, big-endian): packet id, sequence control,
///    length (bytes after the primary header minus one)
/// 2. Secondary header (2 bytes): command code, checksum
/// 3. Payload (variable length)
///
/// `message_id` is masked to 11 bits and `sequence` to 14 bits. The
/// checksum is chosen so that XOR over the whole packet is zero.
pub fn encode_command(message_id: u16, command_code: u8, payload: &[u8], sequence: u16) -> Bytes {
    encode_command_with(
        ChecksumAlgorithm::XorFold,
        message_id,
        command_code,
        payload,
        sequence,
    )
}

/// Encode a command packet using the given checksum algorithm
pub fn encode_command_with(
    algorithm: ChecksumAlgorithm,
    message_id: u16,
    command_code: u8,
    payload: &[u8],
    sequence: u16,
) -> Bytes {
    let total_len = MIN_PACKET_SIZE + payload.len();
    let length_field = (total_len - 1) - PRIMARY_HEADER_SIZE;

    let mut buf = BytesMut::with_capacity(total_len);

    buf.put_slice(&encode_primary_header(message_id, sequence, length_field));

    // Secondary header, checksum provisionally zero
    buf.put_u8(command_code);
    buf.put_u8(0);

    buf.put_slice(payload);

    let checksum = algorithm.seal(&buf);
    buf[CHECKSUM_OFFSET] = checksum;

    buf.freeze()
}

/// Builder for command packets
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    message_id: u16,
    command_code: u8,
    sequence: u16,
    payload: Bytes,
    checksum: ChecksumAlgorithm,
}

impl CommandBuilder {
    /// Create a builder for the given raw message id
    pub fn new(message_id: u16) -> Self {
        Self {
            message_id,
            command_code: 0,
            sequence: 0,
            payload: Bytes::new(),
            checksum: ChecksumAlgorithm::default(),
        }
    }

    /// Create a builder from a bounded message id
    pub fn for_message(message_id: MessageId) -> Self {
        Self::new(message_id.value())
    }

    /// Set the command code
    pub fn code(mut self, command_code: u8) -> Self {
        self.command_code = command_code;
        self
    }

    /// Set the raw sequence count
    pub fn sequence(mut self, sequence: u16) -> Self {
        self.sequence = sequence;
        self
    }

    /// Set the payload
    pub fn payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Select the checksum algorithm
    pub fn checksum(mut self, algorithm: ChecksumAlgorithm) -> Self {
        self.checksum = algorithm;
        self
    }

    /// Build and encode the packet
    pub fn build(&self) -> Bytes {
        encode_command_with(
            self.checksum,
            self.message_id,
            self.command_code,
            &self.payload,
            self.sequence,
        )
    }
}
