//! Core types for cFS command packets

use crate::constants::{
    COMMAND_PACKET_ID_FLAGS, MESSAGE_ID_MASK, MIN_PACKET_SIZE, PRIMARY_HEADER_SIZE, SEQUENCE_MASK,
};
use crate::error::PacketError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// 11-bit message id carried in the low bits of the packet id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(u16);

impl MessageId {
    /// Largest representable message id
    pub const MAX: u16 = MESSAGE_ID_MASK;

    /// Create a message id, rejecting values wider than 11 bits
    pub fn new(raw: u16) -> Result<Self, PacketError> {
        if raw > Self::MAX {
            return Err(PacketError::OutOfRange {
                field: "message id",
                value: raw as i64,
                min: 0,
                max: Self::MAX as i64,
            });
        }
        Ok(Self(raw))
    }

    /// Create a message id by discarding bits above bit 10
    ///
    /// This is what the encoder does with raw `u16` identifiers, so a full
    /// cFS MID such as `0x1882` maps to `0x082`.
    pub const fn from_bits_truncate(raw: u16) -> Self {
        Self(raw & MESSAGE_ID_MASK)
    }

    /// Get the 11-bit value
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// The packet id field this message id produces on the wire
    pub const fn packet_id(&self) -> u16 {
        COMMAND_PACKET_ID_FLAGS | self.0
    }
}

impl From<MessageId> for u16 {
    fn from(id: MessageId) -> Self {
        id.0
    }
}

/// 14-bit sequence count carried in the sequence control field
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SequenceCount(u16);

impl SequenceCount {
    /// Largest representable sequence count
    pub const MAX: u16 = SEQUENCE_MASK;

    /// Create a sequence count, rejecting values wider than 14 bits
    pub fn new(raw: u16) -> Result<Self, PacketError> {
        if raw > Self::MAX {
            return Err(PacketError::OutOfRange {
                field: "sequence count",
                value: raw as i64,
                min: 0,
                max: Self::MAX as i64,
            });
        }
        Ok(Self(raw))
    }

    /// Create a sequence count by discarding the top two bits
    pub const fn from_bits_truncate(raw: u16) -> Self {
        Self(raw & SEQUENCE_MASK)
    }

    /// Get the 14-bit value
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// The following count, wrapping from 16383 back to 0
    pub const fn next(&self) -> Self {
        Self((self.0 + 1) & SEQUENCE_MASK)
    }
}

impl From<SequenceCount> for u16 {
    fn from(seq: SequenceCount) -> Self {
        seq.0
    }
}

/// Decoded CCSDS primary header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryHeader {
    /// Full 16-bit packet id (flags + message id)
    pub packet_id: u16,

    /// Full 16-bit sequence control (sequence flags + count)
    pub sequence_control: u16,

    /// Number of bytes following the primary header, minus one
    pub length_field: u16,
}

impl PrimaryHeader {
    /// CCSDS version number (3 bits)
    pub const fn version(&self) -> u16 {
        self.packet_id >> 13
    }

    /// Packet type bit (1 = command)
    pub const fn packet_type(&self) -> u16 {
        (self.packet_id >> 12) & 0x1
    }

    /// Secondary header flag
    pub const fn has_secondary_header(&self) -> bool {
        (self.packet_id >> 11) & 0x1 == 1
    }

    /// Message id from the low 11 bits
    pub const fn message_id(&self) -> MessageId {
        MessageId::from_bits_truncate(self.packet_id)
    }

    /// Sequence flags (top two bits of sequence control)
    pub const fn sequence_flags(&self) -> u16 {
        self.sequence_control >> 14
    }

    /// Sequence count from the low 14 bits
    pub const fn sequence(&self) -> SequenceCount {
        SequenceCount::from_bits_truncate(self.sequence_control)
    }

    /// Total packet size implied by the length field
    pub const fn packet_len(&self) -> usize {
        self.length_field as usize + 1 + PRIMARY_HEADER_SIZE
    }
}

/// A parsed cFS command packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPacket {
    /// Primary header
    pub header: PrimaryHeader,

    /// Command (function) code from the secondary header
    pub command_code: u8,

    /// Checksum byte from the secondary header
    pub checksum: u8,

    /// Command payload
    pub payload: Bytes,
}

impl CommandPacket {
    /// Total encoded size in bytes
    pub fn total_size(&self) -> usize {
        MIN_PACKET_SIZE + self.payload.len()
    }

    /// Message id
    pub fn message_id(&self) -> MessageId {
        self.header.message_id()
    }

    /// Sequence count
    pub fn sequence(&self) -> SequenceCount {
        self.header.sequence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_strict_and_truncating() {
        assert_eq!(MessageId::new(0x7FF).unwrap().value(), 0x7FF);
        assert_eq!(
            MessageId::new(0x1882),
            Err(PacketError::OutOfRange {
                field: "message id",
                value: 0x1882,
                min: 0,
                max: 0x7FF,
            })
        );
        assert_eq!(MessageId::from_bits_truncate(0x1882).value(), 0x082);
        assert_eq!(MessageId::from_bits_truncate(0x1882).packet_id(), 0x1882);
    }

    #[test]
    fn test_sequence_wraps() {
        let last = SequenceCount::new(SequenceCount::MAX).unwrap();
        assert_eq!(last.next().value(), 0);
        assert!(SequenceCount::new(0x4000).is_err());
        assert_eq!(SequenceCount::from_bits_truncate(0xC001).value(), 1);
    }

    #[test]
    fn test_primary_header_fields() {
        let header = PrimaryHeader {
            packet_id: 0x1806,
            sequence_control: 0xC001,
            length_field: 1,
        };
        assert_eq!(header.message_id().value(), 0x006);
        assert_eq!(header.sequence().value(), 1);
        assert_eq!(header.sequence_control, 0xC001);
        assert_eq!(header.length_field, 1);
        assert_eq!(header.version(), 0);
        assert_eq!(header.packet_type(), 1);
        assert!(header.has_secondary_header());
        assert_eq!(header.sequence_flags(), 0b11);
        assert_eq!(header.packet_len(), 8);
    }
}
