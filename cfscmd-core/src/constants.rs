//! Constants and limits for the cFS command packet format

/// Size of the CCSDS primary header in bytes
pub const PRIMARY_HEADER_SIZE: usize = 6;

/// Size of the cFS command secondary header (command code + checksum)
pub const SECONDARY_HEADER_SIZE: usize = 2;

/// Smallest possible command packet (headers only, empty payload)
pub const MIN_PACKET_SIZE: usize = PRIMARY_HEADER_SIZE + SECONDARY_HEADER_SIZE;

/// Offset of the command code inside a packet
pub const COMMAND_CODE_OFFSET: usize = PRIMARY_HEADER_SIZE;

/// Offset of the checksum byte inside a packet
pub const CHECKSUM_OFFSET: usize = PRIMARY_HEADER_SIZE + 1;

/// Mask for the 11-bit message id (APID)
pub const MESSAGE_ID_MASK: u16 = 0x07FF;

/// Mask for the 14-bit sequence count
pub const SEQUENCE_MASK: u16 = 0x3FFF;

/// Largest payload whose length still fits the 16-bit length field
pub const MAX_PAYLOAD_SIZE: usize = u16::MAX as usize + 1 - SECONDARY_HEADER_SIZE;

/// CCSDS version number (bits 15-13 of the packet id)
pub const CCSDS_VERSION: u16 = 0;

/// Packet type bit: 1 = telecommand
pub const PACKET_TYPE_COMMAND: u16 = 1;

/// Secondary header flag: 1 = present
pub const SECONDARY_HEADER_PRESENT: u16 = 1;

/// Sequence flags value for a standalone (unsegmented) packet
pub const SEQ_FLAGS_UNSEGMENTED: u16 = 0b11;

/// Packet id bits that are fixed for every command this crate emits
pub const COMMAND_PACKET_ID_FLAGS: u16 =
    (CCSDS_VERSION << 13) | (PACKET_TYPE_COMMAND << 12) | (SECONDARY_HEADER_PRESENT << 11);

/// Default UDP port the CI_LAB application listens on
pub const DEFAULT_CI_LAB_PORT: u16 = 1234;
