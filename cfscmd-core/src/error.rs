//! Error types for command packet operations

/// Errors raised by strict field constructors and the packet decoder.
///
/// Encoding never produces these: out-of-range header values are masked.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    /// A field value does not fit in its wire width
    #[cfg_attr(feature = "std", error("{field} value {value} outside {min}..={max}"))]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The value that was supplied.
        value: i64,
        /// The smallest value the field can hold.
        min: i64,
        /// The largest value the field can hold.
        max: i64,
    },

    /// A floating-point input was NaN or infinite
    #[cfg_attr(feature = "std", error("{0} is not a finite number"))]
    NotFinite(&'static str),

    /// Incomplete packet - not enough data
    #[cfg_attr(feature = "std", error("Incomplete packet: expected {expected} bytes, got {actual}"))]
    IncompletePacket {
        /// The number of bytes expected.
        expected: usize,
        /// The number of bytes actually found.
        actual: usize,
    },

    /// Length field disagrees with the buffer size
    #[cfg_attr(
        feature = "std",
        error("Length mismatch: header declares {declared} bytes after the primary header, got {actual}")
    )]
    LengthMismatch {
        /// Bytes after the primary header according to the length field.
        declared: usize,
        /// Bytes actually present after the primary header.
        actual: usize,
    },

    /// Primary header does not describe a command with a secondary header
    #[cfg_attr(feature = "std", error("Not a command packet: packet id {0:#06x}"))]
    NotACommand(u16),

    /// Folding the packet did not give zero
    #[cfg_attr(feature = "std", error("Checksum mismatch: packet folds to {residue:#04x}, expected 0x00"))]
    ChecksumMismatch {
        /// Result of folding every byte of the packet.
        residue: u8,
    },
}
