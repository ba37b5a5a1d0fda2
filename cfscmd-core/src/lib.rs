//! # cfscmd Core
//!
//! Builds cFS command packets (CCSDS primary header + command secondary
//! header + payload) and hands them to the `CI_LAB` UDP ingest.
//!
//! ## Modules
//!
//! - `constants`: Header layout constants and field limits
//! - `types`: Bounded header fields and the decoded packet view
//! - `header`: Primary header encoding and decoding
//! - `checksum`: Pluggable secondary-header checksum algorithms
//! - `encoder`: Command packet encoding
//! - `decoder`: Command packet parsing and checksum verification
//! - `payload`: Payload layout helpers (fixed-width text, sample app structs)
//! - `catalog`: Well-known message ids and command codes
//! - `transport`: Fire-and-forget UDP delivery (requires `std`)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod catalog;
pub mod checksum;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod header;
pub mod payload;
#[cfg(feature = "std")]
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use checksum::ChecksumAlgorithm;
pub use encoder::{encode_command, encode_command_with, CommandBuilder};
pub use error::PacketError;
#[cfg(feature = "std")]
pub use transport::{encode_and_send, CommandSink, Destination, TransportError, UdpTransport};
pub use types::{CommandPacket, MessageId, PrimaryHeader, SequenceCount};

/// Result type alias for packet operations
pub type Result<T> = core::result::Result<T, PacketError>;
