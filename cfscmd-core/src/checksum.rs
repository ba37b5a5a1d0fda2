//! Secondary-header checksum algorithms
//!
//! Each algorithm is a byte fold with an identity of zero. The checksum
//! byte is chosen so that folding the finished packet, checksum included,
//! returns zero.

use serde::{Deserialize, Serialize};

/// Checksum convention expected by the ingest endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumAlgorithm {
    /// XOR of every byte (the classic cFS command checksum)
    #[default]
    XorFold,
    /// Wrapping 8-bit sum; the checksum is the two's complement of the sum
    AdditiveFold,
}

impl ChecksumAlgorithm {
    /// Fold every byte of `data`
    pub fn fold(&self, data: &[u8]) -> u8 {
        match self {
            ChecksumAlgorithm::XorFold => data.iter().fold(0u8, |acc, b| acc ^ b),
            ChecksumAlgorithm::AdditiveFold => data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b)),
        }
    }

    /// Compute the checksum byte for a packet whose checksum field is zero
    pub fn seal(&self, provisional: &[u8]) -> u8 {
        let folded = self.fold(provisional);
        match self {
            ChecksumAlgorithm::XorFold => folded,
            ChecksumAlgorithm::AdditiveFold => folded.wrapping_neg(),
        }
    }

    /// Check that a finished packet folds to zero
    pub fn verify(&self, packet: &[u8]) -> bool {
        self.fold(packet) == 0
    }

    /// Short lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::XorFold => "xor",
            ChecksumAlgorithm::AdditiveFold => "additive",
        }
    }
}
