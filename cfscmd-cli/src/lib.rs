//! Library entry for cfscmd-cli used by integration tests and embedding.

pub mod commands;
pub mod config;

use cfscmd_core::ChecksumAlgorithm;

// Re-export commands for convenience
pub use commands::*;

/// Checksum convention selectable on the command line
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ChecksumArg {
    /// XOR of every byte (CI_LAB default)
    #[default]
    Xor,
    /// Two's complement of the byte sum
    Additive,
}

impl From<ChecksumArg> for ChecksumAlgorithm {
    fn from(arg: ChecksumArg) -> Self {
        match arg {
            ChecksumArg::Xor => ChecksumAlgorithm::XorFold,
            ChecksumArg::Additive => ChecksumAlgorithm::AdditiveFold,
        }
    }
}

/// Hex-encoded payload argument
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HexPayload(pub Vec<u8>);

impl std::str::FromStr for HexPayload {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(HexPayload)
    }
}

/// Parse a `u16` given in decimal or with a `0x` prefix
pub fn parse_u16(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid value '{}': {}", s, e))
}

/// Parse a `u8` given in decimal or with a `0x` prefix
pub fn parse_u8(s: &str) -> Result<u8, String> {
    let value = parse_u16(s)?;
    u8::try_from(value).map_err(|_| format!("value '{}' does not fit in one byte", s))
}

/// Parse a hex byte string, ignoring whitespace and an optional `0x` prefix
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    hex::decode(cleaned).map_err(|e| format!("invalid hex payload: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_u16("0x1882"), Ok(0x1882));
        assert_eq!(parse_u16("6150"), Ok(6150));
        assert!(parse_u16("0x10000").is_err());
        assert_eq!(parse_u8("0x03"), Ok(3));
        assert!(parse_u8("256").is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x00 01 ff"), Ok(vec![0x00, 0x01, 0xFF]));
        assert_eq!(parse_hex(""), Ok(vec![]));
        assert!(parse_hex("abc").is_err());
        assert_eq!("dead beef".parse::<HexPayload>(), Ok(HexPayload(vec![0xDE, 0xAD, 0xBE, 0xEF])));
    }
}
