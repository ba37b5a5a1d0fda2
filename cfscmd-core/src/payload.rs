//! Payload layout helpers
//!
//! The encoder treats payloads as opaque bytes. These helpers shape the
//! payloads of the commands this crate knows about. Multi-byte integers
//! are written big-endian.

use crate::catalog::SAMPLE_APP_STRING_VAL_LEN;
use crate::error::PacketError;
use alloc::vec::Vec;
use bytes::{BufMut, Bytes, BytesMut};

/// Encode `text` into a fixed-width, zero-padded field
///
/// Characters outside ASCII are dropped, the result is truncated to
/// `width` bytes and then right-padded with zeros. Never fails.
pub fn fixed_text(text: &str, width: usize) -> Vec<u8> {
    let mut field: Vec<u8> = text.bytes().filter(u8::is_ascii).take(width).collect();
    field.resize(width, 0);
    field
}

/// Incremental payload writer
#[derive(Debug, Default)]
pub struct PayloadWriter {
    buf: BytesMut,
}

impl PayloadWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a big-endian `u32`
    pub fn u32(mut self, value: u32) -> Self {
        self.buf.put_u32(value);
        self
    }

    /// Append a big-endian `i16`
    pub fn i16(mut self, value: i16) -> Self {
        self.buf.put_i16(value);
        self
    }

    /// Append a fixed-width text field (see [`fixed_text`])
    pub fn text(mut self, text: &str, width: usize) -> Self {
        self.buf.put_slice(&fixed_text(text, width));
        self
    }

    /// Append raw bytes
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.put_slice(bytes);
        self
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish and return the payload
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Payload of the sample app DISPLAY_PARAM command
///
/// Packed `uint32 ValU32; int16 ValI16; char ValStr[32]`, 38 bytes.
pub fn display_param_payload(val_u32: u32, val_i16: i16, val_str: &str) -> Bytes {
    PayloadWriter::new()
        .u32(val_u32)
        .i16(val_i16)
        .text(val_str, SAMPLE_APP_STRING_VAL_LEN)
        .finish()
}

/// Beyond this magnitude a scaled angle is out of range and no longer an
/// exact integer candidate
const MAX_SCALED_ANGLE: f64 = 1.0e15;

/// Round to the nearest integer, ties to even
///
/// `value` must be finite and below `MAX_SCALED_ANGLE` in magnitude so the
/// `i64` truncation and the fractional part are exact.
fn round_half_even(value: f64) -> i64 {
    let truncated = value as i64;
    let frac = (value - truncated as f64).abs();
    let step = if value < 0.0 { -1 } else { 1 };

    if frac > 0.5 || (frac == 0.5 && truncated % 2 != 0) {
        truncated + step
    } else {
        truncated
    }
}

/// Convert degrees to `i16` centi-degrees
fn centidegrees(field: &'static str, deg: f64) -> Result<i16, PacketError> {
    let scaled = deg * 100.0;
    if !scaled.is_finite() {
        return Err(PacketError::NotFinite(field));
    }

    let out_of_range = |value: i64| PacketError::OutOfRange {
        field,
        value,
        min: i16::MIN as i64,
        max: i16::MAX as i64,
    };

    if scaled.abs() >= MAX_SCALED_ANGLE {
        return Err(out_of_range(scaled as i64));
    }

    let rounded = round_half_even(scaled);
    i16::try_from(rounded).map_err(|_| out_of_range(rounded))
}

/// Payload of the attitude command: yaw, pitch, roll as `i16` centi-degrees
///
/// Fails if any angle is not finite or does not fit after scaling.
pub fn attitude_payload(yaw_deg: f64, pitch_deg: f64, roll_deg: f64) -> Result<Bytes, PacketError> {
    Ok(PayloadWriter::new()
        .i16(centidegrees("yaw", yaw_deg)?)
        .i16(centidegrees("pitch", pitch_deg)?)
        .i16(centidegrees("roll", roll_deg)?)
        .finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_text_pads() {
        assert_eq!(fixed_text("abc", 6), b"abc\0\0\0".to_vec());
        assert_eq!(fixed_text("", 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_fixed_text_truncates() {
        let long = "x".repeat(40);
        let field = fixed_text(&long, 32);
        assert_eq!(field.len(), 32);
        assert!(field.iter().all(|b| *b == b'x'));
    }

    #[test]
    fn test_fixed_text_drops_non_ascii() {
        assert_eq!(fixed_text("héllo", 8), b"hllo\0\0\0\0".to_vec());
    }

    #[test]
    fn test_display_param_layout() {
        let payload = display_param_payload(0xDEADBEEF, -2, "hi");
        assert_eq!(payload.len(), 38);
        assert_eq!(&payload[0..4], &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(&payload[4..6], &[0xFF, 0xFE]);
        assert_eq!(&payload[6..8], b"hi");
        assert!(payload[8..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_attitude_payload() {
        let payload = attitude_payload(12.34, -0.5, 327.67).unwrap();
        assert_eq!(&payload[..], &[0x04, 0xD2, 0xFF, 0xCE, 0x7F, 0xFF]);
    }

    #[test]
    fn test_attitude_ties_round_to_even() {
        // 12.5 -> 12, 0.5 -> 0, just below 0.5 -> 0
        let payload = attitude_payload(0.125, 0.005, 0.0049999999999999994).unwrap();
        assert_eq!(&payload[..], &[0, 12, 0, 0, 0, 0]);

        // 62.5 -> 62, -37.5 -> -38
        let payload = attitude_payload(0.625, -0.375, 0.0).unwrap();
        assert_eq!(&payload[..], &[0, 62, 0xFF, 0xDA, 0, 0]);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.49999999999999994), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(-2.5), -2);
        assert_eq!(round_half_even(-3.5), -4);
        assert_eq!(round_half_even(-1.6), -2);
    }

    #[test]
    fn test_attitude_out_of_range() {
        assert_eq!(
            attitude_payload(400.0, 0.0, 0.0),
            Err(PacketError::OutOfRange {
                field: "yaw",
                value: 40000,
                min: -32768,
                max: 32767,
            })
        );
        assert!(matches!(
            attitude_payload(0.0, -327.69, 0.0),
            Err(PacketError::OutOfRange { field: "pitch", value: -32769, .. })
        ));
        assert_eq!(
            attitude_payload(0.0, 0.0, f64::NAN),
            Err(PacketError::NotFinite("roll"))
        );
        assert!(matches!(
            attitude_payload(f64::MAX, 0.0, 0.0),
            Err(PacketError::NotFinite("yaw"))
        ));
    }

    #[test]
    fn test_payload_writer_raw() {
        let writer = PayloadWriter::new().raw(&[1, 2, 3]);
        assert_eq!(writer.len(), 3);
        assert!(!writer.is_empty());
        assert_eq!(&writer.finish()[..], &[1, 2, 3]);
    }
}
