use cfscmd_cli::commands::{build, send::CommandRequest, verify};
use cfscmd_core::{encoder::encode_command, ChecksumAlgorithm, PacketError};
use std::fs;
use tempfile::tempdir;

/// Helper: a display-param style request with a 38-byte payload
fn display_request() -> CommandRequest {
    let payload = cfscmd_core::payload::display_param_payload(5, -5, "status");
    CommandRequest::new(0x1882, 3, 9).with_payload(payload.to_vec())
}

#[test]
fn build_then_verify_raw_file() {
    let td = tempdir().unwrap();
    let path = td.path().join("packet.bin");
    let path = path.to_str().unwrap();

    let built = build::execute(&display_request(), path).unwrap();
    assert_eq!(built.len(), 46);
    assert_eq!(fs::read(path).unwrap(), built.to_vec());

    let packet = verify::execute(path, false, ChecksumAlgorithm::XorFold, false).unwrap();
    assert_eq!(packet.command_code, 3);
    assert_eq!(packet.sequence().value(), 9);
    assert_eq!(packet.payload.len(), 38);
}

#[test]
fn verify_hex_file_with_json_report() {
    let td = tempdir().unwrap();
    let path = td.path().join("packet.hex");
    fs::write(&path, "1806 c001 0001 00de\n").unwrap();

    let packet =
        verify::execute(path.to_str().unwrap(), true, ChecksumAlgorithm::XorFold, true).unwrap();
    assert_eq!(packet.header.packet_id, 0x1806);
    assert!(packet.payload.is_empty());
}

#[test]
fn verify_rejects_corrupted_checksum() {
    let td = tempdir().unwrap();
    let path = td.path().join("bad.bin");

    let mut data = encode_command(0x1806, 0, b"", 1).to_vec();
    data[7] ^= 0xFF;
    fs::write(&path, &data).unwrap();

    let err = verify::execute(path.to_str().unwrap(), false, ChecksumAlgorithm::XorFold, false)
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<PacketError>(),
        Some(&PacketError::ChecksumMismatch { residue: 0xFF })
    );
}

#[test]
fn verify_with_wrong_algorithm_fails() {
    let td = tempdir().unwrap();
    let path = td.path().join("xor.bin");
    fs::write(&path, encode_command(0x1882, 1, b"abc", 2)).unwrap();

    assert!(verify::execute(
        path.to_str().unwrap(),
        false,
        ChecksumAlgorithm::AdditiveFold,
        false
    )
    .is_err());
}

#[test]
fn verify_missing_file() {
    let td = tempdir().unwrap();
    let path = td.path().join("missing.bin");

    let result = verify::read_packet(path.to_str().unwrap(), false);
    assert!(result.is_err());
}

#[test]
fn build_additive_checksum() {
    let td = tempdir().unwrap();
    let path = td.path().join("additive.bin");
    let path = path.to_str().unwrap();

    let mut request = CommandRequest::new(0x1806, 0, 1);
    request.checksum = ChecksumAlgorithm::AdditiveFold;
    build::execute(&request, path).unwrap();

    assert_eq!(fs::read(path).unwrap(), vec![0x18, 0x06, 0xC0, 0x01, 0x00, 0x01, 0x00, 0x20]);
    assert!(verify::execute(path, false, ChecksumAlgorithm::AdditiveFold, false).is_ok());
}
