//! Integration tests for the complete encode → send → receive → verify flow

use cfscmd_core::{
    catalog::{find, SAMPLE_APP_CMD_MID, SAMPLE_APP_SET_ATTITUDE_CC},
    decoder::decode_command,
    encode_and_send,
    encoder::{encode_command, CommandBuilder},
    payload::attitude_payload,
    CommandSink, Destination, TransportError, UdpTransport,
};
use std::net::UdpSocket;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn receiver() -> (UdpSocket, Destination) {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let port = socket.local_addr().unwrap().port();
    (socket, Destination::new("127.0.0.1", port))
}

#[test]
fn test_full_workflow_loopback() {
    let (socket, destination) = receiver();

    let payload = attitude_payload(10.0, -5.25, 0.0).unwrap();
    encode_and_send(
        SAMPLE_APP_CMD_MID,
        SAMPLE_APP_SET_ATTITUDE_CC,
        &payload,
        17,
        &destination,
    )
    .unwrap();

    let mut buf = [0u8; 256];
    let (n, _) = socket.recv_from(&mut buf).unwrap();

    let packet = decode_command(&buf[..n]).unwrap();
    assert_eq!(packet.message_id().value(), 0x082);
    assert_eq!(packet.command_code, SAMPLE_APP_SET_ATTITUDE_CC);
    assert_eq!(packet.sequence().value(), 17);
    assert_eq!(packet.payload, payload);
}

#[test]
fn test_every_catalog_command_is_one_datagram() {
    let (socket, destination) = receiver();
    let transport = UdpTransport::new(destination);

    let names = ["es-noop", "noop", "reset-counters", "process"];
    for (seq, name) in names.iter().enumerate() {
        let cmd = find(name).unwrap();
        let packet = CommandBuilder::new(cmd.message_id)
            .code(cmd.command_code)
            .sequence(seq as u16)
            .build();
        transport.send(&packet).unwrap();
    }

    let mut buf = [0u8; 64];
    for (seq, name) in names.iter().enumerate() {
        let cmd = find(name).unwrap();
        let (n, _) = socket.recv_from(&mut buf).unwrap();
        assert_eq!(n, 8);
        assert_eq!(
            &buf[..n],
            &encode_command(cmd.message_id, cmd.command_code, b"", seq as u16)[..]
        );
    }
}

#[test]
fn test_concurrent_encoding_and_sending() {
    let (socket, destination) = receiver();
    let transport = Arc::new(UdpTransport::new(destination));

    let handles: Vec<_> = (0..4u16)
        .map(|i| {
            let transport = Arc::clone(&transport);
            thread::spawn(move || {
                let packet = encode_command(0x1882, 2, &[i as u8; 4], i);
                transport.send(&packet)
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    // Arrival order is not guaranteed
    let mut sequences = Vec::new();
    let mut buf = [0u8; 64];
    for _ in 0..4 {
        let (n, _) = socket.recv_from(&mut buf).unwrap();
        let packet = decode_command(&buf[..n]).unwrap();
        assert_eq!(packet.payload[0] as u16, packet.sequence().value());
        sequences.push(packet.sequence().value());
    }
    sequences.sort_unstable();
    assert_eq!(sequences, vec![0, 1, 2, 3]);
}

#[test]
fn test_invalid_destination_reports_failure() {
    let result = encode_and_send(0x1806, 0, b"", 1, &Destination::new("127.0.0.1", 0));
    assert!(matches!(result, Err(TransportError::Send { .. })));

    let result = encode_and_send(0x1806, 0, b"", 1, &Destination::new("", 1234));
    assert!(matches!(result, Err(TransportError::NoAddress { .. })));
}
