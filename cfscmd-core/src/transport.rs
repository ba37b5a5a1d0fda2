//! Fire-and-forget UDP delivery to a command ingest endpoint
//!
//! Each send resolves the destination, binds an ephemeral socket, issues a
//! single datagram and drops the socket. There is no retry and no
//! acknowledgement; only local failures are reported.

use crate::encoder::encode_command;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
#[cfg(feature = "logging")]
use tracing::debug;

/// Errors raised while handing a packet to the network
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Host name lookup failed
    #[error("Failed to resolve {destination}: {source}")]
    Resolve {
        /// Destination as given.
        destination: String,
        /// Underlying lookup error.
        source: io::Error,
    },

    /// Lookup succeeded but produced no usable address
    #[error("No address found for {destination}")]
    NoAddress {
        /// Destination as given.
        destination: String,
    },

    /// Could not open a local socket
    #[error("Failed to bind local socket: {0}")]
    Bind(#[source] io::Error),

    /// The OS refused the datagram
    #[error("Failed to send to {destination}: {source}")]
    Send {
        /// Resolved destination address.
        destination: SocketAddr,
        /// Underlying socket error.
        source: io::Error,
    },

    /// The OS accepted only part of the datagram
    #[error("Short write: sent {written} of {expected} bytes")]
    ShortWrite {
        /// Bytes the socket reported as sent.
        written: usize,
        /// Size of the packet.
        expected: usize,
    },
}

/// Host and port of the command ingest endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    /// Host name or IP literal
    pub host: String,
    /// UDP port
    pub port: u16,
}

impl Destination {
    /// Create a destination
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Resolve to the first socket address
    pub fn resolve(&self) -> Result<SocketAddr, TransportError> {
        if self.host.is_empty() {
            return Err(TransportError::NoAddress {
                destination: self.to_string(),
            });
        }

        let mut addrs = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|source| TransportError::Resolve {
                destination: self.to_string(),
                source,
            })?;

        addrs.next().ok_or_else(|| TransportError::NoAddress {
            destination: self.to_string(),
        })
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Anything that accepts finished command packets
pub trait CommandSink {
    /// Hand one packet to the sink
    fn send(&self, packet: &[u8]) -> Result<(), TransportError>;
}

impl<T: CommandSink + ?Sized> CommandSink for &T {
    fn send(&self, packet: &[u8]) -> Result<(), TransportError> {
        (**self).send(packet)
    }
}

/// UDP sender bound to one destination
///
/// Holds no socket between calls, so it is cheap to clone and share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdpTransport {
    destination: Destination,
}

impl UdpTransport {
    /// Create a transport for `destination`
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }

    /// Configured destination
    pub fn destination(&self) -> &Destination {
        &self.destination
    }
}

impl CommandSink for UdpTransport {
    fn send(&self, packet: &[u8]) -> Result<(), TransportError> {
        send_packet(packet, &self.destination)
    }
}

/// Send one datagram to `destination`
pub fn send_packet(packet: &[u8], destination: &Destination) -> Result<(), TransportError> {
    let addr = destination.resolve()?;

    let local: SocketAddr = if addr.is_ipv6() {
        (std::net::Ipv6Addr::UNSPECIFIED, 0).into()
    } else {
        (std::net::Ipv4Addr::UNSPECIFIED, 0).into()
    };
    let socket = UdpSocket::bind(local).map_err(TransportError::Bind)?;

    let written = socket
        .send_to(packet, addr)
        .map_err(|source| TransportError::Send {
            destination: addr,
            source,
        })?;

    if written != packet.len() {
        return Err(TransportError::ShortWrite {
            written,
            expected: packet.len(),
        });
    }

    #[cfg(feature = "logging")]
    debug!("Sent {} bytes to {}", written, addr);

    Ok(())
}

/// Encode a command and push it through `sink`
pub fn encode_and_send_via<S: CommandSink + ?Sized>(
    sink: &S,
    message_id: u16,
    command_code: u8,
    payload: &[u8],
    sequence: u16,
) -> Result<(), TransportError> {
    let packet = encode_command(message_id, command_code, payload, sequence);
    sink.send(&packet)
}

/// Encode a command and send it over UDP to `destination`
pub fn encode_and_send(
    message_id: u16,
    command_code: u8,
    payload: &[u8],
    sequence: u16,
    destination: &Destination,
) -> Result<(), TransportError> {
    encode_and_send_via(
        &UdpTransport::new(destination.clone()),
        message_id,
        command_code,
        payload,
        sequence,
    )
}
