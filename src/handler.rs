use std::net::{SocketAddr, UdpSocket};
use tracing::debug;
use crate::error::DnsError;
use crate::message::MAX_MESSAGE_SIZE;

pub trait Handler {
    /// Sends one request upstream and blocks until a reply arrives.
    fn exchange(&self, buf: &[u8]) -> Result<Vec<u8>, DnsError>;
}

/// Talks to a single upstream resolver over one long-lived socket.
pub struct UdpHandler {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpHandler {
    pub fn try_new(target: SocketAddr) -> Result<Self, DnsError> {
        let bind: SocketAddr = match target {
            SocketAddr::V4(_) => ([0, 0, 0, 0], 0).into(),
            SocketAddr::V6(_) => ([0u16; 8], 0).into(),
        };

        let socket = UdpSocket::bind(bind)?;
        socket.connect(target)?;

        Ok(Self { socket, target })
    }
}

impl Handler for UdpHandler {
    fn exchange(&self, buf: &[u8]) -> Result<Vec<u8>, DnsError> {
        self.socket.send(buf)?;

        let mut res = [0u8; MAX_MESSAGE_SIZE];
        let n = self.socket.recv(&mut res)?;
        debug!("{} bytes from {}", n, self.target);

        Ok(res[..n].to_vec())
    }
}
