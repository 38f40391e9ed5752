use std::net::UdpSocket;
use anyhow::Result;
use tracing::{debug, error, info};
use dnsrelay::handler::UdpHandler;
use dnsrelay::message::MAX_MESSAGE_SIZE;
use dnsrelay::resolver::{ForwardResolver, Resolver, StaticResolver};
use crate::context::{Context, ServerMode};

pub trait DnsServer {
    fn start(&self) -> Result<()>;
}

pub struct UdpDnsServer {
    pub ctx: Context,
}

impl UdpDnsServer {
    pub fn new(ctx: Context) -> UdpDnsServer {
        Self { ctx }
    }
}

impl DnsServer for UdpDnsServer {
    fn start(&self) -> Result<()> {
        let max_jumps = self.ctx.server.max_pointer_jumps;

        let mut resolver: Box<dyn Resolver> = match &self.ctx.server.mode {
            ServerMode::Static { address, ttl } => {
                Box::new(StaticResolver::new(address.clone(), *ttl, max_jumps))
            }
            ServerMode::Forward { resolver } => {
                Box::new(ForwardResolver::new(UdpHandler::try_new(*resolver)?, max_jumps))
            }
        };

        info!("Running in {} mode", self.ctx.server.mode);

        let socket = UdpSocket::bind(self.ctx.listener.to_addr())?;
        info!("Listening on {}", self.ctx.listener);

        serve(&socket, resolver.as_mut())
    }
}

/// Answers datagrams one at a time. A datagram that cannot be resolved gets
/// no reply at all.
pub fn serve(socket: &UdpSocket, resolver: &mut dyn Resolver) -> Result<()> {
    let mut buf = [0u8; MAX_MESSAGE_SIZE];

    loop {
        let (size, source) = match socket.recv_from(&mut buf) {
            Ok(received) => received,
            Err(e) => {
                error!("Error receiving data: {}", e);

                continue;
            }
        };
        debug!("Received {} bytes from {}", size, source);

        let res = match resolver.resolve(&buf[..size]) {
            Ok(res) => res,
            Err(e) => {
                error!("Dropping request from {}: {}", source, e);

                continue;
            }
        };

        if let Err(e) = socket.send_to(&res, source) {
            error!("Failed to send response to {}: {}", source, e);
        }
    }
}
