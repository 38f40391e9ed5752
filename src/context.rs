use std::fmt::{Display, Formatter};
use std::net::{SocketAddr, ToSocketAddrs};
use std::str::FromStr;
use anyhow::{anyhow, bail, Result};
use tracing::Level;
use dnsrelay::parser::{DEFAULT_MAX_JUMPS, MAX_JUMPS_LIMIT};
use dnsrelay::record::parse_address;
use crate::config::Config;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 2053;
pub const DEFAULT_ANSWER: &str = "8.8.8.8";
pub const DEFAULT_TTL: u32 = 60;

pub struct Context {
    pub(crate) listener: ListenerContext,
    pub(crate) server: ServerContext,
    pub(crate) log_level: Level,
}

impl Context {
    pub fn from_config(config: Config) -> Result<Self> {
        let listener = ListenerContext {
            host: config.listener.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: config.listener.port.unwrap_or(DEFAULT_PORT),
        };

        let mode = match config.server.resolver {
            Some(addr) => ServerMode::Forward {
                resolver: to_socket_addr(&addr)?,
            },
            None => {
                let address = config.server.answer.unwrap_or_else(|| DEFAULT_ANSWER.to_string());
                parse_address(&address, 4)?;

                ServerMode::Static {
                    address,
                    ttl: config.server.ttl.unwrap_or(DEFAULT_TTL),
                }
            }
        };

        let log_level = match config.log.level {
            Some(level) => {
                Level::from_str(&level).map_err(|_| anyhow!("{} is not a valid log level", level))?
            }
            None => Level::INFO,
        };

        let max_pointer_jumps = config.server.max_pointer_jumps.unwrap_or(DEFAULT_MAX_JUMPS);
        if max_pointer_jumps > MAX_JUMPS_LIMIT {
            bail!(
                "max_pointer_jumps is {}, the limit is {}",
                max_pointer_jumps,
                MAX_JUMPS_LIMIT
            );
        }

        Ok(Self {
            listener,
            server: ServerContext {
                mode,
                max_pointer_jumps,
            },
            log_level,
        })
    }
}

pub struct ServerContext {
    pub mode: ServerMode,
    pub max_pointer_jumps: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ServerMode {
    Static { address: String, ttl: u32 },
    Forward { resolver: SocketAddr },
}

impl Display for ServerMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerMode::Static { address, ttl } => {
                write!(f, "Static (answering {} with ttl {})", address, ttl)
            }
            ServerMode::Forward { resolver } => write!(f, "Forward (forwarding to {})", resolver),
        }
    }
}

pub struct ListenerContext {
    pub host: String,
    pub port: u16,
}

impl ListenerContext {
    pub fn to_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

impl Display for ListenerContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "udp://{}:{}", self.host, self.port)
    }
}

/// Resolves `host:port`; the port is mandatory.
fn to_socket_addr(addr: &str) -> Result<SocketAddr> {
    let mut addrs = match addr.to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(e) => bail!("{} is not a valid resolver address: {}", addr, e),
    };

    match addrs.next() {
        Some(addr) => Ok(addr),
        None => bail!("{} did not resolve to any address", addr),
    }
}
