use clap::Parser;

/// A minimal DNS relay. Forwards each question to an upstream resolver, or
/// answers locally with a fixed address when no resolver is given.
#[derive(Parser, Debug, Default)]
#[command(about)]
pub(crate) struct Args {
    /// Address to listen on
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Port to listen on
    #[arg(long, short)]
    pub(crate) port: Option<u16>,
    /// Upstream resolver as host:port, enables forwarding
    #[arg(long, short)]
    pub(crate) resolver: Option<String>,
    /// Path to a TOML config file
    #[arg(long, short)]
    pub(crate) config: Option<String>,
    /// trace, debug, info, warn or error
    #[arg(long, short)]
    pub(crate) log_level: Option<String>,
}
