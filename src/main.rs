mod args;
mod config;
mod context;
mod server;

use clap::Parser;
use tracing::error;
use tracing_subscriber::FmtSubscriber;
use crate::args::Args;
use crate::config::load_config;
use crate::context::Context;
use crate::server::{DnsServer, UdpDnsServer};

fn main() {
    let args = Args::parse();

    let ctx = match load_config(args.config.as_deref())
        .and_then(|cfg| Context::from_config(cfg.apply_args(&args)))
    {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);

            std::process::exit(1);
        }
    };

    let subscriber = FmtSubscriber::builder().with_max_level(ctx.log_level).finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to initialize logger");

    if let Err(err) = UdpDnsServer::new(ctx).start() {
        error!("Failed to start server: {}", err);

        std::process::exit(1);
    }
}
