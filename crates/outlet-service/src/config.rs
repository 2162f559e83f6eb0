//! Command-line and environment configuration.

use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Runtime settings for the outlet service.
///
/// Every flag can also be set through its `OUTLET_*` environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "outlet-service", version, about = "Menu catalog and order ledger for a food outlet")]
pub struct ServiceConfig {
    /// Address the HTTP API listens on.
    #[arg(long, env = "OUTLET_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Seconds between two order status sweeps.
    #[arg(
        long,
        env = "OUTLET_SWEEP_INTERVAL_SECS",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_secs: u64,

    /// Capacity of each actor's mailbox.
    #[arg(
        long,
        env = "OUTLET_MAILBOX_CAPACITY",
        default_value_t = 32,
        value_parser = parse_capacity
    )]
    pub mailbox_capacity: usize,
}

impl ServiceConfig {
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3000)),
            sweep_interval_secs: 60,
            mailbox_capacity: 32,
        }
    }
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("mailbox capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}
