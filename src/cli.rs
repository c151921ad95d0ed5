use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Status check API server
#[derive(Debug, Parser)]
#[command(name = "status-check-api", version, about = "Serve the status check API")]
pub struct Cli {
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED), help = "Address to bind")]
    pub host: IpAddr,

    #[arg(short, long, env = "PORT", default_value_t = 8001, help = "Port to listen on")]
    pub port: u16,
}

impl Cli {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
