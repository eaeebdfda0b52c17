//! Command-line configuration.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve the built challenge feed frontend.
#[derive(Parser, Debug, Clone)]
#[command(name = "challenge-server", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "CHALLENGE_ADDR", default_value = "0.0.0.0:5970")]
    pub addr: SocketAddr,

    /// Directory holding the Trunk build output
    #[arg(long, env = "CHALLENGE_DIST", default_value = "crates/frontend/dist")]
    pub dist: PathBuf,
}

impl Config {
    /// Path of the single-page-app entry document.
    pub fn index_html(&self) -> PathBuf {
        self.dist.join("index.html")
    }
}
