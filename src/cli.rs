//! Command-line interface configuration.

use argh::FromArgs;
use std::{net::SocketAddr, path::PathBuf};

/// Local web server for the Bitcoin mining simulator
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// document root (default: the directory containing the executable)
    #[argh(option, long = "root")]
    pub root: Option<PathBuf>,

    /// server bind address (default: '0.0.0.0:5000')
    #[argh(option, default = "\"0.0.0.0:5000\".parse().unwrap()")]
    pub bind: SocketAddr,
}
