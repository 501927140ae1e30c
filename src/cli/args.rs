//! Command line argument parsing

use clap::Parser;

use super::Commands;

/// Interactive helper that mirrors a local build directory to a remote host
#[derive(Parser)]
#[command(name = "shipdir")]
#[command(about = "Mirror a local build directory to a remote host over ssh/scp")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}
