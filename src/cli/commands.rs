//! CLI command definitions

use clap::Subcommand;

/// Available subcommands for the deployment helper
#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive deployment (the default when no subcommand is given)
    Deploy {
        /// Validate the configuration and print both command lines without
        /// touching the remote host
        #[arg(long)]
        dry_run: bool,
    },
    /// Check that the ssh and scp clients are available on PATH
    Deps,
    /// Show the saved settings and where they are stored
    Settings,
}
