//! CLI subcommand definitions and handlers.
//!
//! - `ferret scan <target>` - Probe a host against the well-known port catalog
//! - `ferret sweep <subnet>` - Discover responsive hosts on an IPv4 subnet
//!
//! The commands are thin renderers: each one starts a session through the
//! controller and prints the event stream as it arrives.

mod scan;
mod sweep;

pub use scan::ScanCommand;
pub use sweep::SweepCommand;

use clap::{Parser, Subcommand};

/// Ferret - a TCP reachability prober and subnet mapper.
#[derive(Parser, Debug)]
#[command(name = "ferret")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Probe hosts and sweep subnets over TCP", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a host against the well-known port catalog
    #[command(alias = "s")]
    Scan(ScanCommand),

    /// Sweep a subnet for responsive hosts
    #[command(alias = "w")]
    Sweep(SweepCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// One JSON document per event
    Json,
}
