//! CLI module for the Stocknear gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// Stocknear Gateway - stock lists, screener and auth for the site
#[derive(Parser)]
#[command(name = "stocknear-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the gateway server
    Serve,
}
