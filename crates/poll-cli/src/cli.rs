use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "poll")]
#[command(about = "Command-line client for the poll service")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:3000")]
    pub server: String,
}
