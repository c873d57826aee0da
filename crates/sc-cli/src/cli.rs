use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sc",
    version,
    about = "Inspect and update the local session context"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
