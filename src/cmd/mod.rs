use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod init;

#[derive(Parser)]
#[command(about = "serves job listings and forwards applications by mail")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Start the HTTP server
    Listen,
    /// Create the upload directory and an empty job store
    Init,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Init) => {
            init::apply().await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
