//! Atelier CLI
//!
//! Preview the website's news and software collections from the terminal.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use atelier_cli::{CliArgs, app};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    app::init_logging(args.verbose);

    let output = atelier_cli::run(args).await?;
    print!("{output}");
    Ok(())
}
