//! sdgen - generate clean and raw e-commerce sample datasets

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::Cli;
use commands::{clean, generate};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.global);

    match &cli.command {
        cli::Commands::Generate(args) => generate::execute(args, &cli.global),
        cli::Commands::Clean(args) => clean::execute(args, &cli.global),
    }
}
