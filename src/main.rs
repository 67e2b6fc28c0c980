//! Command-line front end for the ASIL decomposition analyst.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
