//! mishnah-gen — regenerates the Mishnah structure reference dataset.
//!
//! Writes the nested seder → tractate → chapter document to
//! `mishnah_full.json` (or the configured path).

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
