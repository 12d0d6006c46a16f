//! CLI entry point for the dungeon wave function collapse generator

use clap::Parser;
use dungeon_wfc::io::cli::{Cli, Generator};
use dungeon_wfc::io::logging;

fn main() -> dungeon_wfc::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level())?;
    let mut generator = Generator::new(cli);
    generator.process()
}
