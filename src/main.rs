//! CLI entry point for maze generation, solving and animation

use clap::Parser;
use labyrinth::io::cli::{Cli, CommandRunner};

fn main() -> labyrinth::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let runner = CommandRunner::new(cli);
    runner.process().map(|_| ())
}
