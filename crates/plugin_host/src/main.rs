mod sim;

use std::io;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = sim::cli::Cli::parse();
    sim::logging::initialize(cli.log);
    sim::app::run(&cli, io::stdout(), io::stdout())?;
    Ok(())
}
