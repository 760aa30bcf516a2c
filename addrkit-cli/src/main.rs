//! addrkit - derive Bitcoin addresses, scripts and keys from the command line.

mod commands;
mod logging;

use clap::Parser;
use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.options.verbosity());

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = cli.options;
    tracing::debug!(
        network = %options.network(),
        address_type = options.address_type().tag(),
        "running command"
    );
    match cli.command {
        Commands::Address(cmd) => cmd.execute(&options)?,
        Commands::Script(cmd) => cmd.execute(&options)?,
        Commands::DecodeScript(cmd) => cmd.execute(&options)?,
        Commands::Key(cmd) => cmd.execute(&options)?,
        Commands::Mnemonic(cmd) => cmd.execute()?,
    }
    Ok(())
}
