//! Output script commands.

use addrkit_btc::{address_from_script, script_from_address};
use clap::Args;
use colored::Colorize;

use super::GlobalOptions;

/// Build the output script paying to an address.
#[derive(Args)]
pub struct ScriptCommand {
    /// Bitcoin address.
    #[arg(long)]
    address: String,
}

impl ScriptCommand {
    /// Execute the script command.
    pub fn execute(self, options: &GlobalOptions) -> anyhow::Result<()> {
        let script = script_from_address(&self.address, options.network())?;
        print_pair(&self.address, &script);
        Ok(())
    }
}

/// Extract the address an output script pays to.
#[derive(Args)]
pub struct DecodeScriptCommand {
    /// Hex-encoded output script.
    #[arg(short, long)]
    script: String,
}

impl DecodeScriptCommand {
    /// Execute the decode-script command.
    pub fn execute(self, options: &GlobalOptions) -> anyhow::Result<()> {
        let address = address_from_script(&self.script, options.network())?;
        print_pair(&address, &self.script);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_pair(address: &str, script: &str) {
    println!();
    println!("      {}  {}", "Address".cyan().bold(), address.green());
    println!("      {}   {}", "Script".cyan().bold(), script);
    println!();
}
