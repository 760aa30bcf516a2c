//! Mnemonic generation command.

use addrkit_btc::generate_mnemonic;
use clap::Args;
use colored::Colorize;

/// Generate a new BIP39 mnemonic.
#[derive(Args)]
pub struct MnemonicCommand {
    /// Entropy size in bits (128 for 12 words, 256 for 24 words).
    #[arg(short, long, default_value_t = 128)]
    bits: u32,
}

impl MnemonicCommand {
    /// Execute the mnemonic command.
    pub fn execute(self) -> anyhow::Result<()> {
        let mnemonic = generate_mnemonic(self.bits)?;
        let words = mnemonic.split_whitespace().count();

        println!();
        println!("      {}        {words} words", "Words".cyan().bold());
        println!("      {}     {}", "Mnemonic".cyan().bold(), mnemonic.as_str().green());
        println!();

        Ok(())
    }
}
