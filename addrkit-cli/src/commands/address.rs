//! Address derivation commands.

use addrkit_btc::{address_from_mnemonic, address_from_private_key_hex, address_from_public_key_hex};
use anyhow::bail;
use clap::{ArgGroup, Args};
use colored::Colorize;

use super::GlobalOptions;

/// Derive an address from exactly one key source.
#[derive(Args)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["private_key", "public_key", "mnemonic"])
))]
pub struct AddressCommand {
    /// Hex-encoded private key.
    #[arg(short = 'k', long)]
    private_key: Option<String>,

    /// Hex-encoded public key (compressed or uncompressed).
    #[arg(long)]
    public_key: Option<String>,

    /// BIP39 mnemonic phrase.
    #[arg(short, long)]
    mnemonic: Option<String>,

    /// BIP39 password (if used when creating the mnemonic).
    #[arg(short, long, default_value = "", requires = "mnemonic")]
    password: String,

    /// Hardened child index m/index'.
    #[arg(short, long, default_value_t = 0, requires = "mnemonic")]
    index: u32,
}

impl AddressCommand {
    /// Execute the address command.
    pub fn execute(self, options: &GlobalOptions) -> anyhow::Result<()> {
        let network = options.network();
        let address_type = options.address_type();

        let (source, address) = match (self.private_key, self.public_key, self.mnemonic) {
            (Some(key), _, _) => (
                "private key".to_string(),
                address_from_private_key_hex(&key, address_type, network)?,
            ),
            (_, Some(key), _) => (
                "public key".to_string(),
                address_from_public_key_hex(&key, address_type, network)?,
            ),
            (_, _, Some(mnemonic)) => (
                format!("mnemonic m/{}'", self.index),
                address_from_mnemonic(network, address_type, &mnemonic, &self.password, self.index)?,
            ),
            (None, None, None) => bail!("one of --private-key, --public-key or --mnemonic is required"),
        };

        println!();
        println!("      {}      {}", "Network".cyan().bold(), network);
        println!("      {} {}", "Address Type".cyan().bold(), address_type.name());
        println!("      {}       {}", "Source".cyan().bold(), source);
        println!("      {}      {}", "Address".cyan().bold(), address.green());
        println!();

        Ok(())
    }
}
