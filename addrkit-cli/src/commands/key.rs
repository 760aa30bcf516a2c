//! Private key, WIF and public key commands.

use addrkit_btc::{
    Network, SecretKey, address_from_private_key, decode_wif, private_key_from_hex,
    private_key_to_compressed_wif, private_key_to_hex, private_key_to_wif,
    public_key_from_private_key,
};
use clap::{Args, Subcommand};
use colored::Colorize;

use super::GlobalOptions;

/// Key conversions.
#[derive(Args)]
pub struct KeyCommand {
    #[command(subcommand)]
    command: KeySubcommand,
}

#[derive(Subcommand)]
enum KeySubcommand {
    /// Generate a new random private key.
    Generate,

    /// Convert a hex private key to WIF.
    ToWif {
        /// Hex-encoded private key.
        #[arg(short = 'k', long)]
        private_key: String,

        /// Mark the WIF as belonging to a compressed public key.
        #[arg(short, long)]
        compressed: bool,
    },

    /// Decode a WIF private key.
    FromWif {
        /// WIF-encoded private key.
        #[arg(short, long)]
        wif: String,
    },

    /// Show the public key and address of a hex private key.
    Inspect {
        /// Hex-encoded private key.
        #[arg(short = 'k', long)]
        private_key: String,
    },
}

impl KeyCommand {
    /// Execute the key command.
    pub fn execute(self, options: &GlobalOptions) -> anyhow::Result<()> {
        let network = options.network();

        match self.command {
            KeySubcommand::Generate => {
                let private_key = addrkit_btc::generate_private_key();
                print_key(&private_key, network, options, true);
            }
            KeySubcommand::ToWif { private_key, compressed } => {
                let private_key = private_key_from_hex(&private_key)?;
                let wif = if compressed {
                    private_key_to_compressed_wif(&private_key, network)
                } else {
                    private_key_to_wif(&private_key, network)
                };
                println!();
                println!("      {}          {}", "WIF".cyan().bold(), wif.as_str().green());
                println!();
            }
            KeySubcommand::FromWif { wif } => {
                let decoded = decode_wif(&wif)?;
                let network = Network::from(decoded.network);
                println!();
                println!("      {}      {}", "Network".cyan().bold(), network);
                println!("      {}   {}", "Compressed".cyan().bold(), decoded.compressed);
                print_key(&decoded.inner, network, options, false);
            }
            KeySubcommand::Inspect { private_key } => {
                let private_key = private_key_from_hex(&private_key)?;
                print_key(&private_key, network, options, false);
            }
        }

        Ok(())
    }
}

#[rustfmt::skip]
fn print_key(private_key: &SecretKey, network: Network, options: &GlobalOptions, show_wif: bool) {
    let address_type = options.address_type();
    let public_key = public_key_from_private_key(private_key);
    let address = address_from_private_key(private_key, address_type, network);

    println!();
    println!("      {}  {}", "Private Key".cyan().bold(), private_key_to_hex(private_key).as_str());
    if show_wif {
        println!("      {}          {}", "WIF".cyan().bold(), private_key_to_compressed_wif(private_key, network).as_str());
    }
    println!("      {}   {}", "Public Key".cyan().bold(), public_key);
    println!("      {} {}", "Address Type".cyan().bold(), address_type.name());
    println!("      {}      {}", "Address".cyan().bold(), address.green());
    println!();
}
