//! CLI command definitions and handlers.

mod address;
mod key;
mod mnemonic;
mod script;

pub use address::AddressCommand;
use addrkit_btc::{AddressType, Network};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
pub use key::KeyCommand;
pub use mnemonic::MnemonicCommand;
pub use script::{DecodeScriptCommand, ScriptCommand};

/// addrkit - derive Bitcoin addresses, scripts and keys.
#[derive(Parser)]
#[command(name = "addrkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Clone, Copy)]
pub struct GlobalOptions {
    /// Use testnet instead of mainnet.
    #[arg(short, long, global = true)]
    testnet: bool,

    /// Address type to derive.
    #[arg(short, long, global = true, value_enum, default_value = "native-segwit")]
    address_type: CliAddressType,

    /// Show diagnostic logs on stderr (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

impl GlobalOptions {
    /// Selected network.
    pub const fn network(&self) -> Network {
        if self.testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Number of `-v` flags given.
    pub const fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Selected address type.
    pub fn address_type(&self) -> AddressType {
        AddressType::from(self.address_type)
    }
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Derive an address from a private key, public key or mnemonic.
    Address(AddressCommand),

    /// Build the output script paying to an address.
    Script(ScriptCommand),

    /// Extract the address an output script pays to.
    DecodeScript(DecodeScriptCommand),

    /// Private key, WIF and public key conversions.
    Key(KeyCommand),

    /// Generate a new BIP39 mnemonic.
    Mnemonic(MnemonicCommand),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CliAddressType {
    /// Legacy P2PKH (starts with 1)
    Legacy,
    /// `SegWit` P2SH-P2WPKH (starts with 3)
    Segwit,
    /// Native `SegWit` P2WPKH (starts with bc1q)
    NativeSegwit,
    /// Taproot P2TR (starts with bc1p)
    Taproot,
}

impl From<CliAddressType> for AddressType {
    fn from(val: CliAddressType) -> Self {
        match val {
            CliAddressType::Legacy => Self::Legacy,
            CliAddressType::Segwit => Self::Segwit,
            CliAddressType::NativeSegwit => Self::NativeSegwit,
            CliAddressType::Taproot => Self::Taproot,
        }
    }
}
