//! Bitcoin address, script and key-material derivation.
//!
//! A stateless conversion layer on top of the `bitcoin` and `bip39` crates:
//!
//! - [`keys`]: hex and WIF private keys, public key parsing and validation.
//! - [`address`]: Legacy, SegWit, Native SegWit and Taproot address derivation.
//! - [`script`]: output script to address and back.
//! - [`mnemonic`]: mnemonic generation and mnemonic-to-address derivation.
//!
//! # Features
//!
//! - `rand` (default): random private key and mnemonic generation.
//!
//! # Usage
//!
//! ```
//! use addrkit_btc::{AddressType, Network};
//!
//! let address = addrkit_btc::address_from_private_key_hex(
//!     "fff9f5137145b7609070fcaf13ab2db3974230699c74b1a3ca5479fb506b5de9",
//!     AddressType::NativeSegwit,
//!     Network::Mainnet,
//! )?;
//! assert_eq!(address, "bc1q6n4carl04gn4gr6wslwn42yyfpsvmw0d4w6s7v");
//!
//! let script = addrkit_btc::script_from_address(&address, Network::Mainnet)?;
//! assert_eq!(addrkit_btc::address_from_script(&script, Network::Mainnet)?, address);
//! # Ok::<(), addrkit_btc::Error>(())
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod address;
mod error;
pub mod keys;
pub mod mnemonic;
mod network;
pub mod script;
mod types;

pub use address::{
    address_from_private_key, address_from_private_key_hex, address_from_public_key_hex,
    create_address, derive_address, derive_address_from_slice,
};
pub use error::{Error, Input};
#[cfg(feature = "rand")]
pub use keys::{generate_private_key, generate_private_key_hex, generate_wif};
pub use keys::{
    decode_wif, is_valid_public_key, key_pair_from_hex, private_key_from_hex,
    private_key_hex_to_wif, private_key_to_compressed_wif, private_key_to_hex,
    private_key_to_wif, public_key_from_hex, public_key_from_private_key,
    public_key_hex_from_private_key_hex, wif_to_private_key, wif_to_private_key_hex,
};
#[cfg(feature = "rand")]
pub use mnemonic::generate_mnemonic;
pub use mnemonic::{
    address_from_mnemonic, mnemonic_from_entropy, seed_from_mnemonic, validate_mnemonic,
};
pub use network::Network;
pub use script::{address_from_script, extract_address, parse_address, script_from_address};
pub use types::{AddressType, EntropySize};

/// Re-exported key types used throughout the public API.
pub use bitcoin::secp256k1::{PublicKey, SecretKey};

/// A convenient Result type alias for addrkit-btc operations.
pub type Result<T> = core::result::Result<T, Error>;
