//! BIP39 mnemonic generation and mnemonic-to-address derivation.

use bip39::Mnemonic;
use bitcoin::bip32::{ChildNumber, Xpriv};
use bitcoin::secp256k1::Secp256k1;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use tracing::debug;
use zeroize::Zeroizing;

use crate::address::derive_address;
#[cfg(feature = "rand")]
use crate::EntropySize;
use crate::{AddressType, Error, Input, Network, Result};

/// BIP39 seed stretching rounds.
const PBKDF2_ROUNDS: u32 = 2048;

/// Generate a new English mnemonic from fresh random entropy.
///
/// Only 128-bit (12 words) and 256-bit (24 words) strengths are accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidEntropySize`] for any other `bits` value.
#[cfg(feature = "rand")]
pub fn generate_mnemonic(bits: u32) -> Result<Zeroizing<String>> {
    use bitcoin::secp256k1::rand::{RngCore, thread_rng};

    let size = EntropySize::try_from(bits)?;
    debug!(bits = size.bits(), "generating mnemonic");

    let mut buf = Zeroizing::new([0u8; 32]);
    let entropy = &mut buf[..size.byte_len()];
    thread_rng().fill_bytes(entropy);

    mnemonic_from_entropy(entropy)
}

/// Encode raw entropy as an English mnemonic.
///
/// # Errors
///
/// Returns [`Error::Mnemonic`] if the entropy length is not a multiple of
/// 32 bits between 128 and 256.
pub fn mnemonic_from_entropy(entropy: &[u8]) -> Result<Zeroizing<String>> {
    let mnemonic = Mnemonic::from_entropy(entropy)?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}

/// Derive the 64-byte BIP39 seed of a mnemonic and optional password.
///
/// The phrase is stretched as given: words, length and checksum are not
/// checked, so any non-empty text yields a seed.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `mnemonic` is empty.
pub fn seed_from_mnemonic(mnemonic: &str, password: &str) -> Result<Zeroizing<[u8; 64]>> {
    if mnemonic.is_empty() {
        return Err(Error::MissingInput(Input::Mnemonic));
    }

    let salt = Zeroizing::new(format!("mnemonic{password}"));
    let mut seed = Zeroizing::new([0u8; 64]);
    pbkdf2_hmac::<Sha512>(mnemonic.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed[..]);

    Ok(seed)
}

/// Check that a mnemonic has known words, a valid length and checksum.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `mnemonic` is empty and
/// [`Error::Mnemonic`] describing the first problem found.
pub fn validate_mnemonic(mnemonic: &str) -> Result<()> {
    if mnemonic.is_empty() {
        return Err(Error::MissingInput(Input::Mnemonic));
    }
    Mnemonic::parse_normalized(mnemonic)?;
    Ok(())
}

/// Derive an address from a mnemonic.
///
/// The key is the hardened child `m/index'` of the BIP32 master key of the
/// mnemonic's seed.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] for an empty mnemonic, otherwise the error
/// of master key creation or child derivation (including `index >= 2^31`).
/// The phrase itself is not validated; see [`validate_mnemonic`].
pub fn address_from_mnemonic(
    network: Network,
    address_type: AddressType,
    mnemonic: &str,
    password: &str,
    index: u32,
) -> Result<String> {
    debug!(%network, address_type = address_type.tag(), index, "deriving address from mnemonic");

    let seed = seed_from_mnemonic(mnemonic, password)?;
    let secp = Secp256k1::new();
    let master_key = Xpriv::new_master(network.to_bitcoin_network(), &seed[..])?;
    let child_key = master_key.derive_priv(&secp, &[ChildNumber::from_hardened_idx(index)?])?;
    let public_key = child_key.private_key.public_key(&secp);

    Ok(derive_address(&public_key, address_type, network))
}
