//! Key material conversions.
//!
//! Converts between raw secp256k1 keys, hex strings and Wallet Import Format
//! strings, and checks that public key bytes describe a point on the curve.

use bitcoin::PrivateKey;
use bitcoin::secp256k1::{PublicKey, Secp256k1, SecretKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::{Error, Input, Network, Result};

/// Size of a secp256k1 secret scalar in bytes.
const SECRET_KEY_SIZE: usize = 32;

/// Generate a new random private key.
///
/// Uses the thread-local CSPRNG seeded from the operating system.
#[cfg(feature = "rand")]
#[must_use]
pub fn generate_private_key() -> SecretKey {
    SecretKey::new(&mut bitcoin::secp256k1::rand::thread_rng())
}

/// Generate a new random private key in hex format (zeroized on drop).
#[cfg(feature = "rand")]
#[must_use]
pub fn generate_private_key_hex() -> Zeroizing<String> {
    private_key_to_hex(&generate_private_key())
}

/// Generate a new random private key encoded as an uncompressed WIF.
#[cfg(feature = "rand")]
#[must_use]
pub fn generate_wif(network: Network) -> Zeroizing<String> {
    private_key_to_wif(&generate_private_key(), network)
}

/// Parse a hex-encoded private key.
///
/// An optional `0x` prefix is accepted. Keys shorter than 32 bytes are
/// left-padded with zeros.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `hex_str` is empty, and a decode error
/// if it is not valid hex, longer than 32 bytes, or not a valid scalar.
pub fn private_key_from_hex(hex_str: &str) -> Result<SecretKey> {
    if hex_str.is_empty() {
        return Err(Error::MissingInput(Input::PrivateKey));
    }

    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    let bytes = Zeroizing::new(hex::decode(hex_str)?);
    if bytes.len() > SECRET_KEY_SIZE {
        return Err(Error::InvalidKeyLength {
            expected: SECRET_KEY_SIZE,
            actual: bytes.len(),
        });
    }

    let mut padded = Zeroizing::new([0u8; SECRET_KEY_SIZE]);
    padded[SECRET_KEY_SIZE - bytes.len()..].copy_from_slice(&bytes);

    Ok(SecretKey::from_slice(&padded[..])?)
}

/// Get the private key in hex format (zeroized on drop).
#[inline]
#[must_use]
pub fn private_key_to_hex(private_key: &SecretKey) -> Zeroizing<String> {
    Zeroizing::new(hex::encode(private_key.secret_bytes()))
}

/// Parse a hex-encoded public key in compressed (33 bytes) or uncompressed
/// (65 bytes) SEC1 form.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `hex_str` is empty, and a decode error
/// if the bytes are not valid hex or not a point on the curve.
pub fn public_key_from_hex(hex_str: &str) -> Result<PublicKey> {
    if hex_str.is_empty() {
        return Err(Error::MissingInput(Input::PublicKey));
    }

    let bytes = hex::decode(hex_str)?;
    Ok(PublicKey::from_slice(&bytes)?)
}

/// Check that `bytes` encode a valid secp256k1 public key.
///
/// Empty and all-zero inputs are never valid.
#[must_use]
pub fn is_valid_public_key(bytes: &[u8]) -> bool {
    if bytes.iter().all(|b| *b == 0) {
        return false;
    }
    PublicKey::from_slice(bytes).is_ok()
}

/// Compute the public key of a private key.
#[must_use]
pub fn public_key_from_private_key(private_key: &SecretKey) -> PublicKey {
    let secp = Secp256k1::signing_only();
    PublicKey::from_secret_key(&secp, private_key)
}

/// Derive the compressed public key (hex) of a hex-encoded private key.
///
/// # Errors
///
/// Returns an error if the private key cannot be parsed.
pub fn public_key_hex_from_private_key_hex(private_key_hex: &str) -> Result<String> {
    let private_key = private_key_from_hex(private_key_hex)?;
    Ok(hex::encode(public_key_from_private_key(&private_key).serialize()))
}

/// Parse a hex-encoded private key and return it with its public key.
///
/// # Errors
///
/// Returns an error if the private key cannot be parsed.
pub fn key_pair_from_hex(private_key_hex: &str) -> Result<(SecretKey, PublicKey)> {
    let private_key = private_key_from_hex(private_key_hex)?;
    let public_key = public_key_from_private_key(&private_key);
    Ok((private_key, public_key))
}

/// Export a private key as an uncompressed WIF (zeroized on drop).
///
/// Mainnet keys start with `5`, testnet keys with `9`.
#[must_use]
pub fn private_key_to_wif(private_key: &SecretKey, network: Network) -> Zeroizing<String> {
    let key = PrivateKey::new_uncompressed(*private_key, network.to_bitcoin_network());
    Zeroizing::new(key.to_wif())
}

/// Export a private key as a compressed WIF (zeroized on drop).
///
/// Mainnet keys start with `K` or `L`, testnet keys with `c`.
#[must_use]
pub fn private_key_to_compressed_wif(private_key: &SecretKey, network: Network) -> Zeroizing<String> {
    let key = PrivateKey::new(*private_key, network.to_bitcoin_network());
    Zeroizing::new(key.to_wif())
}

/// Convert a hex-encoded private key to an uncompressed WIF.
///
/// # Errors
///
/// Returns an error if the private key cannot be parsed.
pub fn private_key_hex_to_wif(private_key_hex: &str, network: Network) -> Result<Zeroizing<String>> {
    debug!(%network, "encoding private key as WIF");
    let private_key = private_key_from_hex(private_key_hex)?;
    Ok(private_key_to_wif(&private_key, network))
}

/// Decode a WIF string, keeping its network and compression flag.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `wif` is empty, and [`Error::Wif`] if the
/// payload is malformed (bad base58, checksum, version byte or scalar).
pub fn decode_wif(wif: &str) -> Result<PrivateKey> {
    if wif.is_empty() {
        return Err(Error::MissingInput(Input::Wif));
    }
    Ok(PrivateKey::from_wif(wif)?)
}

/// Import a private key from a WIF string of either network or compression.
///
/// # Errors
///
/// See [`decode_wif`].
pub fn wif_to_private_key(wif: &str) -> Result<SecretKey> {
    Ok(decode_wif(wif)?.inner)
}

/// Convert a WIF string to a hex-encoded private key (zeroized on drop).
///
/// # Errors
///
/// See [`decode_wif`].
pub fn wif_to_private_key_hex(wif: &str) -> Result<Zeroizing<String>> {
    let private_key = wif_to_private_key(wif)?;
    Ok(private_key_to_hex(&private_key))
}
