//! Bitcoin address derivation.
//!
//! Every derivation path ends in [`create_address`], which picks the output
//! template for an [`AddressType`] and encodes it for a [`Network`].

use bitcoin::key::CompressedPublicKey;
use bitcoin::secp256k1::{PublicKey, Secp256k1, SecretKey};
use bitcoin::{Address, PublicKey as BtcPublicKey};
use tracing::{debug, trace};

use crate::keys::{is_valid_public_key, private_key_from_hex, public_key_from_hex};
use crate::{AddressType, Error, Network, Result};

/// Create a Bitcoin address from a compressed public key.
///
/// All four address types commit to the compressed serialization of the key:
///
/// - `Legacy`: base58check of `hash160(key)` with the P2PKH version byte.
/// - `Segwit`: base58check of `hash160(0x00 0x14 || hash160(key))` with the
///   P2SH version byte.
/// - `NativeSegwit`: bech32 witness v0 program `hash160(key)`.
/// - `Taproot`: bech32m witness v1 program holding the BIP86 output key, i.e.
///   the x-only key tweaked with no script tree.
#[must_use]
pub fn create_address(
    public_key: &CompressedPublicKey,
    network: Network,
    address_type: AddressType,
) -> Address {
    let btc_network = network.to_bitcoin_network();

    match address_type {
        AddressType::Legacy => Address::p2pkh(BtcPublicKey::from(*public_key), btc_network),
        AddressType::Segwit => Address::p2shwpkh(public_key, btc_network),
        AddressType::NativeSegwit => Address::p2wpkh(public_key, btc_network),
        AddressType::Taproot => {
            let secp = Secp256k1::verification_only();
            let internal_key = public_key.0.x_only_public_key().0;
            Address::p2tr(&secp, internal_key, None, btc_network)
        }
    }
}

/// Derive the address string of a public key.
#[must_use]
pub fn derive_address(public_key: &PublicKey, address_type: AddressType, network: Network) -> String {
    debug!(address_type = address_type.tag(), %network, "deriving address");
    let address = create_address(&CompressedPublicKey(*public_key), network, address_type);
    trace!(%address, "derived address");
    address.to_string()
}

/// Derive the address string of a SEC1-encoded public key.
///
/// # Errors
///
/// Returns [`Error::InvalidPublicKey`] if `public_key` is empty, zero, or not
/// a point on the curve.
pub fn derive_address_from_slice(
    public_key: &[u8],
    address_type: AddressType,
    network: Network,
) -> Result<String> {
    if !is_valid_public_key(public_key) {
        return Err(Error::InvalidPublicKey);
    }
    let public_key = PublicKey::from_slice(public_key)?;
    Ok(derive_address(&public_key, address_type, network))
}

/// Derive the address string of a private key.
#[must_use]
pub fn address_from_private_key(
    private_key: &SecretKey,
    address_type: AddressType,
    network: Network,
) -> String {
    let secp = Secp256k1::signing_only();
    derive_address(&private_key.public_key(&secp), address_type, network)
}

/// Derive the address string of a hex-encoded private key.
///
/// # Errors
///
/// Returns an error if the private key is empty or cannot be parsed.
pub fn address_from_private_key_hex(
    private_key_hex: &str,
    address_type: AddressType,
    network: Network,
) -> Result<String> {
    let private_key = private_key_from_hex(private_key_hex)?;
    Ok(address_from_private_key(&private_key, address_type, network))
}

/// Derive the address string of a hex-encoded public key.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `public_key_hex` is empty, and a decode
/// error if it is not valid hex or not a point on the curve.
pub fn address_from_public_key_hex(
    public_key_hex: &str,
    address_type: AddressType,
    network: Network,
) -> Result<String> {
    let public_key = public_key_from_hex(public_key_hex)?;
    Ok(derive_address(&public_key, address_type, network))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Input;

    const PRIVATE_KEY_HEX: &str = "fff9f5137145b7609070fcaf13ab2db3974230699c74b1a3ca5479fb506b5de9";
    const PUBLIC_KEY_HEX: &str = "022d35c7ede60cb68dee6e60ab9ad5863a7a726b297273d7a99b9dfb032a10e3f8";

    #[test]
    fn test_address_from_private_key_hex() {
        assert_eq!(
            address_from_private_key_hex(PRIVATE_KEY_HEX, AddressType::NativeSegwit, Network::Mainnet)
                .unwrap(),
            "bc1q6n4carl04gn4gr6wslwn42yyfpsvmw0d4w6s7v"
        );
        assert_eq!(
            address_from_private_key_hex(PRIVATE_KEY_HEX, AddressType::Taproot, Network::Mainnet)
                .unwrap(),
            "bc1psmzc872vcy7l2dcrelmtnw7ujxrt2kuznm9adezhcsaf0x4srwtql74tu6"
        );
    }

    #[test]
    fn test_address_from_private_key_hex_invalid() {
        assert!(matches!(
            address_from_private_key_hex("", AddressType::NativeSegwit, Network::Mainnet),
            Err(Error::MissingInput(Input::PrivateKey))
        ));
        assert!(
            address_from_private_key_hex(
                "caf13ab2db3974230699c74b1a3ca5479fb506b5de9",
                AddressType::NativeSegwit,
                Network::Mainnet
            )
            .unwrap_err()
            .is_decode_error()
        );
    }

    #[test]
    fn test_address_from_public_key_hex() {
        let cases = [
            (AddressType::NativeSegwit, "bc1q6n4carl04gn4gr6wslwn42yyfpsvmw0d4w6s7v"),
            (
                AddressType::Taproot,
                "bc1psmzc872vcy7l2dcrelmtnw7ujxrt2kuznm9adezhcsaf0x4srwtql74tu6",
            ),
            (AddressType::Legacy, "1LQpSSwbXMDiscMy4eamjDFqu5y8DFxcLo"),
            (AddressType::Segwit, "3JkfuPbwMZNQCHo9bvmgyCKrMCoijC45B2"),
        ];
        for (address_type, expected) in cases {
            assert_eq!(
                address_from_public_key_hex(PUBLIC_KEY_HEX, address_type, Network::Mainnet)
                    .unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_address_from_public_key_hex_invalid() {
        assert!(matches!(
            address_from_public_key_hex("", AddressType::Taproot, Network::Mainnet),
            Err(Error::MissingInput(Input::PublicKey))
        ));
        assert!(address_from_public_key_hex("0", AddressType::Segwit, Network::Mainnet).is_err());
        assert!(
            address_from_public_key_hex("00000", AddressType::NativeSegwit, Network::Mainnet)
                .is_err()
        );
        for bad_point in ["00".repeat(33), format!("02{}", "ff".repeat(32))] {
            let err = address_from_public_key_hex(&bad_point, AddressType::Taproot, Network::Mainnet)
                .unwrap_err();
            assert!(matches!(err, Error::Secp256k1(_)), "{bad_point}: {err}");
            assert!(err.is_decode_error());
        }
    }

    #[test]
    fn test_address_prefixes() {
        let public_key = public_key_from_hex(PUBLIC_KEY_HEX).unwrap();
        let cases = [
            (AddressType::Legacy, Network::Mainnet, "1"),
            (AddressType::Segwit, Network::Mainnet, "3"),
            (AddressType::NativeSegwit, Network::Mainnet, "bc1q"),
            (AddressType::Taproot, Network::Mainnet, "bc1p"),
            (AddressType::Segwit, Network::Testnet, "2"),
            (AddressType::NativeSegwit, Network::Testnet, "tb1q"),
            (AddressType::Taproot, Network::Testnet, "tb1p"),
        ];
        for (address_type, network, prefix) in cases {
            let address = derive_address(&public_key, address_type, network);
            assert!(address.starts_with(prefix), "{address_type}: {address}");
        }

        let legacy_testnet = derive_address(&public_key, AddressType::Legacy, Network::Testnet);
        assert!(legacy_testnet.starts_with('m') || legacy_testnet.starts_with('n'));
    }

    #[test]
    fn test_uncompressed_key_derives_compressed_address() {
        let public_key = public_key_from_hex(PUBLIC_KEY_HEX).unwrap();
        let uncompressed = public_key.serialize_uncompressed();

        for address_type in AddressType::ALL {
            assert_eq!(
                derive_address_from_slice(&uncompressed, address_type, Network::Mainnet).unwrap(),
                derive_address(&public_key, address_type, Network::Mainnet)
            );
        }
    }

    #[test]
    fn test_derive_address_from_slice_invalid() {
        for address_type in AddressType::ALL {
            assert!(matches!(
                derive_address_from_slice(&[], address_type, Network::Mainnet),
                Err(Error::InvalidPublicKey)
            ));
            assert!(matches!(
                derive_address_from_slice(&[0u8; 33], address_type, Network::Mainnet),
                Err(Error::InvalidPublicKey)
            ));
        }
    }

    #[test]
    fn test_derive_address_is_deterministic() {
        let private_key = private_key_from_hex(PRIVATE_KEY_HEX).unwrap();
        for address_type in AddressType::ALL {
            let first = address_from_private_key(&private_key, address_type, Network::Mainnet);
            let second = address_from_private_key(&private_key, address_type, Network::Mainnet);
            assert_eq!(first, second);
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_random_keys_derive_every_type() {
        let private_key = crate::keys::generate_private_key();
        for address_type in AddressType::ALL {
            let address = address_from_private_key(&private_key, address_type, Network::Mainnet);
            assert!(!address.is_empty());
        }
    }
}
