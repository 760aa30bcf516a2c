//! Conversion between output scripts and addresses.

use bitcoin::address::{FromScriptError, NetworkUnchecked};
use bitcoin::opcodes::all::OP_CHECKSIG;
use bitcoin::{Address, PublicKey, Script, ScriptBuf};
use tracing::{debug, trace};

use crate::{Error, Input, Network, Result};

/// Parse an address and check that it belongs to `network`.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `address` is empty, and
/// [`Error::AddressParse`] if it does not decode or encodes another network.
pub fn parse_address(address: &str, network: Network) -> Result<Address> {
    if address.is_empty() {
        return Err(Error::MissingInput(Input::Address));
    }

    let unchecked: Address<NetworkUnchecked> = address.parse()?;
    Ok(unchecked.require_network(network.to_bitcoin_network())?)
}

/// Build the standard output script (hex) paying to `address`.
///
/// The template follows from the decoded address itself.
///
/// # Errors
///
/// See [`parse_address`].
pub fn script_from_address(address: &str, network: Network) -> Result<String> {
    debug!(%network, "building output script from address");
    let script = parse_address(address, network)?.script_pubkey();
    Ok(hex::encode(script.as_bytes()))
}

/// Extract the address an output script pays to.
///
/// Pay-to-pubkey scripts extract to the P2PKH address of their key. Returns
/// `None` for scripts that do not commit to an address. Every supported
/// template commits to a single key or hash, so at most one address exists.
///
/// # Errors
///
/// Returns [`Error::FromScript`] if a witness program is malformed.
pub fn extract_address(script: &Script, network: Network) -> Result<Option<Address>> {
    if let Some(public_key) = p2pk_public_key(script) {
        return Ok(Some(Address::p2pkh(public_key, network.to_bitcoin_network())));
    }

    match Address::from_script(script, network.to_bitcoin_network()) {
        Ok(address) => Ok(Some(address)),
        Err(FromScriptError::UnrecognizedScript) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Extract the address encoded by a hex output script.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `script_hex` is empty, [`Error::Hex`] if
/// it is not valid hex, and [`Error::NoAddress`] if the script does not pay
/// to an address.
pub fn address_from_script(script_hex: &str, network: Network) -> Result<String> {
    if script_hex.is_empty() {
        return Err(Error::MissingInput(Input::Script));
    }
    debug!(%network, "extracting address from output script");

    let script = ScriptBuf::from_bytes(hex::decode(script_hex)?);
    let address = extract_address(&script, network)?.ok_or(Error::NoAddress)?;
    trace!(%address, "extracted address");

    Ok(address.to_string())
}

/// The key of a `<pubkey> OP_CHECKSIG` script, compressed or uncompressed.
fn p2pk_public_key(script: &Script) -> Option<PublicKey> {
    let bytes = script.as_bytes();
    let (&push, rest) = bytes.split_first()?;
    let (&last, key) = rest.split_last()?;

    let key_len = usize::from(push);
    if !matches!(key_len, 33 | 65) || key.len() != key_len || last != OP_CHECKSIG.to_u8() {
        return None;
    }
    PublicKey::from_slice(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_from_address() {
        let cases = [
            (
                "bc1qr8063yn4gk44elj8sy6zk59y32v5t9jwjyv080",
                "001419dfa8927545ab5cfe4781342b50a48a9945964e",
            ),
            (
                "bc1q7cyrfmck2ffu2ud3rn5l5a8yv6f0chkp0zpemf",
                "0014f60834ef165253c571b11ce9fa74e46692fc5ec1",
            ),
            (
                "1LR8Cotk1LDxsVRtqUs16QJ3ExPGwDfeMz",
                "76a914d4fa62e0243e52eeddd60812c9cd421bd337356588ac",
            ),
        ];
        for (address, expected) in cases {
            assert_eq!(script_from_address(address, Network::Mainnet).unwrap(), expected);
        }
    }

    #[test]
    fn test_script_from_address_invalid() {
        assert!(matches!(
            script_from_address("", Network::Mainnet),
            Err(Error::MissingInput(Input::Address))
        ));
        assert!(matches!(
            script_from_address("not-an-address", Network::Mainnet),
            Err(Error::AddressParse(_))
        ));
    }

    #[test]
    fn test_script_from_address_wrong_network() {
        let err = script_from_address(
            "bc1qr8063yn4gk44elj8sy6zk59y32v5t9jwjyv080",
            Network::Testnet,
        )
        .unwrap_err();
        assert!(matches!(err, Error::AddressParse(_)));
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_address_from_script() {
        let cases = [
            (
                "5120c63ae2b830aee511ff6b3c606b53d6ca0e22d6a7516ad506b5346bf74fa5e3ae",
                "bc1pccaw9wps4mj3rlmt83sxk57keg8z9448294d2p44x34lwna9uwhqe2lxas",
            ),
            (
                "76a91443c1c9de50e52e35546084083363b4586782cbf388ac",
                "17BGRWzKtPstTTvJK9rDusVNMTbWit52XT",
            ),
            (
                "001419dfa8927545ab5cfe4781342b50a48a9945964e",
                "bc1qr8063yn4gk44elj8sy6zk59y32v5t9jwjyv080",
            ),
        ];
        for (script, expected) in cases {
            assert_eq!(address_from_script(script, Network::Mainnet).unwrap(), expected);
        }
    }

    #[test]
    fn test_address_from_script_invalid() {
        assert!(matches!(
            address_from_script("", Network::Mainnet),
            Err(Error::MissingInput(Input::Script))
        ));
        assert!(matches!(
            address_from_script("gkckfcbnlkjhoiu7890987654", Network::Mainnet),
            Err(Error::Hex(_))
        ));
    }

    #[test]
    fn test_address_from_script_without_address() {
        // OP_RETURN "hello"
        assert!(matches!(
            address_from_script("6a0568656c6c6f", Network::Mainnet),
            Err(Error::NoAddress)
        ));
    }

    #[test]
    fn test_address_from_p2pk_script() {
        let public_key = "022d35c7ede60cb68dee6e60ab9ad5863a7a726b297273d7a99b9dfb032a10e3f8";
        let script = format!("21{public_key}ac");
        assert_eq!(
            address_from_script(&script, Network::Mainnet).unwrap(),
            "1LQpSSwbXMDiscMy4eamjDFqu5y8DFxcLo"
        );
    }

    #[test]
    fn test_p2pk_public_key_rejects_other_templates() {
        let p2pkh = ScriptBuf::from_bytes(
            hex::decode("76a91443c1c9de50e52e35546084083363b4586782cbf388ac").unwrap(),
        );
        assert!(p2pk_public_key(&p2pkh).is_none());
        assert!(p2pk_public_key(&ScriptBuf::new()).is_none());

        // Push length says 33 but the script is truncated.
        let truncated = ScriptBuf::from_bytes(
            hex::decode("212d35c7ede60cb68dee6e60ab9ad5863a7a726b297273d7a99b9dfb032a10e3f8ac")
                .unwrap(),
        );
        assert!(p2pk_public_key(&truncated).is_none());
    }

    #[test]
    fn test_testnet_roundtrip() {
        let script = "0014f60834ef165253c571b11ce9fa74e46692fc5ec1";
        let address = address_from_script(script, Network::Testnet).unwrap();
        assert!(address.starts_with("tb1q"));
        assert_eq!(script_from_address(&address, Network::Testnet).unwrap(), script);
    }
}
