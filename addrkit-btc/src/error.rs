//! Error types for address and key-material operations.

use core::fmt;

/// The argument that was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Hex-encoded private key.
    PrivateKey,
    /// Hex-encoded public key.
    PublicKey,
    /// Wallet Import Format string.
    Wif,
    /// BIP39 mnemonic phrase.
    Mnemonic,
    /// Address string.
    Address,
    /// Hex-encoded output script.
    Script,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PrivateKey => "private key",
            Self::PublicKey => "public key",
            Self::Wif => "WIF",
            Self::Mnemonic => "mnemonic",
            Self::Address => "address",
            Self::Script => "script",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during address and key-material operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was empty.
    #[error("missing {0}")]
    MissingInput(Input),
    /// Input was not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Key bytes had the wrong length.
    #[error("invalid key length {actual}, expected at most {expected} bytes")]
    InvalidKeyLength {
        /// Maximum accepted length.
        expected: usize,
        /// Length that was provided.
        actual: usize,
    },
    /// Key bytes were rejected by secp256k1.
    #[error("secp256k1 error: {0}")]
    Secp256k1(#[from] bitcoin::secp256k1::Error),
    /// Malformed WIF payload.
    #[error("invalid WIF: {0}")]
    Wif(#[from] bitcoin::key::FromWifError),
    /// Address did not decode, or decoded for another network.
    #[error("invalid address: {0}")]
    AddressParse(#[from] bitcoin::address::ParseError),
    /// Output script carried a malformed witness program.
    #[error("invalid output script: {0}")]
    FromScript(#[from] bitcoin::address::FromScriptError),
    /// Output script did not match any template that commits to an address.
    #[error("invalid output script, missing an address")]
    NoAddress,
    /// Public key is empty, zero, or not on the curve.
    #[error("invalid public key")]
    InvalidPublicKey,
    /// Address type outside the four supported variants.
    #[error("unsupported address type {0:?}, expected: p2pkh, p2sh, p2wpkh, or p2tr")]
    UnsupportedAddressType(String),
    /// Mnemonic entropy size other than 128 or 256 bits.
    #[error("invalid entropy size {0} bits, must be 128 or 256")]
    InvalidEntropySize(u32),
    /// BIP39 error.
    #[error("mnemonic error: {0}")]
    Mnemonic(#[from] bip39::Error),
    /// BIP32 derivation error.
    #[error("BIP32 derivation error: {0}")]
    Bip32(#[from] bitcoin::bip32::Error),
}

impl Error {
    /// Whether this error comes from malformed hex, base58, bech32 or key
    /// bytes.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::Hex(_)
                | Self::InvalidKeyLength { .. }
                | Self::Secp256k1(_)
                | Self::Wif(_)
                | Self::AddressParse(_)
        )
    }

    /// Whether this error reports an empty required argument.
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display() {
        assert_eq!(
            Error::MissingInput(Input::PrivateKey).to_string(),
            "missing private key"
        );
        assert_eq!(Error::MissingInput(Input::Wif).to_string(), "missing WIF");
    }

    #[test]
    fn test_decode_error_classification() {
        let err = Error::from(hex::FromHexError::OddLength);
        assert!(err.is_decode_error());
        assert!(!err.is_missing_input());

        assert!(!Error::InvalidPublicKey.is_decode_error());
        assert!(Error::MissingInput(Input::Script).is_missing_input());
    }

    #[test]
    fn test_collaborator_errors_are_prefixed() {
        use std::error::Error as _;

        let err = Error::from(bip39::Error::InvalidChecksum);
        assert!(err.to_string().starts_with("mnemonic error: "), "{err}");
        assert!(err.source().is_some());

        let err = Error::from(bitcoin::bip32::Error::InvalidChildNumber(1 << 31));
        assert!(err.to_string().starts_with("BIP32 derivation error: "), "{err}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_entropy_size_display() {
        assert_eq!(
            Error::InvalidEntropySize(18).to_string(),
            "invalid entropy size 18 bits, must be 128 or 256"
        );
    }
}
