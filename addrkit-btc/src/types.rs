//! Address type and mnemonic strength selectors.

use core::fmt;
use core::str::FromStr;

use crate::Error;

/// Bitcoin address types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressType {
    /// Pay to Public Key Hash (Legacy) - starts with 1 or m/n
    Legacy,
    /// Pay to Script Hash wrapping P2WPKH (`SegWit` compatible) - starts with 3 or 2
    Segwit,
    /// Pay to Witness Public Key Hash (Native `SegWit`) - starts with bc1q or tb1q
    #[default]
    NativeSegwit,
    /// Pay to Taproot (Taproot/SegWit v1) - starts with bc1p or tb1p
    Taproot,
}

impl AddressType {
    /// All supported address types, in BIP purpose order.
    pub const ALL: [Self; 4] = [Self::Legacy, Self::Segwit, Self::NativeSegwit, Self::Taproot];

    /// Short template tag (`P2PKH`, `P2SH`, `P2WPKH`, `P2TR`).
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Legacy => "P2PKH",
            Self::Segwit => "P2SH",
            Self::NativeSegwit => "P2WPKH",
            Self::Taproot => "P2TR",
        }
    }

    /// Get address type name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legacy => "P2PKH (Legacy)",
            Self::Segwit => "P2SH-P2WPKH (SegWit)",
            Self::NativeSegwit => "P2WPKH (Native SegWit)",
            Self::Taproot => "P2TR (Taproot)",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AddressType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "p2pkh" | "legacy" => Ok(Self::Legacy),
            "p2sh" | "p2sh-p2wpkh" | "segwit" | "nested-segwit" => Ok(Self::Segwit),
            "p2wpkh" | "native-segwit" | "bech32" => Ok(Self::NativeSegwit),
            "p2tr" | "taproot" | "bech32m" => Ok(Self::Taproot),
            _ => Err(Error::UnsupportedAddressType(s.to_string())),
        }
    }
}

/// Mnemonic entropy strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntropySize {
    /// 128 bits, 12 words.
    #[default]
    Bits128,
    /// 256 bits, 24 words.
    Bits256,
}

impl EntropySize {
    /// Entropy size in bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits128 => 128,
            Self::Bits256 => 256,
        }
    }

    /// Entropy size in bytes.
    #[inline]
    #[must_use]
    pub const fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Number of words in the encoded mnemonic.
    #[inline]
    #[must_use]
    pub const fn word_count(self) -> usize {
        match self {
            Self::Bits128 => 12,
            Self::Bits256 => 24,
        }
    }
}

impl TryFrom<u32> for EntropySize {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            128 => Ok(Self::Bits128),
            256 => Ok(Self::Bits256),
            _ => Err(Error::InvalidEntropySize(bits)),
        }
    }
}
