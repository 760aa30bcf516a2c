//! Bitcoin network selection.

use core::fmt;

use bitcoin::{Network as BtcNetwork, NetworkKind};

/// Supported Bitcoin networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Bitcoin mainnet.
    #[default]
    Mainnet,
    /// Bitcoin testnet.
    Testnet,
}

impl Network {
    /// Convert to bitcoin crate's Network type.
    #[inline]
    #[must_use]
    pub const fn to_bitcoin_network(self) -> BtcNetwork {
        match self {
            Self::Mainnet => BtcNetwork::Bitcoin,
            Self::Testnet => BtcNetwork::Testnet,
        }
    }

    /// Get network name as string.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl From<NetworkKind> for Network {
    fn from(kind: NetworkKind) -> Self {
        if kind == NetworkKind::Main {
            Self::Mainnet
        } else {
            Self::Testnet
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bitcoin_network() {
        assert_eq!(Network::Mainnet.to_bitcoin_network(), BtcNetwork::Bitcoin);
        assert_eq!(Network::Testnet.to_bitcoin_network(), BtcNetwork::Testnet);
    }

    #[test]
    fn test_from_network_kind() {
        assert_eq!(Network::from(NetworkKind::Main), Network::Mainnet);
        assert_eq!(Network::from(NetworkKind::Test), Network::Testnet);
    }

    #[test]
    fn test_default_is_mainnet() {
        assert_eq!(Network::default(), Network::Mainnet);
        assert_eq!(Network::default().to_string(), "mainnet");
    }
}
