//! Chain parameters module - per-network consensus constants
//!
//! Holds the per-network constant sets that anchor consensus: genesis
//! identity, activation heights, cryptographic keys, encoding prefixes,
//! checkpoints and seed data. The active set is selected exactly once at
//! process start through [`registry`].

mod chainparams;
mod checkpoints;
mod genesis;
mod registry;
mod zerocoin;

pub use chainparams::*;
pub use checkpoints::*;
pub use genesis::*;
pub use registry::*;
pub use zerocoin::*;

use crate::crypto::Hash;
use thiserror::Error;

/// Sentinel activation height meaning "never", far beyond any realizable
/// chain length
pub const HEIGHT_NEVER: u32 = 999_999_999;

/// Chain parameter errors
///
/// Variants for which [`ParamsError::is_fatal`] returns true indicate
/// self-contradictory consensus constants; callers must terminate rather
/// than continue with them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    GenesisHashMismatch {
        network: Network,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    GenesisMerkleMismatch {
        network: Network,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network} checkpoint at height 0 does not match the genesis hash")]
    CheckpointGenesisMismatch { network: Network },
    #[error("{network} majority thresholds out of order (enforce {enforce}, reject {reject}, window {window})")]
    MajorityThresholdsOutOfOrder {
        network: Network,
        enforce: u32,
        reject: u32,
        window: u32,
    },
    #[error("chain parameters read before network selection")]
    NoNetworkSelected,
    #[error("unknown network id: {0}")]
    UnknownNetwork(String),
    #[error("invalid base58check address: {0}")]
    InvalidAddress(String),
}

impl ParamsError {
    /// True for invariant violations with no recovery path
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ParamsError::UnknownNetwork(_) | ParamsError::InvalidAddress(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_partition() {
        assert!(ParamsError::NoNetworkSelected.is_fatal());
        assert!(ParamsError::CheckpointGenesisMismatch {
            network: Network::Main
        }
        .is_fatal());
        assert!(!ParamsError::UnknownNetwork("sidenet".to_string()).is_fatal());
        assert!(!ParamsError::InvalidAddress("checksum".to_string()).is_fatal());
    }
}
