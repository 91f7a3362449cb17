//! Hardcoded chain checkpoints
//!
//! A checkpoint asserts that the locally validated chain must carry a
//! specific block hash at a specific height, rejecting deep
//! reorganizations past it. Each network carries its own table together
//! with statistics used by sync-progress estimation.

use crate::crypto::Hash;
use std::collections::BTreeMap;

/// Checkpoint table and statistics for one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, Hash>,
    /// UNIX timestamp of the last checkpoint block
    pub last_checkpoint_time: u64,
    /// Total number of transactions between genesis and the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated number of transactions per day after the last checkpoint
    pub transactions_per_day: u64,
}

impl CheckpointData {
    fn from_entries(
        entries: &[(u32, &str)],
        last_checkpoint_time: u64,
        transactions_last_checkpoint: u64,
        transactions_per_day: u64,
    ) -> Self {
        let checkpoints = entries
            .iter()
            .map(|(height, hash)| {
                let hash = Hash::from_hex(hash).expect("checkpoint hash constant is valid hex");
                (*height, hash)
            })
            .collect();
        Self {
            checkpoints,
            last_checkpoint_time,
            transactions_last_checkpoint,
            transactions_per_day,
        }
    }

    /// Main network checkpoints
    pub fn mainnet() -> Self {
        Self::from_entries(
            &[(
                0,
                "ca71a7375916bef4a854a767968f1878d722e9da43faacef639361e5d8ba9cc4",
            )],
            1552143600,
            0,
            2000,
        )
    }

    /// Test network checkpoints
    pub fn testnet() -> Self {
        Self::from_entries(
            &[(
                0,
                "0c5f1d15ae6365ca200349a0700b76b929e4de71e8f75186b8bade0ac1f3edc5",
            )],
            1552143601,
            0,
            250,
        )
    }

    /// Regression test checkpoints
    pub fn regtest() -> Self {
        Self::from_entries(
            &[(
                0,
                "de2ba5adced4c517ecc8cb3e668bd99ddf48661751f49b5fb96118c2764f502d",
            )],
            1552143602,
            0,
            100,
        )
    }

    /// Expected hash at the given height, if a checkpoint exists there
    pub fn hash_at(&self, height: u32) -> Option<&Hash> {
        self.checkpoints.get(&height)
    }

    /// The highest checkpoint as (height, hash)
    pub fn last(&self) -> Option<(u32, &Hash)> {
        self.checkpoints
            .iter()
            .next_back()
            .map(|(height, hash)| (*height, hash))
    }

    /// Number of checkpoints in the table
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// True if the table is empty
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_have_genesis_checkpoint() {
        for data in [
            CheckpointData::mainnet(),
            CheckpointData::testnet(),
            CheckpointData::regtest(),
        ] {
            assert!(data.hash_at(0).is_some());
            assert!(!data.is_empty());
        }
    }

    #[test]
    fn test_lookup_absent_height() {
        let data = CheckpointData::mainnet();
        assert!(data.hash_at(12345).is_none());
    }

    #[test]
    fn test_last_checkpoint() {
        let data = CheckpointData::mainnet();
        let (height, hash) = data.last().unwrap();
        assert_eq!(height, 0);
        assert_eq!(hash, data.hash_at(0).unwrap());
    }

    #[test]
    fn test_stats_differ_per_network() {
        assert_eq!(CheckpointData::mainnet().transactions_per_day, 2000);
        assert_eq!(CheckpointData::testnet().transactions_per_day, 250);
        assert_eq!(CheckpointData::regtest().transactions_per_day, 100);
    }
}
