//! UserX Blockchain Core Library
//!
//! Consensus chain parameters for the UserX network: genesis construction
//! and verification, per-network constant sets (main, test, regtest,
//! unittest), checkpoints, zerocoin accumulator parameters, and seed data.
//!
//! Every other subsystem (validation, networking, wallet, RPC) reads its
//! consensus constants through [`params`].

pub mod consensus;
pub mod crypto;
pub mod p2p;
pub mod params;

/// Monetary constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// One UserX coin in base units (8 decimal places)
    pub const COIN: u64 = 100_000_000;

    /// One hundredth of a coin
    pub const CENT: u64 = 1_000_000;

    /// Maximum circulating supply in base units (21M UserX)
    pub const MAX_MONEY: u64 = 21_000_000 * COIN;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;

    /// Chain name (short form used in logs and user agents)
    pub const CHAIN_NAME: &str = "UserX";
}
