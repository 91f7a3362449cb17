//! Block structure for the UserX blockchain
//!
//! Defines the immutable block, header and transaction structures.
//! Serialization is a fixed little-endian layout; block and transaction
//! identity is the double SHA-256 of the serialized bytes.

use crate::crypto::{double_hash, Hash};
use serde::{Deserialize, Serialize};

/// Output index marking a coinbase input
pub const COINBASE_OUTPUT_INDEX: u32 = u32::MAX;

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Protocol version
    pub version: u32,
    /// Hash of the previous block
    pub prev_hash: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub timestamp: u64,
    /// Difficulty target (compact representation)
    pub difficulty_target: u32,
    /// Nonce used for PoW
    pub nonce: u64,
}

impl BlockHeader {
    /// Create a new block header
    pub fn new(
        version: u32,
        prev_hash: Hash,
        merkle_root: Hash,
        timestamp: u64,
        difficulty_target: u32,
        nonce: u64,
    ) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            timestamp,
            difficulty_target,
            nonce,
        }
    }

    /// Serialize the header for hashing (88 bytes)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(88);
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.prev_hash.0);
        bytes.extend_from_slice(&self.merkle_root.0);
        bytes.extend_from_slice(&self.timestamp.to_le_bytes());
        bytes.extend_from_slice(&self.difficulty_target.to_le_bytes());
        bytes.extend_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Calculate the hash of this header
    pub fn hash(&self) -> Hash {
        double_hash(&self.to_bytes())
    }
}

/// Transaction input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxInput {
    /// Hash of the transaction being spent (zero for coinbase)
    pub prev_tx_hash: Hash,
    /// Index of the output being spent
    pub output_index: u32,
    /// Input script (carries the embedded payload in the coinbase)
    pub script_sig: Vec<u8>,
}

/// Transaction output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxOutput {
    /// Amount in base units
    pub amount: u64,
    /// Output script
    pub script_pubkey: Vec<u8>,
}

/// A transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction version
    pub version: u32,
    /// Inputs
    pub inputs: Vec<TxInput>,
    /// Outputs
    pub outputs: Vec<TxOutput>,
    /// Lock time
    pub lock_time: u32,
}

impl Transaction {
    /// Serialize the transaction for hashing
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&(self.inputs.len() as u32).to_le_bytes());
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_tx_hash.0);
            bytes.extend_from_slice(&input.output_index.to_le_bytes());
            bytes.extend_from_slice(&(input.script_sig.len() as u32).to_le_bytes());
            bytes.extend_from_slice(&input.script_sig);
        }
        bytes.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            bytes.extend_from_slice(&output.amount.to_le_bytes());
            bytes.extend_from_slice(&(output.script_pubkey.len() as u32).to_le_bytes());
            bytes.extend_from_slice(&output.script_pubkey);
        }
        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Calculate the transaction hash
    pub fn hash(&self) -> Hash {
        double_hash(&self.to_bytes())
    }

    /// Check whether this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1
            && self.inputs[0].prev_tx_hash == Hash::zero()
            && self.inputs[0].output_index == COINBASE_OUTPUT_INDEX
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in this block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create a new block
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    /// Get the block hash
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash == Hash::zero()
    }
}
