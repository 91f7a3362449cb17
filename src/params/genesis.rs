//! Genesis block construction for the UserX networks
//!
//! Rebuilds the genesis block from its fixed literals at every process
//! start and verifies it against the expected hash and merkle root. A
//! mismatch means the build's constants are corrupted and the node would
//! desynchronize from the network, so it is unrecoverable.

use crate::consensus::{Block, BlockHeader, Transaction, TxInput, TxOutput, COINBASE_OUTPUT_INDEX};
use crate::crypto::{compute_merkle_root, Hash};
use crate::params::{Network, ParamsError};

/// ASCII payload embedded in the coinbase input script
pub const GENESIS_PAYLOAD: &str = "Newly discovered titanosaur fossil had a heart tail";

/// Public key paid by the (zero-value) genesis coinbase output
const GENESIS_PUBKEY: &str = "04CB4345B7DD82CE093B0E1966C3D75F364AC1599549BCF653FBC4C295C47F8C1EA777E338C7E41D8053814637BF2E002F4A2829F9A61D092F2191A5D3BF7C289E";

/// Difficulty constant pushed into the coinbase input script
const GENESIS_SCRIPT_BITS: u32 = 486_604_799;

/// Compact difficulty bits of every genesis header
pub const GENESIS_BITS: u32 = 0x1e0ffff0;

/// Genesis block version
pub const GENESIS_VERSION: u32 = 1;

/// Merkle root shared by all three networks (the coinbase is identical;
/// only header timestamp and nonce differ)
pub const GENESIS_MERKLE_ROOT: &str =
    "126c3d71eb90bf8c2cb3a461592634c36810d49ee8ed7a9012261c711bc3f2b6";

/// OP_CHECKSIG opcode terminating the pay-to-pubkey output script
const OP_CHECKSIG: u8 = 0xAC;

/// Build the genesis block for the given header timestamp and nonce
///
/// Deterministic and side-effect free: the same inputs always produce a
/// byte-for-byte identical block.
pub fn build_genesis(timestamp: u64, nonce: u64) -> Block {
    let payload = GENESIS_PAYLOAD.as_bytes();
    let mut script_sig = Vec::with_capacity(5 + payload.len());
    script_sig.extend_from_slice(&GENESIS_SCRIPT_BITS.to_le_bytes());
    script_sig.push(4);
    script_sig.extend_from_slice(payload);

    let pubkey = hex::decode(GENESIS_PUBKEY).expect("genesis public key constant is valid hex");
    let mut script_pubkey = Vec::with_capacity(2 + pubkey.len());
    script_pubkey.push(pubkey.len() as u8);
    script_pubkey.extend_from_slice(&pubkey);
    script_pubkey.push(OP_CHECKSIG);

    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxInput {
            prev_tx_hash: Hash::zero(),
            output_index: COINBASE_OUTPUT_INDEX,
            script_sig,
        }],
        outputs: vec![TxOutput {
            amount: 0,
            script_pubkey,
        }],
        lock_time: 0,
    };

    let tx_hashes = vec![coinbase.hash()];
    let merkle_root = compute_merkle_root(&tx_hashes);

    let header = BlockHeader::new(
        GENESIS_VERSION,
        Hash::zero(),
        merkle_root,
        timestamp,
        GENESIS_BITS,
        nonce,
    );

    Block::new(header, vec![coinbase])
}

/// Verify a constructed genesis block against the network's expected
/// hash and merkle root
///
/// Returns a fatal [`ParamsError`] on mismatch; there is no retry or
/// fallback since the computation is deterministic.
pub fn verify_genesis(
    network: Network,
    block: &Block,
    expected_hash: &Hash,
    expected_merkle: &Hash,
) -> Result<(), ParamsError> {
    let computed_merkle = block.header.merkle_root;
    if computed_merkle != *expected_merkle {
        return Err(ParamsError::GenesisMerkleMismatch {
            network,
            expected: *expected_merkle,
            computed: computed_merkle,
        });
    }

    let computed_hash = block.hash();
    if computed_hash != *expected_hash {
        return Err(ParamsError::GenesisHashMismatch {
            network,
            expected: *expected_hash,
            computed: computed_hash,
        });
    }

    Ok(())
}
