//! Per-network chain parameter sets
//!
//! `ChainParams` is the full constant record for one network. The main
//! network is the base definition; test, regtest and unittest are built
//! by taking a fully constructed parent and patching only the fields they
//! override, so untouched fields always inherit the parent's values.
//! Construction re-verifies the genesis block and the table invariants;
//! a mismatch is unrecoverable.

use crate::constants::{CENT, MAX_MONEY};
use crate::consensus::Block;
use crate::crypto::{double_hash, Hash};
use crate::p2p::{convert_fixed_seeds, mainnet_dns_seeds, DnsSeed, SeedAddress, MAINNET_FIXED_SEEDS};
use crate::params::{
    build_genesis, verify_genesis, CheckpointData, ParamsError, GENESIS_MERKLE_ROOT, HEIGHT_NEVER,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Expected main network genesis hash
pub const MAIN_GENESIS_HASH: &str =
    "ca71a7375916bef4a854a767968f1878d722e9da43faacef639361e5d8ba9cc4";
/// Expected test network genesis hash
pub const TEST_GENESIS_HASH: &str =
    "0c5f1d15ae6365ca200349a0700b76b929e4de71e8f75186b8bade0ac1f3edc5";
/// Expected regression test genesis hash
pub const REGTEST_GENESIS_HASH: &str =
    "de2ba5adced4c517ecc8cb3e668bd99ddf48661751f49b5fb96118c2764f502d";

const MAIN_ALERT_KEY: &str = "045C768082BA9915AC601BA40042515E49A93BA0C6A67D2544E64ECF83CB439827316752E282C5D32E28438B4969864289B3F7C167A667F523C86E699DF07C707C";
const TEST_ALERT_KEY: &str = "04E85520110741CAC24F2AF284A2475E6BB1036909EFF6C7525374063E5EF285276F3A93CE86EEE634EA698AFA1F154823B448042C75F4677F5E950870623553F7";

const MAIN_SPORK_KEY: &str = "0480B1C93232E9E0E265F3065A3995E88524D4A867B5D392D765011AB820683791AB5AFD39504F9DC95FCB6D82DEF754B85E2703BFE820812DE227E74AB7A49B4C";
const TEST_SPORK_KEY: &str = "049A34ED917AFA29D3B4AFD5B468B4770C3772CEBFE32239B98974AB9F71A1AAE3C6EF1ED5F162778DB14234A8EED4E507A2B9CB46231C769CA3843EF31A7E823F";

/// Fixed address used by the obfuscation mixing pool
const OBFUSCATION_POOL_ADDRESS: &str = "XQJnvapzVGzUjNb9bGUwviU6fm3DwFBz4N";

/// Network variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Main,
    Test,
    Regtest,
    UnitTest,
}

impl Network {
    /// Human-readable network id string
    pub fn id(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
            Network::UnitTest => "unittest",
        }
    }

    /// Parse a network id string, `None` if unrecognized
    pub fn from_id(id: &str) -> Option<Network> {
        match id {
            "main" => Some(Network::Main),
            "test" => Some(Network::Test),
            "regtest" => Some(Network::Regtest),
            "unittest" => Some(Network::UnitTest),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Base58 encoding prefixes for one network
///
/// Each prefix is fixed-length and distinct, so encoded payload types are
/// visually distinguishable within the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    /// Public-key addresses
    pub pubkey_address: [u8; 1],
    /// Script addresses
    pub script_address: [u8; 1],
    /// Private-key (WIF) encoding
    pub secret_key: [u8; 1],
    /// Extended public keys (BIP32)
    pub ext_public_key: [u8; 4],
    /// Extended private keys (BIP32)
    pub ext_secret_key: [u8; 4],
    /// Hierarchical-derivation coin type (BIP44)
    pub ext_coin_type: [u8; 4],
}

/// The complete consensus/network/encoding constant set for one network
///
/// Immutable after construction; only the unit-test variant, wrapped in
/// [`UnitTestParams`], exposes any mutation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParams {
    // Identity
    pub network: Network,
    pub network_id: &'static str,
    /// 4-byte magic prefix delimiting wire messages
    pub message_start: [u8; 4],
    pub default_port: u16,

    // Key material
    pub alert_pubkey: Vec<u8>,
    pub spork_key: &'static str,
    pub obfuscation_pool_dummy_address: &'static str,

    // Consensus thresholds
    /// Proof-of-work ceiling as a 256-bit target, big-endian
    pub pow_limit: [u8; 32],
    pub subsidy_halving_interval: u32,
    pub max_reorganization_depth: u32,
    pub enforce_block_upgrade_majority: u32,
    pub reject_block_outdated_majority: u32,
    pub to_check_block_upgrade_majority: u32,
    pub miner_threads: u32,
    /// Retarget timespan in seconds
    pub target_timespan: u64,
    /// Target block spacing in seconds
    pub target_spacing: u64,
    /// Confirmations before coinbase/stake outputs are spendable
    pub maturity: u32,
    pub masternode_count_drift: u32,
    pub max_money_out: u64,

    // Height or time based activations
    pub last_pow_block: u32,
    pub modifier_update_block: u32,
    pub zerocoin_start_height: u32,
    pub zerocoin_start_time: u64,
    pub block_enforce_serial_range: u32,
    pub block_recalculate_accumulators: u32,
    pub block_first_fraudulent: u32,
    pub block_last_good_checkpoint: u32,
    pub block_enforce_invalid_utxo: u32,
    /// Invalid coins filtered through exchanges that remain spendable;
    /// zero on every network today, kept explicit
    pub invalid_amount_filtered: u64,
    pub block_zerocoin_v2: u32,

    // Genesis
    pub genesis: Block,
    pub genesis_hash: Hash,

    // Seeds
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedAddress>,

    // Encoding
    pub base58_prefixes: Base58Prefixes,

    // Behavioral flags
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,

    // Obfuscation / budget
    pub pool_max_transactions: u32,
    pub start_masternode_payments: u64,
    pub budget_fee_confirmations: u32,

    // Zerocoin economics
    pub max_zerocoin_spends_per_transaction: u32,
    pub min_zerocoin_mint_fee: u64,
    pub mint_required_confirmations: u32,
    pub required_accumulation: u32,
    pub default_security_level: u32,
    pub zerocoin_header_version: u32,
    pub zerocoin_required_stake_depth: u32,

    // Checkpoints
    pub checkpoints: CheckpointData,
}

/// All-ones 256-bit target shifted right by `shift` bits
fn pow_limit(shift: u32) -> [u8; 32] {
    let mut target = [0xFFu8; 32];
    let byte_shift = (shift / 8) as usize;
    let bit_shift = shift % 8;
    for byte in target.iter_mut().take(byte_shift) {
        *byte = 0;
    }
    if byte_shift < 32 {
        target[byte_shift] = 0xFF >> bit_shift;
    }
    target
}

impl ChainParams {
    /// Build the main network parameters (the base definition)
    pub fn main() -> Result<ChainParams, ParamsError> {
        let genesis = build_genesis(1552143600, 325898);
        let genesis_time = genesis.header.timestamp;

        let params = ChainParams {
            network: Network::Main,
            network_id: "main",
            // Rarely used upper ASCII, not valid as UTF-8, and produces a
            // large 4-byte int at any alignment
            message_start: [0x2b, 0xc4, 0xa4, 0x3f],
            default_port: 46130,

            alert_pubkey: hex::decode(MAIN_ALERT_KEY)
                .expect("alert key constant is valid hex"),
            spork_key: MAIN_SPORK_KEY,
            obfuscation_pool_dummy_address: OBFUSCATION_POOL_ADDRESS,

            // Starting difficulty is 1 / 2^12
            pow_limit: pow_limit(20),
            subsidy_halving_interval: 1_050_000,
            max_reorganization_depth: 100,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 1,
            target_timespan: 60,
            target_spacing: 60,
            maturity: 100,
            masternode_count_drift: 20,
            max_money_out: MAX_MONEY,

            last_pow_block: 300,
            modifier_update_block: 1,
            zerocoin_start_height: HEIGHT_NEVER,
            zerocoin_start_time: 1_893_456_000, // 01/01/2030 @ 12:00am (UTC)
            block_enforce_serial_range: HEIGHT_NEVER,
            block_recalculate_accumulators: 9_080_000,
            block_first_fraudulent: HEIGHT_NEVER,
            block_last_good_checkpoint: HEIGHT_NEVER,
            block_enforce_invalid_utxo: HEIGHT_NEVER,
            invalid_amount_filtered: 0,
            block_zerocoin_v2: HEIGHT_NEVER,

            genesis_hash: genesis.hash(),
            genesis,

            dns_seeds: mainnet_dns_seeds(),
            fixed_seeds: convert_fixed_seeds(MAINNET_FIXED_SEEDS),

            // Addresses start with 'X', scripts with 'y'
            base58_prefixes: Base58Prefixes {
                pubkey_address: [75],
                script_address: [140],
                secret_key: [77],
                // BIP32 'xpub' / 'xprv' (Bitcoin defaults)
                ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
                ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
                ext_coin_type: [0x80, 0x00, 0x00, 0x77],
            },

            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: true,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,

            pool_max_transactions: 3,
            start_masternode_payments: genesis_time + 14400,
            budget_fee_confirmations: 6,

            max_zerocoin_spends_per_transaction: 7,
            min_zerocoin_mint_fee: CENT,
            mint_required_confirmations: 20,
            required_accumulation: 1,
            default_security_level: 100,
            zerocoin_header_version: 4,
            zerocoin_required_stake_depth: 200,

            checkpoints: CheckpointData::mainnet(),
        };

        params.verify(MAIN_GENESIS_HASH)
    }

    /// Build the test network parameters as main plus overrides
    pub fn test() -> Result<ChainParams, ParamsError> {
        let mut params = ChainParams::main()?;
        params.network = Network::Test;
        params.network_id = "test";
        params.message_start = [0xc3, 0x3d, 0xb1, 0x2b];
        params.alert_pubkey =
            hex::decode(TEST_ALERT_KEY).expect("alert key constant is valid hex");
        params.default_port = 47130;
        params.enforce_block_upgrade_majority = 51;
        params.reject_block_outdated_majority = 75;
        params.to_check_block_upgrade_majority = 100;
        params.miner_threads = 0;
        params.last_pow_block = 200;
        params.maturity = 30;
        params.masternode_count_drift = 4;
        params.block_enforce_serial_range = 1;
        params.block_recalculate_accumulators = 9_908_000;
        params.block_first_fraudulent = 9_891_737;
        params.block_last_good_checkpoint = 9_891_730;
        params.block_enforce_invalid_utxo = 9_902_850;
        params.invalid_amount_filtered = 0;

        // Later timestamp so the testnet chain can start after main
        params.genesis = build_genesis(1552143601, 107220);
        params.genesis_hash = params.genesis.hash();
        params.start_masternode_payments = params.genesis.header.timestamp + 14400;

        params.fixed_seeds.clear();
        params.dns_seeds.clear();

        params.base58_prefixes = Base58Prefixes {
            pubkey_address: [127],
            script_address: [12],
            secret_key: [113],
            // BIP32 'DRKV' / 'DRKP'
            ext_public_key: [0x3a, 0x80, 0x61, 0xa0],
            ext_secret_key: [0x3a, 0x80, 0x58, 0x37],
            // Testnet coin type is '1' for all coins
            ext_coin_type: [0x80, 0x00, 0x00, 0x01],
        };

        params.require_standard = false;
        params.testnet_to_be_deprecated_field_rpc = true;

        params.pool_max_transactions = 2;
        params.spork_key = TEST_SPORK_KEY;
        // Short finalization window on testnet
        params.budget_fee_confirmations = 3;

        params.checkpoints = CheckpointData::testnet();

        params.verify(TEST_GENESIS_HASH)
    }

    /// Build the regression test parameters as test plus overrides
    pub fn regtest() -> Result<ChainParams, ParamsError> {
        let mut params = ChainParams::test()?;
        params.network = Network::Regtest;
        params.network_id = "regtest";
        params.message_start = [0xc1, 0x2f, 0xb1, 0xda];
        params.default_port = 48130;
        params.subsidy_halving_interval = 1500;
        params.enforce_block_upgrade_majority = 750;
        params.reject_block_outdated_majority = 950;
        params.to_check_block_upgrade_majority = 1000;
        params.miner_threads = 1;
        params.target_timespan = 24 * 60 * 60;
        params.target_spacing = 60;
        // Near-trivial difficulty for instant block generation
        params.pow_limit = pow_limit(1);

        params.genesis = build_genesis(1552143602, 618958);
        params.genesis_hash = params.genesis.hash();
        params.start_masternode_payments = params.genesis.header.timestamp + 14400;

        params.mining_requires_peers = false;
        params.allow_min_difficulty_blocks = true;
        params.default_consistency_checks = true;
        params.require_standard = false;
        params.mine_blocks_on_demand = true;
        params.testnet_to_be_deprecated_field_rpc = false;

        params.checkpoints = CheckpointData::regtest();

        params.verify(REGTEST_GENESIS_HASH)
    }

    /// Build the parameters for any network
    ///
    /// The unit-test variant is frozen by this path; callers that need
    /// its mutation surface go through [`UnitTestParams::build`].
    pub fn for_network(network: Network) -> Result<ChainParams, ParamsError> {
        match network {
            Network::Main => ChainParams::main(),
            Network::Test => ChainParams::test(),
            Network::Regtest => ChainParams::regtest(),
            Network::UnitTest => Ok(UnitTestParams::build()?.into_inner()),
        }
    }

    /// Re-verify construction invariants against the expected genesis hash
    fn verify(self, expected_hash: &str) -> Result<ChainParams, ParamsError> {
        let expected_hash =
            Hash::from_hex(expected_hash).expect("genesis hash constant is valid hex");
        let expected_merkle =
            Hash::from_hex(GENESIS_MERKLE_ROOT).expect("merkle root constant is valid hex");
        verify_genesis(self.network, &self.genesis, &expected_hash, &expected_merkle)?;

        // Checked independently of the genesis assertion so a discrepancy
        // between the two constant tables is caught either way
        if self.checkpoints.hash_at(0) != Some(&self.genesis_hash) {
            return Err(ParamsError::CheckpointGenesisMismatch {
                network: self.network,
            });
        }

        if !(self.enforce_block_upgrade_majority <= self.reject_block_outdated_majority
            && self.reject_block_outdated_majority <= self.to_check_block_upgrade_majority)
        {
            return Err(ParamsError::MajorityThresholdsOutOfOrder {
                network: self.network,
                enforce: self.enforce_block_upgrade_majority,
                reject: self.reject_block_outdated_majority,
                window: self.to_check_block_upgrade_majority,
            });
        }

        Ok(self)
    }
}

/// Unit-test parameters: main network values with seeds cleared and
/// relaxed flags, plus the only post-construction mutation surface in the
/// registry
///
/// Callers mutating a live set are expected to run single-threaded or
/// serialize access externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTestParams(ChainParams);

impl UnitTestParams {
    /// Build the unit-test variant from the main network definition
    pub fn build() -> Result<UnitTestParams, ParamsError> {
        let mut params = ChainParams::main()?;
        params.network = Network::UnitTest;
        params.network_id = "unittest";
        params.default_port = 49130;
        params.fixed_seeds.clear();
        params.dns_seeds.clear();

        params.mining_requires_peers = false;
        params.default_consistency_checks = true;
        params.allow_min_difficulty_blocks = false;
        params.mine_blocks_on_demand = true;

        // Shares main's genesis and checkpoint table
        Ok(UnitTestParams(params))
    }

    /// Consume the wrapper, freezing the current values
    pub fn into_inner(self) -> ChainParams {
        self.0
    }

    // Published setters to allow changing values in unit test cases

    pub fn set_subsidy_halving_interval(&mut self, interval: u32) {
        self.0.subsidy_halving_interval = interval;
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) {
        self.0.enforce_block_upgrade_majority = majority;
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) {
        self.0.reject_block_outdated_majority = majority;
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, majority: u32) {
        self.0.to_check_block_upgrade_majority = majority;
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.0.default_consistency_checks = enabled;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) {
        self.0.allow_min_difficulty_blocks = allowed;
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) {
        self.0.skip_proof_of_work_check = skip;
    }
}

impl Deref for UnitTestParams {
    type Target = ChainParams;

    fn deref(&self) -> &ChainParams {
        &self.0
    }
}

/// Decode a Base58Check address and return its version byte
///
/// Expects the 25-byte payload layout (version + 20-byte hash + 4-byte
/// SHA-256d checksum) used by UserX addresses.
pub fn address_version_byte(address: &str) -> Result<u8, ParamsError> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|e| ParamsError::InvalidAddress(e.to_string()))?;

    if decoded.len() != 25 {
        return Err(ParamsError::InvalidAddress(format!(
            "expected 25 bytes, got {}",
            decoded.len()
        )));
    }

    let (payload, checksum) = decoded.split_at(21);
    let expected = double_hash(payload);
    if checksum != &expected.0[0..4] {
        return Err(ParamsError::InvalidAddress("bad checksum".to_string()));
    }

    Ok(payload[0])
}
