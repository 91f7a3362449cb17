//! UserX Blockchain Node
//!
//! Demo entry point: selects a network, verifies the genesis block as a
//! side effect of construction, and prints the active parameter set.

use std::process::ExitCode;
use userx_core::params::{params, select_params_from_id, zerocoin_params};

fn main() -> ExitCode {
    let network_id = std::env::args().nth(1).unwrap_or_else(|| "main".to_string());

    match select_params_from_id(&network_id) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("unknown network id: {}", network_id);
            eprintln!("usage: userx-node [main|test|regtest|unittest]");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("failed to build chain parameters: {}", err);
            return ExitCode::FAILURE;
        }
    }

    let active = params();

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║                  USERX BLOCKCHAIN NODE                   ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();
    println!("Network:       {}", active.network_id);
    println!("Magic:         {}", hex::encode(active.message_start));
    println!("Default Port:  {}", active.default_port);
    println!();
    println!("Genesis Block Information:");
    println!("  Hash:        {}", active.genesis_hash);
    println!("  Merkle Root: {}", active.genesis.header.merkle_root);
    println!("  Timestamp:   {}", active.genesis.header.timestamp);
    println!("  Difficulty:  0x{:08x}", active.genesis.header.difficulty_target);
    println!("  Nonce:       {}", active.genesis.header.nonce);
    println!();
    println!("Consensus:");
    println!("  Halving Interval:  {}", active.subsidy_halving_interval);
    println!("  Target Spacing:    {}s", active.target_spacing);
    println!("  Maturity:          {}", active.maturity);
    println!(
        "  Majorities:        {}/{}/{}",
        active.enforce_block_upgrade_majority,
        active.reject_block_outdated_majority,
        active.to_check_block_upgrade_majority
    );
    println!();
    println!("Seeds:");
    println!("  DNS:   {}", active.dns_seeds.len());
    println!("  Fixed: {}", active.fixed_seeds.len());
    println!();

    let zerocoin = zerocoin_params(false);
    println!(
        "Zerocoin: {}-bit modulus, security level {}",
        zerocoin.modulus_bit_length, zerocoin.security_level
    );

    ExitCode::SUCCESS
}
