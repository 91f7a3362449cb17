//! Seed node data and conversion
//!
//! Hardcoded bootstrap peers for initial discovery, both as DNS hostnames
//! and as a compiled binary table of raw addresses. Fixed seeds are
//! deliberately stamped with a stale random "last seen" time so the
//! address manager prefers fresher peers learned from the network.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

/// One week in seconds
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// A compiled seed record: raw IPv6 (or v4-mapped) address plus port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

/// A usable peer address with a synthetic last-seen timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    /// UNIX timestamp; always between one and two weeks in the past
    pub last_seen: u64,
}

/// A DNS seed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

const fn seed_v4(a: u8, b: u8, c: u8, d: u8, port: u16) -> SeedSpec {
    SeedSpec {
        addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, a, b, c, d],
        port,
    }
}

/// Fixed seeds compiled into the binary for the main network
pub const MAINNET_FIXED_SEEDS: &[SeedSpec] = &[
    seed_v4(149, 28, 44, 191, 46130),
    seed_v4(45, 76, 142, 18, 46130),
    seed_v4(104, 238, 186, 77, 46130),
    seed_v4(95, 179, 201, 140, 46130),
    seed_v4(207, 148, 76, 9, 46130),
    seed_v4(80, 240, 23, 166, 46130),
    seed_v4(136, 244, 105, 31, 46130),
    seed_v4(217, 69, 5, 218, 46130),
];

/// DNS seeds for the main network
pub fn mainnet_dns_seeds() -> Vec<DnsSeed> {
    vec![
        DnsSeed {
            name: "userx.online",
            host: "dnsseed.userx.online",
        },
        DnsSeed {
            name: "seed1.userx.online",
            host: "seed1.userx.online",
        },
        DnsSeed {
            name: "seed2.userx.online",
            host: "seed2.userx.online",
        },
        DnsSeed {
            name: "seed3.userx.online",
            host: "seed3.userx.online",
        },
    ]
}

/// Convert a compiled seed table into usable address records
///
/// A node only ever connects to one or two fixed seeds, because once it
/// connects it receives a pile of addresses with newer timestamps. Each
/// seed is given a random last-seen time of between one and two weeks
/// ago. Pure structural mapping otherwise: no filtering, no
/// deduplication, order preserved.
pub fn convert_fixed_seeds(seeds: &[SeedSpec]) -> Vec<SeedAddress> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut rng = rand::thread_rng();

    seeds
        .iter()
        .map(|seed| {
            let ip = Ipv6Addr::from(seed.addr);
            let ip = match ip.to_ipv4_mapped() {
                Some(v4) => IpAddr::V4(v4),
                None => IpAddr::V6(ip),
            };
            SeedAddress {
                addr: SocketAddr::new(ip, seed.port),
                last_seen: now.saturating_sub(ONE_WEEK + rng.gen_range(0..ONE_WEEK)),
            }
        })
        .collect()
}
