//! P2P bootstrap module - compiled seed data and address conversion

mod seeds;

pub use seeds::*;
