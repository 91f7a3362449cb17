//! Consensus module - Block, header and transaction structures

mod block;

pub use block::*;
