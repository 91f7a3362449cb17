//! Cryptography module - SHA-256d hashing, Merkle trees, big-integer parsing

mod bignum;
mod hash;
mod merkle;

pub use bignum::*;
pub use hash::*;
pub use merkle::*;
