//! Merkle tree construction
//!
//! Used for computing transaction merkle roots in blocks.

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of hashes
///
/// If the list is empty, returns zero hash.
/// If odd number of elements, duplicates the last element.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    if hashes.is_empty() {
        return Hash::zero();
    }

    if hashes.len() == 1 {
        return hashes[0];
    }

    let mut current_level: Vec<Hash> = hashes.to_vec();

    while current_level.len() > 1 {
        // If odd number, duplicate last
        if current_level.len() % 2 == 1 {
            current_level.push(*current_level.last().unwrap());
        }

        let mut next_level = Vec::with_capacity(current_level.len() / 2);

        for chunk in current_level.chunks(2) {
            let combined = hash_pair(&chunk[0], &chunk[1]);
            next_level.push(combined);
        }

        current_level = next_level;
    }

    current_level[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash_bytes;

    fn make_hashes(n: usize) -> Vec<Hash> {
        (0..n).map(|i| hash_bytes(&i.to_le_bytes())).collect()
    }

    #[test]
    fn test_empty_merkle_root() {
        let root = compute_merkle_root(&[]);
        assert_eq!(root, Hash::zero());
    }

    #[test]
    fn test_single_element() {
        let hashes = make_hashes(1);
        let root = compute_merkle_root(&hashes);
        assert_eq!(root, hashes[0]);
    }

    #[test]
    fn test_two_elements() {
        let hashes = make_hashes(2);
        let root = compute_merkle_root(&hashes);
        let expected = hash_pair(&hashes[0], &hashes[1]);
        assert_eq!(root, expected);
    }

    #[test]
    fn test_merkle_root_deterministic() {
        let hashes = make_hashes(10);
        let root1 = compute_merkle_root(&hashes);
        let root2 = compute_merkle_root(&hashes);
        assert_eq!(root1, root2);
    }

    #[test]
    fn test_odd_number_of_elements() {
        // Odd levels duplicate the trailing hash
        let hashes = make_hashes(3);
        let root = compute_merkle_root(&hashes);

        let left = hash_pair(&hashes[0], &hashes[1]);
        let right = hash_pair(&hashes[2], &hashes[2]);
        assert_eq!(root, hash_pair(&left, &right));
    }
}
