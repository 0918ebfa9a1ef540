use cosmwasm_std::{Addr, HexBinary};
use sha3::{Digest, Keccak256};

pub const HASH_LENGTH: usize = 32;

pub type Hash = [u8; HASH_LENGTH];

/// Leaf committed for a wallet: keccak256 of the address bytes.
pub fn leaf_hash(address: &Addr) -> Hash {
    keccak(&[address.as_bytes()])
}

/// Hashes two nodes after ordering them, so a proof does not need to carry
/// the side each sibling sits on.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    if a <= b {
        keccak(&[a.as_slice(), b.as_slice()])
    } else {
        keccak(&[b.as_slice(), a.as_slice()])
    }
}

/// Folds `proof` into `leaf` and compares the result with `root`.
/// Malformed roots or proof elements are treated as a failed proof.
pub fn verify_proof(root: &[u8], proof: &[HexBinary], leaf: Hash) -> bool {
    if root.len() != HASH_LENGTH {
        return false;
    }
    let mut computed = leaf;
    for node in proof {
        let node: Hash = match node.as_slice().try_into() {
            Ok(node) => node,
            Err(_) => return false,
        };
        computed = hash_pair(&computed, &node);
    }
    computed.as_slice() == root
}

fn keccak(parts: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; HASH_LENGTH];
    out.copy_from_slice(&hasher.finalize());
    out
}
