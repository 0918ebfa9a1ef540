use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, StdError, StdResult, Storage};
use cw_storage_plus::{Item, Map};
use thiserror::Error;

pub mod merkle;

use merkle::{leaf_hash, verify_proof, HASH_LENGTH};

pub const WHITELIST_MEMBERS_KEY: &str = "whitelist";
pub const WHITELIST_ROOT_KEY: &str = "whitelist_root";
pub const ALLOWLIST_MEMBERS_KEY: &str = "allowlist";
pub const ALLOWLIST_ROOT_KEY: &str = "allowlist_root";

#[derive(Error, Debug, PartialEq)]
pub enum AccessListError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("Invalid merkle root, expected {expected} bytes got {actual}")]
    InvalidMerkleRoot { expected: usize, actual: usize },

    #[error("Empty address list")]
    EmptyAddressList {},
}

/// Membership mechanism a deployment accepts for its lists.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Authorizer {
    /// Wallet was added by the admin with an explicit list update
    ExplicitSet,
    /// Wallet supplies a proof against the committed merkle root
    MerkleCommitted,
}

impl Authorizer {
    pub fn authorize(
        &self,
        store: &dyn Storage,
        list: &AccessList,
        address: &Addr,
        proof: &[HexBinary],
    ) -> StdResult<bool> {
        match self {
            Authorizer::ExplicitSet => list.is_member(store, address),
            Authorizer::MerkleCommitted => list.has_valid_proof(store, address, proof),
        }
    }
}

/// Returns true if any of the enabled authorizers accepts the address.
pub fn authorize_any(
    authorizers: &[Authorizer],
    store: &dyn Storage,
    list: &AccessList,
    address: &Addr,
    proof: &[HexBinary],
) -> StdResult<bool> {
    for authorizer in authorizers {
        if authorizer.authorize(store, list, address, proof)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// A list of wallets that can be populated explicitly or committed to with a
/// merkle root. Both sources are kept side by side.
pub struct AccessList<'a> {
    pub members: Map<'a, Addr, bool>,
    pub merkle_root: Item<'a, HexBinary>,
}

impl<'a> AccessList<'a> {
    pub const fn new(members_key: &'a str, root_key: &'a str) -> Self {
        AccessList {
            members: Map::new(members_key),
            merkle_root: Item::new(root_key),
        }
    }

    /// Adds members to the explicit set. Existing members are left as is,
    /// duplicates in the input are allowed.
    pub fn add_members(
        &self,
        store: &mut dyn Storage,
        members: &[Addr],
    ) -> Result<u32, AccessListError> {
        if members.is_empty() {
            return Err(AccessListError::EmptyAddressList {});
        }
        let mut added = 0u32;
        for member in members {
            if !self.members.has(store, member.clone()) {
                self.members.save(store, member.clone(), &true)?;
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn is_member(&self, store: &dyn Storage, address: &Addr) -> StdResult<bool> {
        Ok(self
            .members
            .may_load(store, address.clone())?
            .unwrap_or(false))
    }

    /// Replaces the committed root. Proofs generated for the previous root
    /// stop verifying immediately.
    pub fn set_merkle_root(
        &self,
        store: &mut dyn Storage,
        root: HexBinary,
    ) -> Result<(), AccessListError> {
        if root.len() != HASH_LENGTH {
            return Err(AccessListError::InvalidMerkleRoot {
                expected: HASH_LENGTH,
                actual: root.len(),
            });
        }
        self.merkle_root.save(store, &root)?;
        Ok(())
    }

    pub fn load_merkle_root(&self, store: &dyn Storage) -> StdResult<Option<HexBinary>> {
        self.merkle_root.may_load(store)
    }

    pub fn has_valid_proof(
        &self,
        store: &dyn Storage,
        address: &Addr,
        proof: &[HexBinary],
    ) -> StdResult<bool> {
        match self.merkle_root.may_load(store)? {
            Some(root) => Ok(verify_proof(root.as_slice(), proof, leaf_hash(address))),
            None => Ok(false),
        }
    }
}
