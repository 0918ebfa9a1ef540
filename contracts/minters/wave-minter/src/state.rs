use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::{Item, Map};

use minter_types::{CollectionDetails, Config, TokenDetails, Wave};
use whitelist_types::{
    AccessList, ALLOWLIST_MEMBERS_KEY, ALLOWLIST_ROOT_KEY, WHITELIST_MEMBERS_KEY,
    WHITELIST_ROOT_KEY,
};

pub const CONFIG: Item<Config> = Item::new("config");
pub const COLLECTION: Item<CollectionDetails> = Item::new("collection");
pub const TOKEN_DETAILS: Item<TokenDetails> = Item::new("token_details");
// One way switch, only ever set to true
pub const SALE_OPEN: Item<bool> = Item::new("sale_open");
pub const ACTIVE_WAVE: Item<Wave> = Item::new("active_wave");
// Items issued by this contract. Next token id is total + 1
pub const TOTAL_MINTED: Item<u32> = Item::new("total_minted");

pub const WHITELIST: AccessList = AccessList::new(WHITELIST_MEMBERS_KEY, WHITELIST_ROOT_KEY);
pub const ALLOWLIST: AccessList = AccessList::new(ALLOWLIST_MEMBERS_KEY, ALLOWLIST_ROOT_KEY);

// Free single mint entitlements. Value is true once claimed
pub const CLAIMLIST: Map<Addr, bool> = Map::new("claimlist");

pub const MINTERS_KEY: &str = "minters";
pub const MINTERS_GENERATION_KEY: &str = "minters_generation";

pub type Generation = u32;

/// Per wallet mint counters. Counters live under the current generation so
/// clearing them is a single write instead of a range delete.
pub struct WalletLedger<'a> {
    counts: Map<'a, (Generation, Addr), u32>,
    generation: Item<'a, Generation>,
}

impl<'a> WalletLedger<'a> {
    pub const fn new(counts_key: &'a str, generation_key: &'a str) -> Self {
        WalletLedger {
            counts: Map::new(counts_key),
            generation: Item::new(generation_key),
        }
    }

    pub fn generation(&self, store: &dyn Storage) -> StdResult<Generation> {
        Ok(self.generation.may_load(store)?.unwrap_or_default())
    }

    pub fn minted(&self, store: &dyn Storage, address: &Addr) -> StdResult<u32> {
        let generation = self.generation(store)?;
        Ok(self
            .counts
            .may_load(store, (generation, address.clone()))?
            .unwrap_or_default())
    }

    pub fn save_minted(
        &self,
        store: &mut dyn Storage,
        address: &Addr,
        minted: u32,
    ) -> StdResult<()> {
        let generation = self.generation(store)?;
        self.counts.save(store, (generation, address.clone()), &minted)
    }

    /// Starts a fresh generation, every wallet reads as not minted afterwards.
    pub fn clear(&self, store: &mut dyn Storage) -> StdResult<Generation> {
        let generation = self.generation(store)? + 1;
        self.generation.save(store, &generation)?;
        Ok(generation)
    }
}

pub const WALLET_LEDGER: WalletLedger = WalletLedger::new(MINTERS_KEY, MINTERS_GENERATION_KEY);
