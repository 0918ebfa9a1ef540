use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, HexBinary, Timestamp};
use cw_ownable::{Action, Ownership};
use minter_types::{
    CollectionDetails, Config, MintLimit, Stage, TokenDetails, WalletStage, Wave, WaveID,
};
use whitelist_types::Authorizer;

#[cw_serde]
pub struct WaveMinterInit {
    pub admin: String,
    pub payment_collector: Option<String>,
    pub mint_price: Coin,
    pub max_supply: u32,
    pub mint_limit: MintLimit,
    // Defaults to both explicit lists and merkle proofs
    pub authorizers: Option<Vec<Authorizer>>,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub collection_details: CollectionDetails,
    pub token_details: TokenDetails,
    pub init: WaveMinterInit,
}

#[cw_serde]
pub enum ExecuteMsg {
    Mint {
        count: u32,
        // Only checked during the whitelist and allowlist phases
        proof: Option<Vec<HexBinary>>,
    },
    Claim {},
    MintAdmin {
        recipient: String,
    },
    SetSaleOpen {},
    StartWave {
        whitelist_start: Timestamp,
        allowlist_start: Timestamp,
        public_start: Timestamp,
        supply: u32,
        mint_price: Option<Coin>,
    },
    // Installs a wave that can sell the rest of the collection
    SetSaleStart {
        whitelist_start: Timestamp,
        allowlist_start: Timestamp,
        public_start: Timestamp,
    },
    SetWhitelist {
        addresses: Vec<String>,
    },
    SetAllowlist {
        addresses: Vec<String>,
    },
    SetMerkleRootWhitelist {
        root: HexBinary,
    },
    SetMerkleRootAllowlist {
        root: HexBinary,
    },
    AddToClaimlist {
        addresses: Vec<String>,
    },
    ClearMinters {},
    SetBaseUri {
        base_uri: String,
    },
    UpdateOwnership(Action),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Stage)]
    Stage {},
    #[returns(InfoResponse)]
    Info {},
    #[returns(u32)]
    AvailableToMint { address: String },
    #[returns(bool)]
    IsWhitelisted {
        address: String,
        proof: Option<Vec<HexBinary>>,
    },
    #[returns(bool)]
    IsAllowlisted {
        address: String,
        proof: Option<Vec<HexBinary>>,
    },
    #[returns(WalletStage)]
    WalletStage {
        address: String,
        whitelist_proof: Option<Vec<HexBinary>>,
        allowlist_proof: Option<Vec<HexBinary>>,
    },
    #[returns(MintRecordResponse)]
    MintRecord { address: String },
    #[returns(ClaimStatus)]
    ClaimStatus { address: String },
    #[returns(Config)]
    Config {},
    #[returns(CollectionDetails)]
    Collection {},
    #[returns(TokenDetails)]
    TokenDetails {},
    #[returns(Option<Wave>)]
    Wave {},
    #[returns(MerkleRootsResponse)]
    MerkleRoots {},
    #[returns(Ownership<Addr>)]
    Ownership {},
}

#[cw_serde]
pub struct InfoResponse {
    pub stage: Stage,
    pub sale_open: bool,
    pub total_minted: u32,
    pub max_supply: u32,
    pub wave_id: Option<WaveID>,
    pub wave_supply: u32,
    pub wave_minted: u32,
    pub max_mint_count: u32,
    pub mint_price: Coin,
}

#[cw_serde]
pub struct MintRecordResponse {
    pub minted: u32,
    pub has_minted: bool,
}

#[cw_serde]
pub struct MerkleRootsResponse {
    pub whitelist: Option<HexBinary>,
    pub allowlist: Option<HexBinary>,
}

#[cw_serde]
pub enum ClaimStatus {
    NotListed,
    Claimable,
    Claimed,
}
