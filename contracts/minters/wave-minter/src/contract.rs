#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, HexBinary,
    MessageInfo, Response, StdResult, Storage, Timestamp, Uint128,
};
use cw2::set_contract_version;
use cw_utils::{may_pay, maybe_addr, must_pay, nonpayable};
use minter_types::utils::{generate_create_denom_msg, generate_mint_message};
use minter_types::{
    current_stage, wave_phase, CollectionDetails, Config, ConfigurationError, Stage,
    TokenDetails, WalletStage, Wave,
};
use whitelist_types::{authorize_any, AccessList, AccessListError, Authorizer};

use crate::error::ContractError;
use crate::msg::{
    ClaimStatus, ExecuteMsg, InfoResponse, InstantiateMsg, MerkleRootsResponse,
    MintRecordResponse, QueryMsg,
};
use crate::state::{
    ACTIVE_WAVE, ALLOWLIST, CLAIMLIST, COLLECTION, CONFIG, SALE_OPEN, TOKEN_DETAILS,
    TOTAL_MINTED, WALLET_LEDGER, WHITELIST,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:omniflix-wave-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
const CREATION_FEE: Uint128 = Uint128::new(100_000_000);
#[cfg(test)]
const CREATION_FEE_DENOM: &str = "uflix";

#[cfg(not(test))]
fn collection_creation_fee(deps: Deps) -> StdResult<Coin> {
    minter_types::utils::check_collection_creation_fee(deps.querier)
}

// The mock querier has no onft module
#[cfg(test)]
fn collection_creation_fee(_deps: Deps) -> StdResult<Coin> {
    Ok(Coin {
        denom: CREATION_FEE_DENOM.to_string(),
        amount: CREATION_FEE,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let creation_fee = collection_creation_fee(deps.as_ref())?;
    let amount = must_pay(&info, &creation_fee.denom)?;
    // Exact amount must be paid
    if amount != creation_fee.amount {
        return Err(ContractError::InvalidCreationFee {
            expected: vec![creation_fee],
            sent: info.funds,
        });
    }

    let admin = deps.api.addr_validate(&msg.init.admin)?;
    let payment_collector =
        maybe_addr(deps.api, msg.init.payment_collector.clone())?.unwrap_or(info.sender.clone());

    let config = Config {
        payment_collector: payment_collector.clone(),
        mint_price: msg.init.mint_price,
        max_supply: msg.init.max_supply,
        mint_limit: msg.init.mint_limit,
        authorizers: msg
            .init
            .authorizers
            .unwrap_or_else(|| vec![Authorizer::ExplicitSet, Authorizer::MerkleCommitted]),
    };
    config.check_integrity()?;
    msg.collection_details.check_integrity()?;
    msg.token_details.check_integrity()?;

    cw_ownable::initialize_owner(deps.storage, deps.api, Some(admin.as_str()))?;

    CONFIG.save(deps.storage, &config)?;
    COLLECTION.save(deps.storage, &msg.collection_details)?;
    TOKEN_DETAILS.save(deps.storage, &msg.token_details)?;
    SALE_OPEN.save(deps.storage, &false)?;
    TOTAL_MINTED.save(deps.storage, &0)?;

    let collection_creation_msg: CosmosMsg = generate_create_denom_msg(
        &msg.collection_details,
        env.contract.address,
        creation_fee,
        payment_collector,
    )?
    .into();

    let res = Response::new()
        .add_message(collection_creation_msg)
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("collection_id", msg.collection_details.id)
        .add_attribute("max_supply", config.max_supply.to_string());

    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { count, proof } => execute_mint(deps, env, info, count, proof),
        ExecuteMsg::Claim {} => execute_claim(deps, env, info),
        ExecuteMsg::MintAdmin { recipient } => execute_mint_admin(deps, env, info, recipient),
        ExecuteMsg::SetSaleOpen {} => execute_set_sale_open(deps, info),
        ExecuteMsg::StartWave {
            whitelist_start,
            allowlist_start,
            public_start,
            supply,
            mint_price,
        } => execute_start_wave(
            deps,
            info,
            whitelist_start,
            allowlist_start,
            public_start,
            Some(supply),
            mint_price,
        ),
        ExecuteMsg::SetSaleStart {
            whitelist_start,
            allowlist_start,
            public_start,
        } => execute_start_wave(
            deps,
            info,
            whitelist_start,
            allowlist_start,
            public_start,
            None,
            None,
        ),
        ExecuteMsg::SetWhitelist { addresses } => {
            execute_add_members(deps, info, &WHITELIST, "set_whitelist", addresses)
        }
        ExecuteMsg::SetAllowlist { addresses } => {
            execute_add_members(deps, info, &ALLOWLIST, "set_allowlist", addresses)
        }
        ExecuteMsg::SetMerkleRootWhitelist { root } => {
            execute_set_merkle_root(deps, info, &WHITELIST, "set_merkle_root_whitelist", root)
        }
        ExecuteMsg::SetMerkleRootAllowlist { root } => {
            execute_set_merkle_root(deps, info, &ALLOWLIST, "set_merkle_root_allowlist", root)
        }
        ExecuteMsg::AddToClaimlist { addresses } => {
            execute_add_to_claimlist(deps, info, addresses)
        }
        ExecuteMsg::ClearMinters {} => execute_clear_minters(deps, info),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::UpdateOwnership(action) => execute_update_ownership(deps, env, info, action),
    }
}

pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    count: u32,
    proof: Option<Vec<HexBinary>>,
) -> Result<Response, ContractError> {
    // Time is read once, every check below uses the same snapshot
    let now = env.block.time;

    if !SALE_OPEN.load(deps.storage)? {
        return Err(ContractError::SaleClosed {});
    }
    let mut wave = ACTIVE_WAVE
        .may_load(deps.storage)?
        .ok_or(ContractError::NotStartedYet {
            start_time: None,
            current_time: now,
        })?;

    let config = CONFIG.load(deps.storage)?;
    let proof = proof.unwrap_or_default();
    let stage = wave_phase(now, &wave);
    let authorized = match stage {
        Stage::NotStarted => {
            return Err(ContractError::NotStartedYet {
                start_time: Some(wave.whitelist_start),
                current_time: now,
            })
        }
        Stage::Whitelist => authorize_any(
            &config.authorizers,
            deps.storage,
            &WHITELIST,
            &info.sender,
            &proof,
        )?,
        Stage::Allowlist => authorize_any(
            &config.authorizers,
            deps.storage,
            &ALLOWLIST,
            &info.sender,
            &proof,
        )?,
        _ => true,
    };
    if !authorized {
        return Err(ContractError::NotAuthorized { stage });
    }

    if count == 0 {
        return Err(ContractError::InvalidMintCount {});
    }
    let minted = WALLET_LEDGER.minted(deps.storage, &info.sender)?;
    if !config.mint_limit.allows(minted, count) {
        return Err(ContractError::WalletCapExceeded {});
    }
    if wave.remaining() < count {
        return Err(ContractError::WaveCapExceeded {});
    }
    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    if config.max_supply.saturating_sub(total_minted) < count {
        return Err(ContractError::NoTokensLeftToMint {});
    }

    // Check the payment
    let expected = wave.mint_price.amount.checked_mul(Uint128::from(count))?;
    // Other denoms in the funds make the payment inexact
    let sent = may_pay(&info, &wave.mint_price.denom).map_err(|_| ContractError::BadPayment {
        expected,
        sent: info
            .funds
            .iter()
            .filter(|coin| coin.denom == wave.mint_price.denom)
            .fold(Uint128::zero(), |total, coin| total.saturating_add(coin.amount)),
    })?;
    // Exact amount must be paid
    if sent != expected {
        return Err(ContractError::BadPayment { expected, sent });
    }

    wave.minted += count;
    ACTIVE_WAVE.save(deps.storage, &wave)?;
    WALLET_LEDGER.save_minted(deps.storage, &info.sender, minted + count)?;
    TOTAL_MINTED.save(deps.storage, &(total_minted + count))?;

    let (mut messages, token_ids) = issue_tokens(
        deps.storage,
        &env.contract.address,
        &info.sender,
        total_minted,
        count,
    )?;
    if !expected.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: config.payment_collector.into_string(),
            amount: vec![Coin {
                denom: wave.mint_price.denom,
                amount: expected,
            }],
        }));
    }

    let res = Response::new()
        .add_messages(messages)
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("stage", stage.to_string())
        .add_attribute("count", count.to_string())
        .add_attribute("token_ids", token_ids.join(","))
        .add_attribute("wave_id", wave.id.to_string())
        .add_attribute("wave_minted", wave.minted.to_string());

    Ok(res)
}

pub fn execute_claim(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    match CLAIMLIST.may_load(deps.storage, info.sender.clone())? {
        None => return Err(ContractError::NotInClaimList {}),
        Some(true) => return Err(ContractError::AlreadyClaimed {}),
        Some(false) => {}
    }
    let config = CONFIG.load(deps.storage)?;
    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    if total_minted >= config.max_supply {
        return Err(ContractError::NoTokensLeftToMint {});
    }

    CLAIMLIST.save(deps.storage, info.sender.clone(), &true)?;
    TOTAL_MINTED.save(deps.storage, &(total_minted + 1))?;

    let (messages, token_ids) = issue_tokens(
        deps.storage,
        &env.contract.address,
        &info.sender,
        total_minted,
        1,
    )?;

    let res = Response::new()
        .add_messages(messages)
        .add_attribute("action", "claim")
        .add_attribute("minter", info.sender)
        .add_attribute("token_ids", token_ids.join(","));

    Ok(res)
}

pub fn execute_mint_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let config = CONFIG.load(deps.storage)?;
    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    if total_minted >= config.max_supply {
        return Err(ContractError::NoTokensLeftToMint {});
    }
    TOTAL_MINTED.save(deps.storage, &(total_minted + 1))?;

    let (messages, token_ids) = issue_tokens(
        deps.storage,
        &env.contract.address,
        &recipient,
        total_minted,
        1,
    )?;

    let res = Response::new()
        .add_messages(messages)
        .add_attribute("action", "mint_admin")
        .add_attribute("recipient", recipient)
        .add_attribute("token_ids", token_ids.join(","));

    Ok(res)
}

pub fn execute_set_sale_open(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;
    SALE_OPEN.save(deps.storage, &true)?;

    Ok(Response::new().add_attribute("action", "set_sale_open"))
}

/// Replaces the active wave. Without an explicit supply the wave may sell
/// whatever is left of the collection.
pub fn execute_start_wave(
    deps: DepsMut,
    info: MessageInfo,
    whitelist_start: Timestamp,
    allowlist_start: Timestamp,
    public_start: Timestamp,
    supply: Option<u32>,
    mint_price: Option<Coin>,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let supply = match supply {
        Some(supply) => supply,
        None => config
            .max_supply
            .saturating_sub(TOTAL_MINTED.load(deps.storage)?),
    };
    let mint_price = mint_price.unwrap_or(config.mint_price);
    if mint_price.denom.is_empty() {
        return Err(ConfigurationError::InvalidMintDenom {}.into());
    }
    let id = ACTIVE_WAVE
        .may_load(deps.storage)?
        .map(|wave| wave.id + 1)
        .unwrap_or(1);

    let wave = Wave {
        id,
        whitelist_start,
        allowlist_start,
        public_start,
        supply,
        mint_price,
        minted: 0,
    };
    wave.check_integrity()?;
    ACTIVE_WAVE.save(deps.storage, &wave)?;

    let res = Response::new()
        .add_attribute("action", "start_wave")
        .add_attribute("wave_id", wave.id.to_string())
        .add_attribute("supply", wave.supply.to_string())
        .add_attribute("mint_price", wave.mint_price.to_string())
        .add_attribute("whitelist_start", wave.whitelist_start.to_string())
        .add_attribute("allowlist_start", wave.allowlist_start.to_string())
        .add_attribute("public_start", wave.public_start.to_string());

    Ok(res)
}

pub fn execute_add_members(
    deps: DepsMut,
    info: MessageInfo,
    list: &AccessList,
    action: &str,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let members = validate_addresses(deps.as_ref(), &addresses)?;
    let added = list.add_members(deps.storage, &members)?;

    let res = Response::new()
        .add_attribute("action", action)
        .add_attribute("addresses", members.len().to_string())
        .add_attribute("added", added.to_string());

    Ok(res)
}

pub fn execute_set_merkle_root(
    deps: DepsMut,
    info: MessageInfo,
    list: &AccessList,
    action: &str,
    root: HexBinary,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    list.set_merkle_root(deps.storage, root.clone())?;

    let res = Response::new()
        .add_attribute("action", action)
        .add_attribute("root", root.to_hex());

    Ok(res)
}

pub fn execute_add_to_claimlist(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let members = validate_addresses(deps.as_ref(), &addresses)?;
    let mut added = 0u32;
    for member in members.iter() {
        // Claimed entries stay claimed
        if !CLAIMLIST.has(deps.storage, member.clone()) {
            CLAIMLIST.save(deps.storage, member.clone(), &false)?;
            added += 1;
        }
    }

    let res = Response::new()
        .add_attribute("action", "add_to_claimlist")
        .add_attribute("addresses", members.len().to_string())
        .add_attribute("added", added.to_string());

    Ok(res)
}

pub fn execute_clear_minters(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let generation = WALLET_LEDGER.clear(deps.storage)?;

    let res = Response::new()
        .add_attribute("action", "clear_minters")
        .add_attribute("generation", generation.to_string());

    Ok(res)
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let mut token_details = TOKEN_DETAILS.load(deps.storage)?;
    token_details.base_token_uri = base_uri.clone();
    token_details.check_integrity()?;
    TOKEN_DETAILS.save(deps.storage, &token_details)?;

    let res = Response::new()
        .add_attribute("action", "set_base_uri")
        .add_attribute("base_uri", base_uri);

    Ok(res)
}

pub fn execute_update_ownership(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: cw_ownable::Action,
) -> Result<Response, ContractError> {
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;

    let res = Response::new()
        .add_attribute("action", "update_ownership")
        .add_attributes(ownership.into_attributes());

    Ok(res)
}

fn validate_addresses(deps: Deps, addresses: &[String]) -> Result<Vec<Addr>, ContractError> {
    if addresses.is_empty() {
        return Err(AccessListError::EmptyAddressList {}.into());
    }
    let members = addresses
        .iter()
        .map(|address| deps.api.addr_validate(address))
        .collect::<StdResult<Vec<Addr>>>()?;
    Ok(members)
}

/// Builds the registry messages for `count` items following `total_minted`.
fn issue_tokens(
    storage: &dyn Storage,
    minter: &Addr,
    recipient: &Addr,
    total_minted: u32,
    count: u32,
) -> Result<(Vec<CosmosMsg>, Vec<String>), ContractError> {
    let collection = COLLECTION.load(storage)?;
    let token_details = TOKEN_DETAILS.load(storage)?;

    let token_ids: Vec<String> = (total_minted + 1..=total_minted + count)
        .map(|token_id| token_id.to_string())
        .collect();
    let messages: Vec<CosmosMsg> = token_ids
        .iter()
        .map(|token_id| {
            generate_mint_message(
                &collection,
                &token_details,
                token_id.clone(),
                minter.clone(),
                recipient.clone(),
            )
            .into()
        })
        .collect();

    Ok((messages, token_ids))
}

// Implement Queries
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Stage {} => to_json_binary(&query_stage(deps, env)?),
        QueryMsg::Info {} => to_json_binary(&query_info(deps, env)?),
        QueryMsg::AvailableToMint { address } => {
            to_json_binary(&query_available_to_mint(deps, address)?)
        }
        QueryMsg::IsWhitelisted { address, proof } => {
            to_json_binary(&query_is_listed(deps, &WHITELIST, address, proof)?)
        }
        QueryMsg::IsAllowlisted { address, proof } => {
            to_json_binary(&query_is_listed(deps, &ALLOWLIST, address, proof)?)
        }
        QueryMsg::WalletStage {
            address,
            whitelist_proof,
            allowlist_proof,
        } => to_json_binary(&query_wallet_stage(
            deps,
            address,
            whitelist_proof,
            allowlist_proof,
        )?),
        QueryMsg::MintRecord { address } => to_json_binary(&query_mint_record(deps, address)?),
        QueryMsg::ClaimStatus { address } => to_json_binary(&query_claim_status(deps, address)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Collection {} => to_json_binary(&query_collection(deps)?),
        QueryMsg::TokenDetails {} => to_json_binary(&query_token_details(deps)?),
        QueryMsg::Wave {} => to_json_binary(&ACTIVE_WAVE.may_load(deps.storage)?),
        QueryMsg::MerkleRoots {} => to_json_binary(&query_merkle_roots(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}

fn query_stage(deps: Deps, env: Env) -> StdResult<Stage> {
    let config = CONFIG.load(deps.storage)?;
    let sale_open = SALE_OPEN.load(deps.storage)?;
    let wave = ACTIVE_WAVE.may_load(deps.storage)?;
    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    Ok(current_stage(
        env.block.time,
        sale_open,
        wave.as_ref(),
        config.max_supply.saturating_sub(total_minted),
    ))
}

fn query_info(deps: Deps, env: Env) -> StdResult<InfoResponse> {
    let stage = query_stage(deps, env)?;
    let config = CONFIG.load(deps.storage)?;
    let sale_open = SALE_OPEN.load(deps.storage)?;
    let wave = ACTIVE_WAVE.may_load(deps.storage)?;

    Ok(InfoResponse {
        stage,
        sale_open,
        total_minted: TOTAL_MINTED.load(deps.storage)?,
        max_supply: config.max_supply,
        wave_id: wave.as_ref().map(|wave| wave.id),
        wave_supply: wave.as_ref().map(|wave| wave.supply).unwrap_or_default(),
        wave_minted: wave.as_ref().map(|wave| wave.minted).unwrap_or_default(),
        max_mint_count: config.mint_limit.max_mint_count(),
        mint_price: wave.map(|wave| wave.mint_price).unwrap_or(config.mint_price),
    })
}

fn query_available_to_mint(deps: Deps, address: String) -> StdResult<u32> {
    let address = deps.api.addr_validate(&address)?;
    if !SALE_OPEN.load(deps.storage)? || ACTIVE_WAVE.may_load(deps.storage)?.is_none() {
        return Ok(0);
    }
    let config = CONFIG.load(deps.storage)?;
    let minted = WALLET_LEDGER.minted(deps.storage, &address)?;
    Ok(config.mint_limit.available(minted))
}

fn query_is_listed(
    deps: Deps,
    list: &AccessList,
    address: String,
    proof: Option<Vec<HexBinary>>,
) -> StdResult<bool> {
    let address = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    authorize_any(
        &config.authorizers,
        deps.storage,
        list,
        &address,
        &proof.unwrap_or_default(),
    )
}

fn query_wallet_stage(
    deps: Deps,
    address: String,
    whitelist_proof: Option<Vec<HexBinary>>,
    allowlist_proof: Option<Vec<HexBinary>>,
) -> StdResult<WalletStage> {
    if query_is_listed(deps, &WHITELIST, address.clone(), whitelist_proof)? {
        return Ok(WalletStage::Whitelist);
    }
    if query_is_listed(deps, &ALLOWLIST, address, allowlist_proof)? {
        return Ok(WalletStage::Allowlist);
    }
    Ok(WalletStage::Public)
}

fn query_mint_record(deps: Deps, address: String) -> StdResult<MintRecordResponse> {
    let address = deps.api.addr_validate(&address)?;
    let minted = WALLET_LEDGER.minted(deps.storage, &address)?;
    Ok(MintRecordResponse {
        minted,
        has_minted: minted > 0,
    })
}

fn query_claim_status(deps: Deps, address: String) -> StdResult<ClaimStatus> {
    let address = deps.api.addr_validate(&address)?;
    let status = match CLAIMLIST.may_load(deps.storage, address)? {
        None => ClaimStatus::NotListed,
        Some(false) => ClaimStatus::Claimable,
        Some(true) => ClaimStatus::Claimed,
    };
    Ok(status)
}

fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

fn query_collection(deps: Deps) -> StdResult<CollectionDetails> {
    COLLECTION.load(deps.storage)
}

fn query_token_details(deps: Deps) -> StdResult<TokenDetails> {
    TOKEN_DETAILS.load(deps.storage)
}

fn query_merkle_roots(deps: Deps) -> StdResult<MerkleRootsResponse> {
    Ok(MerkleRootsResponse {
        whitelist: WHITELIST.load_merkle_root(deps.storage)?,
        allowlist: ALLOWLIST.load_merkle_root(deps.storage)?,
    })
}
