use cosmwasm_std::{Coin, OverflowError, StdError, Timestamp, Uint128};
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use minter_types::{
    CollectionDetailsError, ConfigurationError, Stage, TokenDetailsError, WaveError,
};
use thiserror::Error;
use whitelist_types::AccessListError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    InvalidWave(#[from] WaveError),

    #[error(transparent)]
    AccessList(#[from] AccessListError),

    #[error(transparent)]
    CollectionDetailsError(#[from] CollectionDetailsError),

    #[error(transparent)]
    TokenDetailsError(#[from] TokenDetailsError),

    #[error("Invalid creation fee")]
    InvalidCreationFee {
        expected: Vec<Coin>,
        sent: Vec<Coin>,
    },

    #[error("Sale is closed")]
    SaleClosed {},

    #[error("Sale not started yet")]
    NotStartedYet {
        start_time: Option<Timestamp>,
        current_time: Timestamp,
    },

    #[error("Wallet is not in {stage} list")]
    NotAuthorized { stage: Stage },

    #[error("Available token mint count exceeded")]
    WalletCapExceeded {},

    #[error("Purchase would exceed wave max tokens")]
    WaveCapExceeded {},

    #[error("No tokens left to mint")]
    NoTokensLeftToMint {},

    #[error("Incorrect payment amount")]
    BadPayment { expected: Uint128, sent: Uint128 },

    #[error("Wallet is not in claim list")]
    NotInClaimList {},

    #[error("Already minted")]
    AlreadyClaimed {},

    #[error("Mint count cannot be zero")]
    InvalidMintCount {},
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}
