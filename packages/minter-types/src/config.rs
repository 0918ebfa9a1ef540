use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use thiserror::Error;
use whitelist_types::Authorizer;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid max supply")]
    InvalidMaxSupply {},
    #[error("Invalid per address limit")]
    InvalidPerAddressLimit {},
    #[error("At least one authorizer is required")]
    NoAuthorizers {},
    #[error("Duplicate authorizer {authorizer:?}")]
    DuplicateAuthorizer { authorizer: Authorizer },
    #[error("Invalid mint price denom")]
    InvalidMintDenom {},
}

/// Deployment profile for per-wallet consumption.
#[cw_serde]
#[derive(Copy)]
pub enum MintLimit {
    /// Each wallet may mint up to `max_mint_count` items until the admin
    /// clears the minters
    PerWallet { max_mint_count: u32 },
    /// Each wallet may mint a single item until the admin clears the minters
    SingleClaim,
}

impl MintLimit {
    pub fn max_mint_count(&self) -> u32 {
        match self {
            MintLimit::PerWallet { max_mint_count } => *max_mint_count,
            MintLimit::SingleClaim => 1,
        }
    }

    /// Checks if a wallet that already minted `minted` items may mint `count` more.
    pub fn allows(&self, minted: u32, count: u32) -> bool {
        match self {
            MintLimit::PerWallet { max_mint_count } => minted
                .checked_add(count)
                .map(|total| total <= *max_mint_count)
                .unwrap_or(false),
            MintLimit::SingleClaim => minted == 0 && count == 1,
        }
    }

    pub fn available(&self, minted: u32) -> u32 {
        self.max_mint_count().saturating_sub(minted)
    }
}

#[cw_serde]
pub struct Config {
    pub payment_collector: Addr,
    // Used by waves that do not set their own price
    pub mint_price: Coin,
    pub max_supply: u32,
    pub mint_limit: MintLimit,
    pub authorizers: Vec<Authorizer>,
}

impl Config {
    pub fn check_integrity(&self) -> Result<(), ConfigurationError> {
        if self.max_supply == 0 {
            return Err(ConfigurationError::InvalidMaxSupply {});
        }
        if let MintLimit::PerWallet { max_mint_count } = self.mint_limit {
            if max_mint_count == 0 {
                return Err(ConfigurationError::InvalidPerAddressLimit {});
            }
        }
        if self.mint_price.denom.is_empty() {
            return Err(ConfigurationError::InvalidMintDenom {});
        }
        if self.authorizers.is_empty() {
            return Err(ConfigurationError::NoAuthorizers {});
        }
        for (index, authorizer) in self.authorizers.iter().enumerate() {
            if self.authorizers[..index].contains(authorizer) {
                return Err(ConfigurationError::DuplicateAuthorizer {
                    authorizer: *authorizer,
                });
            }
        }
        Ok(())
    }
}
