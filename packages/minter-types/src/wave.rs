use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, Timestamp};
use thiserror::Error;

pub type WaveID = u32;

#[derive(Error, Debug, PartialEq)]
pub enum WaveError {
    #[error("Wave phases must satisfy whitelist start < allowlist start < public start")]
    InvalidPhaseOrder {},
    #[error("Wave supply cannot be zero")]
    InvalidSupply {},
}

/// A distribution round. Installing a new wave replaces the previous one and
/// starts its `minted` counter from zero.
#[cw_serde]
pub struct Wave {
    pub id: WaveID,
    pub whitelist_start: Timestamp,
    pub allowlist_start: Timestamp,
    pub public_start: Timestamp,
    pub supply: u32,
    pub mint_price: Coin,
    pub minted: u32,
}

impl Wave {
    pub fn check_integrity(&self) -> Result<(), WaveError> {
        if self.whitelist_start >= self.allowlist_start
            || self.allowlist_start >= self.public_start
        {
            return Err(WaveError::InvalidPhaseOrder {});
        }
        if self.supply == 0 {
            return Err(WaveError::InvalidSupply {});
        }
        Ok(())
    }

    pub fn is_sold_out(&self) -> bool {
        self.minted >= self.supply
    }

    pub fn remaining(&self) -> u32 {
        self.supply.saturating_sub(self.minted)
    }
}
