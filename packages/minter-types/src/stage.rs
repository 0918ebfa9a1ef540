use cosmwasm_schema::cw_serde;
use cosmwasm_std::Timestamp;

use crate::wave::Wave;

/// Gating mode of the sale. Sold out takes precedence over the time based
/// phases for status reporting only.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Stage {
    Closed,
    NoWave,
    NotStarted,
    Whitelist,
    Allowlist,
    Public,
    SoldOut,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Closed => "closed",
            Stage::NoWave => "no_wave",
            Stage::NotStarted => "not_started",
            Stage::Whitelist => "whitelist",
            Stage::Allowlist => "allowlist",
            Stage::Public => "public",
            Stage::SoldOut => "sold_out",
        };
        write!(f, "{}", name)
    }
}

/// Earliest phase a wallet is able to mint in.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum WalletStage {
    Whitelist,
    Allowlist,
    Public,
}

/// Time based phase of a wave, ignoring its counters.
pub fn wave_phase(now: Timestamp, wave: &Wave) -> Stage {
    if now < wave.whitelist_start {
        Stage::NotStarted
    } else if now < wave.allowlist_start {
        Stage::Whitelist
    } else if now < wave.public_start {
        Stage::Allowlist
    } else {
        Stage::Public
    }
}

/// `collection_remaining` is what is left of the collection supply. An
/// exhausted collection sells out the wave even when its own counter has room.
pub fn current_stage(
    now: Timestamp,
    sale_open: bool,
    wave: Option<&Wave>,
    collection_remaining: u32,
) -> Stage {
    if !sale_open {
        return Stage::Closed;
    }
    match wave {
        None => Stage::NoWave,
        Some(wave) if wave.is_sold_out() || collection_remaining == 0 => Stage::SoldOut,
        Some(wave) => wave_phase(now, wave),
    }
}
