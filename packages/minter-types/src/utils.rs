use crate::collection_details::CollectionDetails;
use crate::token_details::TokenDetails;
use cosmwasm_std::{Addr, Coin, Decimal, QuerierWrapper, StdError, Uint128};
use omniflix_std::types::omniflix::onft::v1beta1::{
    Metadata, MsgCreateDenom, MsgMintOnft, OnftQuerier, WeightedAddress,
};
use std::str::FromStr;

/// Builds the registry message issuing `token_id` of the collection to `recipient`.
pub fn generate_mint_message(
    collection: &CollectionDetails,
    token_details: &TokenDetails,
    token_id: String,
    minter_address: Addr,
    recipient: Addr,
) -> MsgMintOnft {
    let metadata = Metadata {
        name: format!("{} #{}", token_details.token_name, token_id),
        description: token_details.description.clone().unwrap_or_default(),
        media_uri: format!("{}/{}", token_details.base_token_uri, token_id),
        preview_uri: format!(
            "{}/{}",
            token_details
                .preview_uri
                .clone()
                .unwrap_or(token_details.base_token_uri.clone()),
            token_id,
        ),
        uri_hash: collection.uri_hash.clone().unwrap_or_default(),
    };

    MsgMintOnft {
        data: token_details.data.clone().unwrap_or_default(),
        id: token_id,
        metadata: Some(metadata),
        denom_id: collection.id.clone(),
        transferable: token_details.transferable,
        sender: minter_address.into_string(),
        extensible: token_details.extensible,
        nsfw: token_details.nsfw,
        recipient: recipient.into_string(),
        royalty_share: token_details.royalty_ratio.atomics().to_string(),
    }
}

pub fn generate_create_denom_msg(
    collection: &CollectionDetails,
    minter_address: Addr,
    creation_fee: Coin,
    payment_collector: Addr,
) -> Result<MsgCreateDenom, StdError> {
    let royalty_receivers = match &collection.royalty_receivers {
        Some(receivers) => receivers
            .iter()
            .map(|r| {
                let atomics_weight = Decimal::from_str(&r.weight)?.atomics().to_string();
                Ok(WeightedAddress {
                    address: r.address.clone(),
                    weight: atomics_weight,
                })
            })
            .collect::<Result<Vec<WeightedAddress>, StdError>>()?,
        None => vec![WeightedAddress {
            address: payment_collector.into_string(),
            weight: Decimal::one().atomics().to_string(),
        }],
    };

    Ok(MsgCreateDenom {
        creation_fee: Some(creation_fee.into()),
        id: collection.id.clone(),
        symbol: collection.symbol.clone(),
        name: collection.collection_name.clone(),
        description: collection.description.clone().unwrap_or_default(),
        preview_uri: collection.preview_uri.clone().unwrap_or_default(),
        schema: collection.schema.clone().unwrap_or_default(),
        sender: minter_address.into_string(),
        uri: collection.uri.clone().unwrap_or_default(),
        uri_hash: collection.uri_hash.clone().unwrap_or_default(),
        data: collection.data.clone().unwrap_or_default(),
        royalty_receivers,
    })
}

/// Denom creation fee charged by the onft module.
pub fn check_collection_creation_fee(querier: QuerierWrapper) -> Result<Coin, StdError> {
    let onft_querier = OnftQuerier::new(&querier);
    let params = onft_querier.params()?;
    let creation_fee = params
        .params
        .and_then(|params| params.denom_creation_fee)
        .ok_or_else(|| StdError::generic_err("Denom creation fee is not set"))?;
    Ok(Coin {
        denom: creation_fee.denom,
        amount: Uint128::from_str(&creation_fee.amount)?,
    })
}
