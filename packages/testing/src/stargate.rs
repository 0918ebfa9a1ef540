use anyhow::bail;
use cosmwasm_std::{from_json, to_json_binary, Addr, Api, Binary, BlockInfo, Querier, Storage};
use cw_multi_test::{error::AnyResult, AppResponse, CosmosRouter, Stargate};
use omniflix_std::types::omniflix::onft::v1beta1::{
    Collection, Denom, MsgCreateDenom, MsgMintOnft,
};
use omniflix_std::types::{
    cosmos::base::v1beta1::Coin,
    omniflix::onft::v1beta1::{Onft, Params, QueryParamsResponse},
};
use prost::Message;

const COLLECTION_PREFIX: &str = "collection";

pub const CREATE_DENOM_TYPE_URL: &str = "/OmniFlix.onft.v1beta1.MsgCreateDenom";
pub const MINT_ONFT_TYPE_URL: &str = "/OmniFlix.onft.v1beta1.MsgMintONFT";
pub const PARAMS_QUERY_PATH: &str = "/OmniFlix.onft.v1beta1.Query/Params";

pub const DENOM_CREATION_FEE: u128 = 1_000_000;
pub const DENOM_CREATION_FEE_DENOM: &str = "uflix";

/// Storage key of the collection created by `creator`.
pub fn collection_key(creator: &str) -> String {
    format!("collections:{}:{}", COLLECTION_PREFIX, creator)
}

/// Simulated onft module. Every creator owns a single collection and item
/// ids are unique within it.
pub struct StargateKeeper {}

impl StargateKeeper {
    fn create_denom(
        &self,
        storage: &mut dyn Storage,
        sender: Addr,
        msg: MsgCreateDenom,
    ) -> AnyResult<AppResponse> {
        let key = collection_key(sender.as_str());
        if storage.get(key.as_bytes()).is_some() {
            bail!("Collection already exists for {}", sender);
        }
        let collection = Collection {
            denom: Some(Denom {
                creator: sender.to_string(),
                data: msg.data,
                name: msg.name,
                id: msg.id,
                preview_uri: msg.preview_uri,
                description: msg.description,
                schema: msg.schema,
                symbol: msg.symbol,
                uri: msg.uri,
                uri_hash: msg.uri_hash,
                royalty_receivers: msg.royalty_receivers,
            }),
            onfts: vec![],
        };
        storage.set(key.as_bytes(), &to_json_binary(&collection)?);
        Ok(AppResponse::default())
    }

    fn mint_onft(
        &self,
        storage: &mut dyn Storage,
        sender: Addr,
        msg: MsgMintOnft,
    ) -> AnyResult<AppResponse> {
        let key = collection_key(sender.as_str());
        let Some(serialized_collection) = storage.get(key.as_bytes()) else {
            bail!("No collection created by {}", sender);
        };
        let mut collection: Collection = from_json(serialized_collection)?;
        if collection.onfts.iter().any(|onft| onft.id == msg.id) {
            bail!("Onft {} already exists", msg.id);
        }
        collection.onfts.push(Onft {
            id: msg.id,
            created_at: None,
            nsfw: msg.nsfw,
            owner: msg.recipient,
            data: msg.data,
            transferable: msg.transferable,
            extensible: msg.extensible,
            metadata: msg.metadata,
            royalty_share: msg.royalty_share,
        });
        storage.set(key.as_bytes(), &to_json_binary(&collection)?);
        Ok(AppResponse::default())
    }
}

impl Stargate for StargateKeeper {
    fn execute<ExecC, QueryC>(
        &self,
        _api: &dyn Api,
        storage: &mut dyn Storage,
        _router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        _block: &BlockInfo,
        sender: Addr,
        type_url: String,
        value: Binary,
    ) -> AnyResult<AppResponse> {
        match type_url.as_str() {
            CREATE_DENOM_TYPE_URL => {
                let msg = MsgCreateDenom::decode(value.as_slice())?;
                self.create_denom(storage, sender, msg)
            }
            MINT_ONFT_TYPE_URL => {
                let msg = MsgMintOnft::decode(value.as_slice())?;
                self.mint_onft(storage, sender, msg)
            }
            _ => bail!("Unsupported stargate message {}", type_url),
        }
    }

    fn query(
        &self,
        _api: &dyn Api,
        _storage: &dyn Storage,
        _querier: &dyn Querier,
        _block: &BlockInfo,
        path: String,
        _data: Binary,
    ) -> AnyResult<Binary> {
        if path == PARAMS_QUERY_PATH {
            let params = QueryParamsResponse {
                params: Some(Params {
                    denom_creation_fee: Some(Coin {
                        denom: DENOM_CREATION_FEE_DENOM.to_string(),
                        amount: DENOM_CREATION_FEE.to_string(),
                    }),
                }),
            };
            return Ok(to_json_binary(&params)?);
        }
        bail!("Unsupported stargate query {}", path)
    }
}
