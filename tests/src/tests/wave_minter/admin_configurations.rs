#![cfg(test)]
use cosmwasm_std::{coin, Addr, Timestamp};
use cw_multi_test::Executor;
use cw_ownable::{Action, Ownership, OwnershipError};
use cw_utils::PaymentError;
use minter_types::{TokenDetails, Wave};

use crate::helpers::mock_messages::wave_minter_mock_messages::{
    return_start_wave_msg, return_wave_minter_inst_msg,
};
use crate::helpers::setup::{create_wave_minter, setup};
use crate::helpers::utils::{query_owned_onfts, set_block_time};

use omniflix_wave_minter::error::ContractError as WaveMinterError;
use omniflix_wave_minter::msg::{
    ExecuteMsg as WaveMinterExecuteMsg, InfoResponse, MintRecordResponse,
    QueryMsg as WaveMinterQueryMsg,
};

#[test]
fn mint_admin() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let mut app = res.app;
    let mut instantiate_msg = return_wave_minter_inst_msg();
    instantiate_msg.init.max_supply = 2;
    let minter_address = create_wave_minter(
        &mut app,
        res.wave_minter_code_id,
        &creator,
        &instantiate_msg,
    );
    let mint_admin_msg = WaveMinterExecuteMsg::MintAdmin {
        recipient: collector.to_string(),
    };

    // Non admin
    let res = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &mint_admin_msg,
            &[],
        )
        .unwrap_err();
    let err = res.source().unwrap();
    let error = err.downcast_ref::<WaveMinterError>().unwrap();
    assert_eq!(error, &WaveMinterError::Ownership(OwnershipError::NotOwner));

    // Payment is not accepted
    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &mint_admin_msg,
            &[coin(1_000_000, "uflix")],
        )
        .unwrap_err();
    let err = res.source().unwrap();
    let error = err.downcast_ref::<WaveMinterError>().unwrap();
    assert_eq!(
        error,
        &WaveMinterError::PaymentError(PaymentError::NonPayable {})
    );

    // Admin ignores the sale state and the wallet cap
    for _ in 0..2 {
        app.execute_contract(
            creator.clone(),
            minter_address.clone(),
            &mint_admin_msg,
            &[],
        )
        .unwrap();
    }
    let owned = query_owned_onfts(app.storage(), minter_address.to_string(), collector.as_str());
    assert_eq!(owned.len(), 2);
    let record: MintRecordResponse = app
        .wrap()
        .query_wasm_smart(
            minter_address.clone(),
            &WaveMinterQueryMsg::MintRecord {
                address: collector.to_string(),
            },
        )
        .unwrap();
    assert_eq!(record.minted, 0);

    // But not the collection supply
    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &mint_admin_msg,
            &[],
        )
        .unwrap_err();
    let err = res.source().unwrap();
    let error = err.downcast_ref::<WaveMinterError>().unwrap();
    assert_eq!(error, &WaveMinterError::NoTokensLeftToMint {});
}

#[test]
fn clear_minters() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let mut app = res.app;
    let minter_address = create_wave_minter(
        &mut app,
        res.wave_minter_code_id,
        &creator,
        &return_wave_minter_inst_msg(),
    );
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::SetSaleOpen {},
        &[],
    )
    .unwrap();
    let start = app.block_info().time.plus_seconds(1_000);
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &return_start_wave_msg(start, 1_000, 10),
        &[],
    )
    .unwrap();
    set_block_time(&mut app, start.plus_seconds(2_000));

    let mint_msg = WaveMinterExecuteMsg::Mint {
        count: 2,
        proof: None,
    };
    app.execute_contract(
        collector.clone(),
        minter_address.clone(),
        &mint_msg,
        &[coin(2_000_000, "uflix")],
    )
    .unwrap();
    let available: u32 = app
        .wrap()
        .query_wasm_smart(
            minter_address.clone(),
            &WaveMinterQueryMsg::AvailableToMint {
                address: collector.to_string(),
            },
        )
        .unwrap();
    assert_eq!(available, 0);

    // Non admin
    let res = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &WaveMinterExecuteMsg::ClearMinters {},
            &[],
        )
        .unwrap_err();
    let err = res.source().unwrap();
    let error = err.downcast_ref::<WaveMinterError>().unwrap();
    assert_eq!(error, &WaveMinterError::Ownership(OwnershipError::NotOwner));

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::ClearMinters {},
        &[],
    )
    .unwrap();
    let available: u32 = app
        .wrap()
        .query_wasm_smart(
            minter_address.clone(),
            &WaveMinterQueryMsg::AvailableToMint {
                address: collector.to_string(),
            },
        )
        .unwrap();
    assert_eq!(available, 2);

    app.execute_contract(
        collector.clone(),
        minter_address.clone(),
        &mint_msg,
        &[coin(2_000_000, "uflix")],
    )
    .unwrap();

    // Supply totals and ownership are untouched by the reset
    let info: InfoResponse = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &WaveMinterQueryMsg::Info {})
        .unwrap();
    assert_eq!(info.total_minted, 4);
    assert_eq!(info.wave_minted, 4);
    let owned = query_owned_onfts(app.storage(), minter_address.to_string(), collector.as_str());
    assert_eq!(owned.len(), 4);
}

#[test]
fn set_sale_start_and_base_uri() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let mut app = res.app;
    let mut instantiate_msg = return_wave_minter_inst_msg();
    instantiate_msg.init.max_supply = 10;
    let minter_address = create_wave_minter(
        &mut app,
        res.wave_minter_code_id,
        &creator,
        &instantiate_msg,
    );
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::MintAdmin {
            recipient: creator.to_string(),
        },
        &[],
    )
    .unwrap();

    let start = app.block_info().time.plus_seconds(1_000);
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::SetSaleStart {
            whitelist_start: start,
            allowlist_start: start.plus_seconds(1_000),
            public_start: start.plus_seconds(2_000),
        },
        &[],
    )
    .unwrap();
    let wave: Option<Wave> = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &WaveMinterQueryMsg::Wave {})
        .unwrap();
    let wave = wave.unwrap();
    assert_eq!(wave.supply, 9);
    assert_eq!(wave.mint_price, coin(1_000_000, "uflix"));

    // Reveal
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::SetBaseUri {
            base_uri: "ipfs://revealed".to_string(),
        },
        &[],
    )
    .unwrap();
    let token_details: TokenDetails = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &WaveMinterQueryMsg::TokenDetails {})
        .unwrap();
    assert_eq!(token_details.base_token_uri, "ipfs://revealed");

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::SetSaleOpen {},
        &[],
    )
    .unwrap();
    set_block_time(&mut app, start.plus_seconds(2_000));
    app.execute_contract(
        collector.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::Mint {
            count: 1,
            proof: None,
        },
        &[coin(1_000_000, "uflix")],
    )
    .unwrap();
    let owned = query_owned_onfts(app.storage(), minter_address.to_string(), collector.as_str());
    let metadata = owned[0].metadata.clone().unwrap();
    assert_eq!(metadata.media_uri, "ipfs://revealed/2");
}

#[test]
fn ownership_transfer() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let admin = res.test_accounts.admin;
    let mut app = res.app;
    let minter_address = create_wave_minter(
        &mut app,
        res.wave_minter_code_id,
        &creator,
        &return_wave_minter_inst_msg(),
    );

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::UpdateOwnership(Action::TransferOwnership {
            new_owner: admin.to_string(),
            expiry: None,
        }),
        &[],
    )
    .unwrap();
    let ownership: Ownership<Addr> = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &WaveMinterQueryMsg::Ownership {})
        .unwrap();
    assert_eq!(ownership.owner, Some(creator.clone()));
    assert_eq!(ownership.pending_owner, Some(admin.clone()));

    // Pending owner has no rights yet
    let res = app
        .execute_contract(
            admin.clone(),
            minter_address.clone(),
            &WaveMinterExecuteMsg::SetSaleOpen {},
            &[],
        )
        .unwrap_err();
    let err = res.source().unwrap();
    let error = err.downcast_ref::<WaveMinterError>().unwrap();
    assert_eq!(error, &WaveMinterError::Ownership(OwnershipError::NotOwner));

    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::UpdateOwnership(Action::AcceptOwnership),
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::StartWave {
            whitelist_start: Timestamp::from_seconds(1),
            allowlist_start: Timestamp::from_seconds(2),
            public_start: Timestamp::from_seconds(3),
            supply: 5,
            mint_price: Some(coin(3_000_000, "ibc_atom")),
        },
        &[],
    )
    .unwrap();

    // Previous owner lost its rights
    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &WaveMinterExecuteMsg::SetSaleOpen {},
            &[],
        )
        .unwrap_err();
    let err = res.source().unwrap();
    let error = err.downcast_ref::<WaveMinterError>().unwrap();
    assert_eq!(error, &WaveMinterError::Ownership(OwnershipError::NotOwner));

    // Renounce
    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &WaveMinterExecuteMsg::UpdateOwnership(Action::RenounceOwnership),
        &[],
    )
    .unwrap();
    let res = app
        .execute_contract(
            admin.clone(),
            minter_address.clone(),
            &WaveMinterExecuteMsg::SetSaleOpen {},
            &[],
        )
        .unwrap_err();
    let err = res.source().unwrap();
    let error = err.downcast_ref::<WaveMinterError>().unwrap();
    assert_eq!(error, &WaveMinterError::Ownership(OwnershipError::NoOwner));

    let wave: Option<Wave> = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &WaveMinterQueryMsg::Wave {})
        .unwrap();
    assert_eq!(wave.unwrap().mint_price, coin(3_000_000, "ibc_atom"));
}
