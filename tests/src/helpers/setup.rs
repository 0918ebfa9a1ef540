use cosmwasm_std::{coin, to_json_binary, Addr, CosmosMsg, WasmMsg};
use cw_multi_test::{ContractWrapper, Executor};
use omniflix_testing::app::OmniflixApp;
use omniflix_testing::stargate::{DENOM_CREATION_FEE, DENOM_CREATION_FEE_DENOM};
use omniflix_wave_minter::contract::{
    execute as wave_minter_execute, instantiate as wave_minter_instantiate,
    query as wave_minter_query,
};
use omniflix_wave_minter::msg::InstantiateMsg;

use crate::helpers::utils::{get_contract_address_from_res, mint_to_address};

pub struct TestAccounts {
    pub admin: Addr,
    pub creator: Addr,
    pub collector: Addr,
    pub payment_collector: Addr,
}

pub struct SetupResponse {
    pub app: OmniflixApp,
    pub wave_minter_code_id: u64,
    pub test_accounts: TestAccounts,
}

pub fn setup() -> SetupResponse {
    let mut app = OmniflixApp::new();
    let admin = Addr::unchecked("admin");
    let creator = Addr::unchecked("creator");
    let collector = Addr::unchecked("collector");
    let payment_collector = Addr::unchecked("payment_collector");

    let wave_minter_contract = Box::new(ContractWrapper::new(
        wave_minter_execute,
        wave_minter_instantiate,
        wave_minter_query,
    ));
    let wave_minter_code_id = app.store_code(wave_minter_contract);

    mint_to_address(
        &mut app,
        creator.to_string(),
        vec![coin(1_000_000_000, "uflix")],
    );
    mint_to_address(
        &mut app,
        collector.to_string(),
        vec![coin(1_000_000_000, "uflix"), coin(1_000_000_000, "ibc_atom")],
    );

    SetupResponse {
        app,
        wave_minter_code_id,
        test_accounts: TestAccounts {
            admin,
            creator,
            collector,
            payment_collector,
        },
    }
}

/// Instantiates a wave minter from `creator`, paying the denom creation fee.
pub fn create_wave_minter(
    app: &mut OmniflixApp,
    code_id: u64,
    creator: &Addr,
    msg: &InstantiateMsg,
) -> Addr {
    let res = app
        .execute(
            creator.clone(),
            CosmosMsg::Wasm(WasmMsg::Instantiate {
                admin: None,
                code_id,
                msg: to_json_binary(msg).unwrap(),
                funds: vec![coin(DENOM_CREATION_FEE, DENOM_CREATION_FEE_DENOM)],
                label: "Wave Minter".to_string(),
            }),
        )
        .unwrap();
    Addr::unchecked(get_contract_address_from_res(res))
}
