use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use cw2::set_contract_version;

use raffle_base::{
    error::ContractError,
    randomness::{
        msg::InstantiateMsg,
        state::{CONFIG, CONTRACT_NAME, DEFAULT_BASE_FEE, REQUEST_COUNTER, SUBSCRIPTION_COUNTER},
        types::CoordinatorConfig,
    },
};

const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn try_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CONFIG.save(
        deps.storage,
        &CoordinatorConfig {
            denom: msg.denom,
            base_fee: msg.base_fee.unwrap_or(Uint128::new(DEFAULT_BASE_FEE)),
        },
    )?;

    SUBSCRIPTION_COUNTER.save(deps.storage, &0)?;
    REQUEST_COUNTER.save(deps.storage, &0)?;

    Ok(Response::new().add_attribute("action", "try_instantiate"))
}
