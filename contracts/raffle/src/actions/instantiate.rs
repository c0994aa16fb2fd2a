use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use raffle_base::{
    error::ContractError,
    raffle::{
        msg::{InstantiateMsg, RandomnessParams},
        state::{
            CONFIG, CONTRACT_NAME, DEFAULT_NUM_WORDS, DEFAULT_REQUEST_CONFIRMATIONS,
            PARTICIPANTS, ROUND,
        },
        types::{Config, Round},
    },
    randomness::{state::MAX_NUM_WORDS, types::RandomnessConfig},
};

const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn try_instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let InstantiateMsg {
        entrance_fee,
        interval,
        randomness,
    } = msg;

    let RandomnessParams {
        coordinator,
        key_hash,
        subscription_id,
        request_confirmations,
        callback_gas_limit,
        num_words,
    } = randomness;

    ensure!(!entrance_fee.amount.is_zero(), ContractError::ZeroEntryFee);
    ensure!(interval != 0, ContractError::ZeroInterval);

    let num_words = num_words.unwrap_or(DEFAULT_NUM_WORDS);
    ensure!(
        (1..=MAX_NUM_WORDS).contains(&num_words),
        ContractError::InvalidNumWords { max: MAX_NUM_WORDS }
    );

    let config = Config {
        entrance_fee,
        interval,
        randomness: RandomnessConfig {
            coordinator: deps.api.addr_validate(&coordinator)?,
            key_hash,
            subscription_id,
            request_confirmations: request_confirmations.unwrap_or(DEFAULT_REQUEST_CONFIRMATIONS),
            callback_gas_limit,
            num_words,
        },
    };

    CONFIG.save(deps.storage, &config)?;
    ROUND.save(deps.storage, &Round::new(env.block.time.seconds()))?;
    PARTICIPANTS.save(deps.storage, &vec![])?;

    Ok(Response::new().add_attributes([
        ("action", "try_instantiate"),
        ("entrance_fee", config.entrance_fee.to_string().as_str()),
        ("interval", config.interval.to_string().as_str()),
        ("coordinator", config.randomness.coordinator.as_str()),
    ]))
}
