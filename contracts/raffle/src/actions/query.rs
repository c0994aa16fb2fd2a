use cosmwasm_std::{coin, Addr, Binary, Coin, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use raffle_base::{
    error::ContractError,
    raffle::{
        state::{CONFIG, DRAW_HISTORY, PARTICIPANTS, PENDING_DRAWS, ROUND},
        types::{CheckTriggerResponse, Config, DrawRecord, PendingDraw, Round, StateResponse},
    },
    utils::get_limit,
};

pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_state(deps: Deps, _env: Env) -> StdResult<StateResponse> {
    let state = ROUND.load(deps.storage)?.state;

    Ok(StateResponse {
        state,
        code: state.code(),
    })
}

pub fn query_interval(deps: Deps, _env: Env) -> StdResult<u64> {
    Ok(CONFIG.load(deps.storage)?.interval)
}

pub fn query_entrance_fee(deps: Deps, _env: Env) -> StdResult<Coin> {
    Ok(CONFIG.load(deps.storage)?.entrance_fee)
}

pub fn query_participant(deps: Deps, _env: Env, index: u32) -> StdResult<Addr> {
    PARTICIPANTS
        .load(deps.storage)?
        .get(index as usize)
        .cloned()
        .ok_or(StdError::from(ContractError::IndexOutOfRange { index }))
}

pub fn query_participant_count(deps: Deps, _env: Env) -> StdResult<u64> {
    Ok(PARTICIPANTS.load(deps.storage)?.len() as u64)
}

/// Paginates participants by their entry index
pub fn query_participants(
    deps: Deps,
    _env: Env,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<Addr>> {
    let skip = start_after.map(|x| x as usize + 1).unwrap_or_default();

    Ok(PARTICIPANTS
        .load(deps.storage)?
        .into_iter()
        .skip(skip)
        .take(get_limit(limit))
        .collect())
}

pub fn query_last_winner(deps: Deps, _env: Env) -> StdResult<Option<Addr>> {
    Ok(ROUND.load(deps.storage)?.last_winner)
}

pub fn query_last_draw_timestamp(deps: Deps, _env: Env) -> StdResult<u64> {
    Ok(ROUND.load(deps.storage)?.last_draw_at)
}

pub fn query_pool_balance(deps: Deps, _env: Env) -> StdResult<Coin> {
    let Config { entrance_fee, .. } = CONFIG.load(deps.storage)?;
    let Round { pool, .. } = ROUND.load(deps.storage)?;

    Ok(coin(pool.u128(), entrance_fee.denom))
}

pub fn query_pending_request(deps: Deps, _env: Env) -> StdResult<Option<PendingDraw>> {
    match ROUND.load(deps.storage)?.pending_request {
        Some(request_id) => PENDING_DRAWS.may_load(deps.storage, request_id),
        None => Ok(None),
    }
}

pub fn query_round_info(deps: Deps, _env: Env) -> StdResult<Round> {
    ROUND.load(deps.storage)
}

pub fn query_draw_history(
    deps: Deps,
    _env: Env,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<DrawRecord>> {
    DRAW_HISTORY
        .range(
            deps.storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(get_limit(limit))
        .map(|x| x.map(|(_, record)| record))
        .collect()
}

/// Read-only trigger evaluation for keepers, context is echoed back untouched
pub fn query_check_trigger(
    deps: Deps,
    env: Env,
    context: Option<Binary>,
) -> StdResult<CheckTriggerResponse> {
    let Config { interval, .. } = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;
    let participants = PARTICIPANTS.load(deps.storage)?;

    Ok(CheckTriggerResponse {
        ready: round.is_trigger_ready(participants.len(), interval, env.block.time.seconds()),
        context,
    })
}
