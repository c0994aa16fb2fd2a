#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
};

use raffle_base::{
    error::ContractError,
    raffle::{
        msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
        state::{PRIZE_TRANSFER_REPLY, REQUEST_RANDOMNESS_REPLY},
    },
};

use crate::actions::{
    execute as e, instantiate::try_instantiate, migrate::migrate_contract, query as q,
};

/// Creates a new contract with the specified parameters packed in the "msg" variable
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes all the execute functions available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => e::try_enter(deps, env, info),

        ExecuteMsg::BeginDraw { context } => e::try_begin_draw(deps, env, info, context),

        ExecuteMsg::Fulfill {
            request_id,
            random_words,
        } => e::try_fulfill(deps, env, info, request_id, random_words),
    }
}

/// Exposes all the queries available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&q::query_config(deps, env)?),

        QueryMsg::State {} => to_json_binary(&q::query_state(deps, env)?),

        QueryMsg::Interval {} => to_json_binary(&q::query_interval(deps, env)?),

        QueryMsg::EntranceFee {} => to_json_binary(&q::query_entrance_fee(deps, env)?),

        QueryMsg::Participant { index } => {
            to_json_binary(&q::query_participant(deps, env, index)?)
        }

        QueryMsg::ParticipantCount {} => {
            to_json_binary(&q::query_participant_count(deps, env)?)
        }

        QueryMsg::Participants { start_after, limit } => {
            to_json_binary(&q::query_participants(deps, env, start_after, limit)?)
        }

        QueryMsg::LastWinner {} => to_json_binary(&q::query_last_winner(deps, env)?),

        QueryMsg::LastDrawTimestamp {} => {
            to_json_binary(&q::query_last_draw_timestamp(deps, env)?)
        }

        QueryMsg::PoolBalance {} => to_json_binary(&q::query_pool_balance(deps, env)?),

        QueryMsg::PendingRequest {} => to_json_binary(&q::query_pending_request(deps, env)?),

        QueryMsg::RoundInfo {} => to_json_binary(&q::query_round_info(deps, env)?),

        QueryMsg::DrawHistory { start_after, limit } => {
            to_json_binary(&q::query_draw_history(deps, env, start_after, limit)?)
        }

        QueryMsg::CheckTrigger { context } => {
            to_json_binary(&q::query_check_trigger(deps, env, context)?)
        }
    }
}

/// Exposes all reply functions available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        REQUEST_RANDOMNESS_REPLY => e::handle_request_randomness_reply(deps, env, reply),
        PRIZE_TRANSFER_REPLY => e::handle_prize_transfer_reply(deps, env, reply),
        _ => Err(ContractError::UndefinedReplyId),
    }
}

/// Used for contract migration
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, env, msg)
}
