use cosmwasm_std::{
    coin, ensure, from_json, Addr, BankMsg, Binary, DepsMut, Env, Event, MessageInfo, Reply,
    Response, StdError, StdResult, SubMsg, SubMsgResult, Uint128, Uint256,
};
use cw_utils::{nonpayable, parse_reply_execute_data, MsgExecuteContractResponse, ParseReplyError};

use raffle_base::{
    error::ContractError,
    raffle::{
        state::{
            CONFIG, DRAW_CONTEXT, DRAW_HISTORY, PARTICIPANTS, PENDING_DRAWS, PRIZE_TRANSFER_REPLY,
            REQUEST_RANDOMNESS_REPLY, ROUND,
        },
        types::{get_winner_index, DrawRecord, PendingDraw, Round, RoundState},
    },
    randomness::{msg::RequestRandomWordsResponse, types::CoordinatorContract},
    utils::check_funds,
};

pub fn try_enter(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let entrance_fee = CONFIG.load(deps.storage)?.entrance_fee;

    // fee is checked before the round state
    let payment = check_funds(&info, &entrance_fee.denom)?;
    ensure!(
        payment >= entrance_fee.amount,
        ContractError::InsufficientFee {
            required: entrance_fee.to_string()
        }
    );

    let mut round = ROUND.load(deps.storage)?;
    ensure!(round.state == RoundState::Open, ContractError::RoundNotOpen);

    round.pool = round.pool.checked_add(payment).map_err(StdError::from)?;
    ROUND.save(deps.storage, &round)?;

    let participants = PARTICIPANTS.update(deps.storage, |mut x| -> StdResult<Vec<Addr>> {
        x.push(info.sender.clone());
        Ok(x)
    })?;

    Ok(Response::new()
        .add_attribute("action", "try_enter")
        .add_event(
            Event::new("entered")
                .add_attribute("participant", info.sender)
                .add_attribute("amount", payment)
                .add_attribute("round", round.id.to_string())
                .add_attribute("index", (participants.len() - 1).to_string())
                .add_attribute("pool", round.pool),
        ))
}

pub fn try_begin_draw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    context: Option<Binary>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;
    let participants = PARTICIPANTS.load(deps.storage)?;

    ensure!(
        round.is_trigger_ready(
            participants.len(),
            config.interval,
            env.block.time.seconds()
        ),
        ContractError::TriggerNotReady
    );

    round.state = RoundState::Calculating;
    ROUND.save(deps.storage, &round)?;
    // request id is known only in reply
    DRAW_CONTEXT.save(deps.storage, &context)?;

    let msg = CoordinatorContract::from(&config.randomness)
        .request_random_words(&config.randomness)?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(msg, REQUEST_RANDOMNESS_REPLY))
        .add_attributes([
            ("action", "try_begin_draw"),
            ("round", round.id.to_string().as_str()),
            ("participants", participants.len().to_string().as_str()),
            ("pool", round.pool.to_string().as_str()),
        ]))
}

pub fn handle_request_randomness_reply(
    deps: DepsMut,
    env: Env,
    reply: Reply,
) -> Result<Response, ContractError> {
    let MsgExecuteContractResponse { data } = parse_reply_execute_data(reply)?;
    let data = data.ok_or(ParseReplyError::ParseFailure(
        "Missing randomness request id".to_string(),
    ))?;
    let RequestRandomWordsResponse { request_id } = from_json(data)?;

    let context = DRAW_CONTEXT.load(deps.storage)?;
    DRAW_CONTEXT.remove(deps.storage);

    let mut round = ROUND.load(deps.storage)?;
    round.pending_request = Some(request_id);
    ROUND.save(deps.storage, &round)?;

    PENDING_DRAWS.save(
        deps.storage,
        request_id,
        &PendingDraw {
            request_id,
            round: round.id,
            requested_at: env.block.time.seconds(),
            context: context.clone(),
        },
    )?;

    let mut event = Event::new("draw_started")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("round", round.id.to_string());

    if let Some(x) = context {
        event = event.add_attribute("context", x.to_base64());
    }

    Ok(Response::new()
        .add_attribute("action", "handle_request_randomness_reply")
        .add_event(event))
}

pub fn try_fulfill(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    ensure!(
        info.sender == config.randomness.coordinator,
        ContractError::Unauthorized
    );

    let round = ROUND.load(deps.storage)?;
    ensure!(
        round.pending_request == Some(request_id),
        ContractError::UnknownRequest { request_id }
    );
    PENDING_DRAWS
        .load(deps.storage, request_id)
        .map_err(|_| ContractError::UnknownRequest { request_id })?;

    let random_word = random_words
        .first()
        .copied()
        .ok_or(ContractError::InvalidRandomness)?;

    let participants = PARTICIPANTS.load(deps.storage)?;
    let winner_index = get_winner_index(random_word, participants.len())
        .ok_or(ContractError::InvalidRandomness)?;
    let winner = participants
        .get(winner_index)
        .cloned()
        .ok_or(ContractError::InvalidRandomness)?;

    let now = env.block.time.seconds();
    let prize = coin(round.pool.u128(), &config.entrance_fee.denom);

    DRAW_HISTORY.save(
        deps.storage,
        round.id,
        &DrawRecord {
            round: round.id,
            request_id,
            winner: winner.clone(),
            prize: prize.clone(),
            random_word,
            participants: participants.len() as u64,
            settled_at: now,
        },
    )?;
    PENDING_DRAWS.remove(deps.storage, request_id);
    PARTICIPANTS.save(deps.storage, &vec![])?;
    ROUND.save(
        deps.storage,
        &Round {
            id: round.id + 1,
            state: RoundState::Open,
            pool: Uint128::zero(),
            last_draw_at: now,
            pending_request: None,
            last_winner: Some(winner.clone()),
        },
    )?;

    let msg = BankMsg::Send {
        to_address: winner.to_string(),
        amount: vec![prize.clone()],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(msg, PRIZE_TRANSFER_REPLY))
        .add_attribute("action", "try_fulfill")
        .add_event(
            Event::new("winner_picked")
                .add_attribute("winner", winner)
                .add_attribute("prize", prize.to_string())
                .add_attribute("round", round.id.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("index", winner_index.to_string()),
        ))
}

/// Any failed prize transfer aborts the whole settlement
pub fn handle_prize_transfer_reply(
    _deps: DepsMut,
    _env: Env,
    reply: Reply,
) -> Result<Response, ContractError> {
    match reply.result {
        SubMsgResult::Ok(_) => Ok(Response::new()),
        SubMsgResult::Err(_) => Err(ContractError::SettlementTransferFailed),
    }
}
