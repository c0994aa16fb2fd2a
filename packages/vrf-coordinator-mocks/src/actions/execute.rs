use cosmwasm_std::{
    ensure, to_json_binary, DepsMut, Env, Event, MessageInfo, Response, StdError, StdResult,
    Uint256,
};
use cw_utils::{must_pay, nonpayable};

use raffle_base::{
    error::ContractError,
    randomness::{
        msg::RequestRandomWordsResponse,
        state::{
            CONFIG, MAX_NUM_WORDS, REQUESTS, REQUEST_COUNTER, SUBSCRIPTIONS, SUBSCRIPTION_COUNTER,
        },
        types::{CoordinatorContract, RandomWordsRequest, Subscription},
    },
    utils::generate_words,
};

pub fn try_create_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let subscription_id = SUBSCRIPTION_COUNTER.update(deps.storage, |x| -> StdResult<u64> {
        Ok(x + 1)
    })?;

    SUBSCRIPTIONS.save(
        deps.storage,
        subscription_id,
        &Subscription {
            id: subscription_id,
            owner: info.sender.clone(),
            balance: Default::default(),
            consumers: vec![],
        },
    )?;

    Ok(Response::new()
        .set_data(to_json_binary(&subscription_id)?)
        .add_event(
            Event::new("subscription_created")
                .add_attribute("subscription_id", subscription_id.to_string())
                .add_attribute("owner", info.sender),
        )
        .add_attribute("action", "try_create_subscription"))
}

pub fn try_fund_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    subscription_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = must_pay(&info, &config.denom)?;

    let subscription = SUBSCRIPTIONS.update(
        deps.storage,
        subscription_id,
        |x| -> Result<Subscription, ContractError> {
            let mut subscription = x.ok_or(ContractError::SubscriptionIsNotFound)?;
            subscription.balance = subscription
                .balance
                .checked_add(amount)
                .map_err(StdError::from)?;
            Ok(subscription)
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "try_fund_subscription")
        .add_attribute("subscription_id", subscription_id.to_string())
        .add_attribute("balance", subscription.balance))
}

pub fn try_add_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    subscription_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let consumer = deps.api.addr_validate(&consumer)?;
    let mut subscription = SUBSCRIPTIONS
        .load(deps.storage, subscription_id)
        .map_err(|_| ContractError::SubscriptionIsNotFound)?;

    if info.sender != subscription.owner {
        Err(ContractError::Unauthorized)?;
    }

    if !subscription.consumers.contains(&consumer) {
        subscription.consumers.push(consumer.clone());
        SUBSCRIPTIONS.save(deps.storage, subscription_id, &subscription)?;
    }

    Ok(Response::new()
        .add_attribute("action", "try_add_consumer")
        .add_attribute("subscription_id", subscription_id.to_string())
        .add_attribute("consumer", consumer))
}

#[allow(clippy::too_many_arguments)]
pub fn try_request_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    key_hash: String,
    subscription_id: u64,
    request_confirmations: u16,
    callback_gas_limit: u32,
    num_words: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    let subscription = SUBSCRIPTIONS
        .load(deps.storage, subscription_id)
        .map_err(|_| ContractError::SubscriptionIsNotFound)?;

    ensure!(
        subscription.consumers.contains(&info.sender),
        ContractError::InvalidConsumer
    );
    ensure!(
        subscription.balance >= config.base_fee,
        ContractError::InsufficientSubscriptionBalance
    );
    ensure!(
        (1..=MAX_NUM_WORDS).contains(&num_words),
        ContractError::InvalidNumWords { max: MAX_NUM_WORDS }
    );

    let request_id =
        REQUEST_COUNTER.update(deps.storage, |x| -> StdResult<u64> { Ok(x + 1) })?;

    REQUESTS.save(
        deps.storage,
        request_id,
        &RandomWordsRequest {
            id: request_id,
            subscription_id,
            consumer: info.sender.clone(),
            key_hash: key_hash.clone(),
            request_confirmations,
            callback_gas_limit,
            num_words,
            requested_at: env.block.time.seconds(),
        },
    )?;

    Ok(Response::new()
        .set_data(to_json_binary(&RequestRandomWordsResponse { request_id })?)
        .add_event(
            Event::new("random_words_requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("subscription_id", subscription_id.to_string())
                .add_attribute("key_hash", key_hash)
                .add_attribute("consumer", info.sender),
        )
        .add_attribute("action", "try_request_random_words"))
}

pub fn try_fulfill_random_words(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Option<Vec<Uint256>>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    let request = REQUESTS
        .load(deps.storage, request_id)
        .map_err(|_| ContractError::NonexistentRequest)?;

    let random_words = match random_words {
        Some(x) => {
            ensure!(
                !x.is_empty() && x.len() <= MAX_NUM_WORDS as usize,
                ContractError::InvalidNumWords { max: MAX_NUM_WORDS }
            );
            x
        }
        None => generate_words(request_id, request.num_words),
    };

    SUBSCRIPTIONS.update(
        deps.storage,
        request.subscription_id,
        |x| -> Result<Subscription, ContractError> {
            let mut subscription = x.ok_or(ContractError::SubscriptionIsNotFound)?;
            subscription.balance = subscription
                .balance
                .checked_sub(config.base_fee)
                .map_err(|_| ContractError::InsufficientSubscriptionBalance)?;
            Ok(subscription)
        },
    )?;

    REQUESTS.remove(deps.storage, request_id);

    // consumer failure reverts the whole fulfillment, the request stays deliverable
    let msg = CoordinatorContract::fulfill(&request.consumer, request_id, random_words)?;

    Ok(Response::new()
        .add_message(msg)
        .add_event(
            Event::new("random_words_fulfilled")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("consumer", request.consumer),
        )
        .add_attribute("action", "try_fulfill_random_words"))
}
