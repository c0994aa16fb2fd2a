use cosmwasm_std::{Deps, Env, StdResult};

use raffle_base::randomness::{
    state::{CONFIG, REQUESTS, SUBSCRIPTIONS},
    types::{CoordinatorConfig, RandomWordsRequest, Subscription},
};

pub fn query_config(deps: Deps, _env: Env) -> StdResult<CoordinatorConfig> {
    CONFIG.load(deps.storage)
}

pub fn query_subscription(deps: Deps, _env: Env, subscription_id: u64) -> StdResult<Subscription> {
    SUBSCRIPTIONS.load(deps.storage, subscription_id)
}

pub fn query_request(deps: Deps, _env: Env, request_id: u64) -> StdResult<RandomWordsRequest> {
    REQUESTS.load(deps.storage, request_id)
}
