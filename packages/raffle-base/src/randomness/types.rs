use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, StdResult, Uint128, Uint256, WasmMsg};

use crate::randomness::msg::{ConsumerExecuteMsg, ExecuteMsg};

/// Channel parameters the raffle passes with every randomness request
#[cw_serde]
pub struct RandomnessConfig {
    pub coordinator: Addr,
    /// gas lane
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

#[cw_serde]
pub struct CoordinatorConfig {
    /// subscriptions are funded in this denom
    pub denom: String,
    pub base_fee: Uint128,
}

#[cw_serde]
pub struct Subscription {
    pub id: u64,
    pub owner: Addr,
    pub balance: Uint128,
    pub consumers: Vec<Addr>,
}

#[cw_serde]
pub struct RandomWordsRequest {
    pub id: u64,
    pub subscription_id: u64,
    pub consumer: Addr,
    pub key_hash: String,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub requested_at: u64,
}

/// Wrapper over coordinator address producing both sides of the request/fulfill handshake
#[cw_serde]
pub struct CoordinatorContract(pub Addr);

impl CoordinatorContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn request_random_words(&self, config: &RandomnessConfig) -> StdResult<WasmMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().to_string(),
            msg: to_json_binary(&ExecuteMsg::RequestRandomWords {
                key_hash: config.key_hash.clone(),
                subscription_id: config.subscription_id,
                request_confirmations: config.request_confirmations,
                callback_gas_limit: config.callback_gas_limit,
                num_words: config.num_words,
            })?,
            funds: vec![],
        })
    }

    pub fn fulfill(
        consumer: &Addr,
        request_id: u64,
        random_words: Vec<Uint256>,
    ) -> StdResult<WasmMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: consumer.to_string(),
            msg: to_json_binary(&ConsumerExecuteMsg::Fulfill {
                request_id,
                random_words,
            })?,
            funds: vec![],
        })
    }
}

impl From<&RandomnessConfig> for CoordinatorContract {
    fn from(config: &RandomnessConfig) -> Self {
        Self(config.coordinator.clone())
    }
}
