use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Uint128, Uint256};

#[cw_serde]
pub struct InstantiateMsg {
    pub denom: String,
    pub base_fee: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // subscription owner
    CreateSubscription {},

    FundSubscription {
        subscription_id: u64,
    },

    AddConsumer {
        subscription_id: u64,
        consumer: String,
    },

    // consumer
    RequestRandomWords {
        key_hash: String,
        subscription_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },

    // anyone, stands for the oracle network
    FulfillRandomWords {
        request_id: u64,
        random_words: Option<Vec<Uint256>>,
    },
}

/// Callback the coordinator sends to a consumer contract
#[cw_serde]
pub enum ConsumerExecuteMsg {
    Fulfill {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

/// Response data of `ExecuteMsg::RequestRandomWords`
#[cw_serde]
pub struct RequestRandomWordsResponse {
    pub request_id: u64,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::randomness::types::CoordinatorConfig)]
    Config {},

    #[returns(crate::randomness::types::Subscription)]
    Subscription { subscription_id: u64 },

    #[returns(crate::randomness::types::RandomWordsRequest)]
    Request { request_id: u64 },
}
