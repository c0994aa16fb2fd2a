use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Coin, Uint256};

#[cw_serde]
pub struct MigrateMsg {
    pub version: String,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub entrance_fee: Coin,
    /// minimal amount of seconds between two settlements
    pub interval: u64,
    pub randomness: RandomnessParams,
}

/// Unverified randomness channel parameters
#[cw_serde]
pub struct RandomnessParams {
    pub coordinator: String,
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: Option<u16>,
    pub callback_gas_limit: u32,
    pub num_words: Option<u32>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // any user
    Enter {},

    // keeper
    BeginDraw {
        context: Option<Binary>,
    },

    // coordinator
    Fulfill {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::raffle::types::Config)]
    Config {},

    #[returns(crate::raffle::types::StateResponse)]
    State {},

    #[returns(u64)]
    Interval {},

    #[returns(cosmwasm_std::Coin)]
    EntranceFee {},

    #[returns(cosmwasm_std::Addr)]
    Participant { index: u32 },

    #[returns(u64)]
    ParticipantCount {},

    #[returns(Vec<cosmwasm_std::Addr>)]
    Participants {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    #[returns(Option<cosmwasm_std::Addr>)]
    LastWinner {},

    #[returns(u64)]
    LastDrawTimestamp {},

    #[returns(cosmwasm_std::Coin)]
    PoolBalance {},

    #[returns(Option<crate::raffle::types::PendingDraw>)]
    PendingRequest {},

    #[returns(crate::raffle::types::Round)]
    RoundInfo {},

    #[returns(Vec<crate::raffle::types::DrawRecord>)]
    DrawHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(crate::raffle::types::CheckTriggerResponse)]
    CheckTrigger { context: Option<Binary> },
}
