use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Coin, Uint128, Uint256};

use crate::randomness::types::RandomnessConfig;

/// Raffle parameters, fixed at instantiation
#[cw_serde]
pub struct Config {
    pub entrance_fee: Coin,
    /// minimal amount of seconds between two settlements
    pub interval: u64,
    pub randomness: RandomnessConfig,
}

#[cw_serde]
#[derive(Copy, Default)]
pub enum RoundState {
    #[default]
    Open,
    Calculating,
}

impl RoundState {
    pub fn code(&self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Calculating => 1,
        }
    }
}

#[cw_serde]
pub struct Round {
    /// sequential round number starting from 1
    pub id: u64,
    pub state: RoundState,
    /// entry fees collected since the last settlement
    pub pool: Uint128,
    pub last_draw_at: u64,
    /// set only while the round is calculating
    pub pending_request: Option<u64>,
    /// winner of the previous round, survives the reset
    pub last_winner: Option<Addr>,
}

impl Round {
    pub fn new(last_draw_at: u64) -> Self {
        Self {
            id: 1,
            state: RoundState::Open,
            pool: Uint128::zero(),
            last_draw_at,
            pending_request: None,
            last_winner: None,
        }
    }

    /// Draw may begin only when the round is open, funded and the interval has passed
    pub fn is_trigger_ready(&self, participants: usize, interval: u64, now: u64) -> bool {
        let is_open = self.state == RoundState::Open;
        let has_participants = participants > 0;
        let has_balance = !self.pool.is_zero();
        let is_time_passed = now.saturating_sub(self.last_draw_at) >= interval;

        is_open && has_participants && has_balance && is_time_passed
    }
}

/// Request table entry, lives from the oracle acknowledgement till settlement
#[cw_serde]
pub struct PendingDraw {
    pub request_id: u64,
    pub round: u64,
    pub requested_at: u64,
    pub context: Option<Binary>,
}

#[cw_serde]
pub struct DrawRecord {
    pub round: u64,
    pub request_id: u64,
    pub winner: Addr,
    pub prize: Coin,
    pub random_word: Uint256,
    pub participants: u64,
    pub settled_at: u64,
}

#[cw_serde]
pub struct CheckTriggerResponse {
    pub ready: bool,
    pub context: Option<Binary>,
}

#[cw_serde]
pub struct StateResponse {
    pub state: RoundState,
    pub code: u8,
}

/// Maps a random word onto the participant list
pub fn get_winner_index(random_word: Uint256, participants: usize) -> Option<usize> {
    if participants == 0 {
        return None;
    }

    let index = random_word % Uint256::from(participants as u128);
    let index: Uint128 = index.try_into().ok()?;

    usize::try_from(index.u128()).ok()
}
