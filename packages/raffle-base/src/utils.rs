use cosmwasm_std::{Coin, MessageInfo, Uint128, Uint256};

use crate::{
    error::ContractError,
    raffle::state::{PAGINATION_DEFAULT_LIMIT, PAGINATION_MAX_LIMIT},
};

const WORD_GAMMA: u128 = 0x9e37_79b9_7f4a_7c15_f39c_c060_5ced_c835;

/// Returns amount of a single coin of the expected denom, empty funds count as zero
pub fn check_funds(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    match info.funds.as_slice() {
        [] => Ok(Uint128::zero()),
        [Coin { denom: x, amount }] if x == denom => Ok(*amount),
        _ => Err(ContractError::WrongFundsCombination),
    }
}

pub fn get_limit(limit: Option<u32>) -> usize {
    limit
        .unwrap_or(PAGINATION_DEFAULT_LIMIT)
        .min(PAGINATION_MAX_LIMIT) as usize
}

/// Deterministic words for local oracles, not suitable for production draws
pub fn generate_words(request_id: u64, num_words: u32) -> Vec<Uint256> {
    (0..num_words)
        .map(|i| {
            let seed = (request_id as u128)
                .wrapping_add(i as u128)
                .wrapping_mul(WORD_GAMMA);

            Uint256::from(seed) * Uint256::from(1u128 << 64)
                + Uint256::from((request_id as u128) << 32 | i as u128)
        })
        .collect()
}
