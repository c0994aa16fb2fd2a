use cosmwasm_std::{coin, Addr, Binary, Coin, StdResult, Uint256};
use cw_multi_test::{AppResponse, ContractWrapper, Executor};

use raffle_base::{
    error::parse_err,
    raffle::{
        msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, RandomnessParams},
        types::{CheckTriggerResponse, Config, DrawRecord, PendingDraw, Round, StateResponse},
    },
};

use crate::suite::helper::{ControllerHelper, Denom, Extension};

const NAME: &str = "raffle";

pub const ENTRANCE_FEE: u128 = 100_000;
pub const INTERVAL: u64 = 30;
pub const KEY_HASH: &str = "gas_lane";
pub const CALLBACK_GAS_LIMIT: u32 = 500_000;

pub trait RaffleExtension {
    fn raffle_code_id(&self) -> u64;
    fn raffle_contract_address(&self) -> Addr;

    fn raffle_store_code(&mut self) -> u64;

    fn raffle_default_instantiate_msg(&self, coordinator: &Addr, subscription_id: u64)
        -> InstantiateMsg;

    fn raffle_try_instantiate(&mut self, msg: &InstantiateMsg) -> StdResult<Addr>;

    fn raffle_prepare_contract(&mut self, coordinator: &Addr, subscription_id: u64);

    fn raffle_try_enter(&mut self, sender: impl ToString, funds: &[Coin])
        -> StdResult<AppResponse>;

    fn raffle_try_begin_draw(
        &mut self,
        sender: impl ToString,
        context: Option<Binary>,
    ) -> StdResult<AppResponse>;

    fn raffle_try_fulfill(
        &mut self,
        sender: impl ToString,
        request_id: u64,
        random_words: &[Uint256],
    ) -> StdResult<AppResponse>;

    fn raffle_try_migrate(&mut self, version: &str) -> StdResult<AppResponse>;

    fn raffle_query_config(&self) -> StdResult<Config>;

    fn raffle_query_state(&self) -> StdResult<StateResponse>;

    fn raffle_query_interval(&self) -> StdResult<u64>;

    fn raffle_query_entrance_fee(&self) -> StdResult<Coin>;

    fn raffle_query_participant(&self, index: u32) -> StdResult<Addr>;

    fn raffle_query_participant_count(&self) -> StdResult<u64>;

    fn raffle_query_participants(
        &self,
        start_after: Option<u32>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Addr>>;

    fn raffle_query_last_winner(&self) -> StdResult<Option<Addr>>;

    fn raffle_query_last_draw_timestamp(&self) -> StdResult<u64>;

    fn raffle_query_pool_balance(&self) -> StdResult<Coin>;

    fn raffle_query_pending_request(&self) -> StdResult<Option<PendingDraw>>;

    fn raffle_query_round_info(&self) -> StdResult<Round>;

    fn raffle_query_draw_history(
        &self,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<Vec<DrawRecord>>;

    fn raffle_query_check_trigger(&self, context: Option<Binary>)
        -> StdResult<CheckTriggerResponse>;
}

impl RaffleExtension for ControllerHelper {
    fn raffle_code_id(&self) -> u64 {
        self.extension_list
            .iter()
            .find(|x| x.name == NAME)
            .unwrap()
            .code_id
    }

    fn raffle_contract_address(&self) -> Addr {
        self.extension_list
            .iter()
            .find(|x| x.name == NAME)
            .unwrap()
            .contract_address
            .to_owned()
    }

    fn raffle_store_code(&mut self) -> u64 {
        self.app.store_code(Box::new(
            ContractWrapper::new_with_empty(
                raffle::contract::execute,
                raffle::contract::instantiate,
                raffle::contract::query,
            )
            .with_reply_empty(raffle::contract::reply)
            .with_migrate_empty(raffle::contract::migrate),
        ))
    }

    fn raffle_default_instantiate_msg(
        &self,
        coordinator: &Addr,
        subscription_id: u64,
    ) -> InstantiateMsg {
        InstantiateMsg {
            entrance_fee: coin(ENTRANCE_FEE, Denom::Ueclip.to_string()),
            interval: INTERVAL,
            randomness: RandomnessParams {
                coordinator: coordinator.to_string(),
                key_hash: KEY_HASH.to_string(),
                subscription_id,
                request_confirmations: None,
                callback_gas_limit: CALLBACK_GAS_LIMIT,
                num_words: None,
            },
        }
    }

    fn raffle_try_instantiate(&mut self, msg: &InstantiateMsg) -> StdResult<Addr> {
        let code_id = self.raffle_store_code();

        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                msg,
                &[],
                NAME,
                Some(self.owner.to_string()),
            )
            .map_err(parse_err)
    }

    fn raffle_prepare_contract(&mut self, coordinator: &Addr, subscription_id: u64) {
        let code_id = self.raffle_store_code();
        let msg = self.raffle_default_instantiate_msg(coordinator, subscription_id);

        let contract_address = self
            .app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &msg,
                &[],
                NAME,
                Some(self.owner.to_string()),
            )
            .unwrap();

        self.extension_list.push(Extension {
            name: NAME.to_string(),
            code_id,
            contract_address,
        });
    }

    fn raffle_try_enter(
        &mut self,
        sender: impl ToString,
        funds: &[Coin],
    ) -> StdResult<AppResponse> {
        self.app
            .execute_contract(
                Addr::unchecked(sender.to_string()),
                self.raffle_contract_address(),
                &ExecuteMsg::Enter {},
                funds,
            )
            .map_err(parse_err)
    }

    fn raffle_try_begin_draw(
        &mut self,
        sender: impl ToString,
        context: Option<Binary>,
    ) -> StdResult<AppResponse> {
        self.app
            .execute_contract(
                Addr::unchecked(sender.to_string()),
                self.raffle_contract_address(),
                &ExecuteMsg::BeginDraw { context },
                &[],
            )
            .map_err(parse_err)
    }

    fn raffle_try_fulfill(
        &mut self,
        sender: impl ToString,
        request_id: u64,
        random_words: &[Uint256],
    ) -> StdResult<AppResponse> {
        self.app
            .execute_contract(
                Addr::unchecked(sender.to_string()),
                self.raffle_contract_address(),
                &ExecuteMsg::Fulfill {
                    request_id,
                    random_words: random_words.to_vec(),
                },
                &[],
            )
            .map_err(parse_err)
    }

    fn raffle_try_migrate(&mut self, version: &str) -> StdResult<AppResponse> {
        self.app
            .migrate_contract(
                self.owner.clone(),
                self.raffle_contract_address(),
                &MigrateMsg {
                    version: version.to_string(),
                },
                self.raffle_code_id(),
            )
            .map_err(parse_err)
    }

    fn raffle_query_config(&self) -> StdResult<Config> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract_address(), &QueryMsg::Config {})
    }

    fn raffle_query_state(&self) -> StdResult<StateResponse> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract_address(), &QueryMsg::State {})
    }

    fn raffle_query_interval(&self) -> StdResult<u64> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract_address(), &QueryMsg::Interval {})
    }

    fn raffle_query_entrance_fee(&self) -> StdResult<Coin> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract_address(), &QueryMsg::EntranceFee {})
    }

    fn raffle_query_participant(&self, index: u32) -> StdResult<Addr> {
        self.app.wrap().query_wasm_smart(
            self.raffle_contract_address(),
            &QueryMsg::Participant { index },
        )
    }

    fn raffle_query_participant_count(&self) -> StdResult<u64> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract_address(), &QueryMsg::ParticipantCount {})
    }

    fn raffle_query_participants(
        &self,
        start_after: Option<u32>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Addr>> {
        self.app.wrap().query_wasm_smart(
            self.raffle_contract_address(),
            &QueryMsg::Participants { start_after, limit },
        )
    }

    fn raffle_query_last_winner(&self) -> StdResult<Option<Addr>> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract_address(), &QueryMsg::LastWinner {})
    }

    fn raffle_query_last_draw_timestamp(&self) -> StdResult<u64> {
        self.app.wrap().query_wasm_smart(
            self.raffle_contract_address(),
            &QueryMsg::LastDrawTimestamp {},
        )
    }

    fn raffle_query_pool_balance(&self) -> StdResult<Coin> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract_address(), &QueryMsg::PoolBalance {})
    }

    fn raffle_query_pending_request(&self) -> StdResult<Option<PendingDraw>> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract_address(), &QueryMsg::PendingRequest {})
    }

    fn raffle_query_round_info(&self) -> StdResult<Round> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract_address(), &QueryMsg::RoundInfo {})
    }

    fn raffle_query_draw_history(
        &self,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<Vec<DrawRecord>> {
        self.app.wrap().query_wasm_smart(
            self.raffle_contract_address(),
            &QueryMsg::DrawHistory { start_after, limit },
        )
    }

    fn raffle_query_check_trigger(
        &self,
        context: Option<Binary>,
    ) -> StdResult<CheckTriggerResponse> {
        self.app.wrap().query_wasm_smart(
            self.raffle_contract_address(),
            &QueryMsg::CheckTrigger { context },
        )
    }
}
