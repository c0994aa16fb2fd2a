use cw_storage_plus::{Item, Map};

use crate::randomness::types::{CoordinatorConfig, RandomWordsRequest, Subscription};

pub const CONTRACT_NAME: &str = "eclipsepad-vrf-coordinator-mocks";

pub const DEFAULT_BASE_FEE: u128 = 100_000;
pub const MAX_NUM_WORDS: u32 = 500;

pub const CONFIG: Item<CoordinatorConfig> = Item::new("config");
pub const SUBSCRIPTION_COUNTER: Item<u64> = Item::new("subscription counter");
pub const REQUEST_COUNTER: Item<u64> = Item::new("request counter");
pub const SUBSCRIPTIONS: Map<u64, Subscription> = Map::new("subscriptions");
pub const REQUESTS: Map<u64, RandomWordsRequest> = Map::new("requests");
