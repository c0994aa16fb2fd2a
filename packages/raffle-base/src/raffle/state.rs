use cw_storage_plus::{Item, Map};

use cosmwasm_std::{Addr, Binary};

use crate::raffle::types::{Config, DrawRecord, PendingDraw, Round};

pub const CONTRACT_NAME: &str = "eclipsepad-raffle";

pub const PAGINATION_MAX_LIMIT: u32 = 100;
pub const PAGINATION_DEFAULT_LIMIT: u32 = 10;

pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;
pub const DEFAULT_NUM_WORDS: u32 = 1;

pub const REQUEST_RANDOMNESS_REPLY: u64 = 1;
pub const PRIZE_TRANSFER_REPLY: u64 = 2;

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROUND: Item<Round> = Item::new("round");
pub const PARTICIPANTS: Item<Vec<Addr>> = Item::new("participants");
/// keeper context of a draw whose request id isn't known yet
pub const DRAW_CONTEXT: Item<Option<Binary>> = Item::new("draw context");
pub const PENDING_DRAWS: Map<u64, PendingDraw> = Map::new("pending draws");
pub const DRAW_HISTORY: Map<u64, DrawRecord> = Map::new("draw history");
