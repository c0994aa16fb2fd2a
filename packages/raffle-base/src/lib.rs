pub mod error;
pub mod utils;

pub mod raffle {
    pub mod msg;
    pub mod state;
    pub mod types;
}

pub mod randomness {
    pub mod msg;
    pub mod state;
    pub mod types;
}
