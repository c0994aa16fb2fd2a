pub mod contract;

pub mod actions {
    pub mod execute;
    pub mod instantiate;
    pub mod migrate;
    pub mod query;
}
