
pub mod suite {
    pub mod helper;
    pub mod extensions {
    }
}
