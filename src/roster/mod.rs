pub mod player;
pub mod store;
