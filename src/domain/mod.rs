pub mod ranking;
pub mod registry;
pub mod score;
pub mod weather;
