pub mod cache;
pub mod forecast;
pub mod notify;
