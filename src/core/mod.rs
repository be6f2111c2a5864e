//! Core functionality of the mock runtime

pub mod latency;
pub mod mock;
pub mod models;
pub mod providers;
pub mod traits;
