pub mod calc;
pub mod config;
pub mod error;
pub mod facade;
pub mod store;
pub mod strategy;
pub mod updater;

pub use error::ConfigError;
pub use facade::FeeEngine;
pub use store::{InMemoryPoolStore, PoolStateStore};
pub use strategy::FeeDecision;
