//! Domain types shared by the bridge: configuration and errors.

pub mod config;
pub mod error;

pub use config::SimulationConfig;
pub use error::{BridgeError, BridgeResult};
