//! Particula Physics - rigid-body bridge for the sandbox, compiled to WASM
//!
//! The host owns a `Simulation`, adds walls and circles, calls `step()` once per
//! animation frame and reads body locations back. All dynamics are rapier2d's.
//!
//! Architecture:
//! - domain/     - Config and errors
//! - systems/    - The wrapped physics world
//! - simulation/ - Orchestration and the JS facade

pub mod domain;
pub mod logging;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the bridge: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init_console_logger(log::LevelFilter::Info);
    log::info!("Particula physics bridge {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get bridge version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use domain::{BridgeError, SimulationConfig};
pub use simulation::{destroy_simulation, Location, PerfStats, Simulation, SimulationCore, Velocity};
pub use systems::physics_world::{moment_for_circle, BodyId};
