//! Simulation - one physics space driven by the host
//!
//! `SimulationCore` is plain Rust and is what the tests drive. `facade::Simulation`
//! is the `#[wasm_bindgen]` surface over it.
//!
//! The core only orchestrates: setup calls go to commands/, the per-frame tick
//! goes to step/, and reads go to query/.

use crate::domain::{BridgeResult, SimulationConfig};
use crate::systems::physics_world::{BodyId, PhysicsWorld};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "query/location.rs"]
mod location;
mod facade;

pub use facade::{destroy_simulation, Simulation};
pub use location::{Location, Velocity};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation state behind one host handle
pub struct SimulationCore {
    config: SimulationConfig,
    physics: PhysicsWorld,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation with default gravity (0, 50) and a 1/60 s step
    pub fn new() -> BridgeResult<Self> {
        init::create_simulation_core(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> BridgeResult<Self> {
        init::create_simulation_core(config)
    }

    pub fn with_config_json(json: &str) -> BridgeResult<Self> {
        let config = SimulationConfig::from_json(json)?;
        init::create_simulation_core(config)
    }

    pub fn config(&self) -> &SimulationConfig { &self.config }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.physics.body_count() }

    pub fn wall_count(&self) -> usize { self.physics.wall_count() }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn gravity(&self) -> (f32, f32) {
        settings::gravity(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Add an immovable segment from (x1, y1) to (x2, y2).
    /// `id` is kept as collider user data only.
    pub fn add_wall(&mut self, id: i32, x1: f32, y1: f32, x2: f32, y2: f32) {
        commands::add_wall(self, id, x1, y1, x2, y2);
    }

    /// Add a dynamic circle of the configured mass and return its handle
    pub fn add_circle(&mut self, id: i32, x: f32, y: f32, radius: f32) -> BodyId {
        commands::add_circle(self, id, x, y, radius)
    }

    /// Advance by one fixed time step
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Position and angular velocity of `body`
    pub fn location(&self, body: BodyId) -> BridgeResult<Location> {
        location::location(self, body)
    }

    /// Write `[x, y, angular_velocity]` into the first three slots of `out`
    pub fn location_into(&self, body: BodyId, out: &mut [f32]) -> BridgeResult<bool> {
        location::location_into(self, body, out)
    }

    pub fn velocity(&self, body: BodyId) -> BridgeResult<Velocity> {
        location::velocity(self, body)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
