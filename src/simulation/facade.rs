use log::info;
use wasm_bindgen::prelude::*;

use super::location::{Location, Velocity};
use super::perf_stats::PerfStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with gravity (0, 50). Throws if it cannot be allocated.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Simulation, JsError> {
        let core = SimulationCore::new().map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { core })
    }

    /// Create a simulation from a JSON config; omitted fields keep their defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<Simulation, JsError> {
        let core = SimulationCore::with_config_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { core })
    }

    /// Release the world and everything in it
    pub fn destroy(self) {
        info!(
            "simulation destroyed after {} frames ({} bodies, {} walls)",
            self.core.frame(),
            self.core.body_count(),
            self.core.wall_count()
        );
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn wall_count(&self) -> u32 { self.core.wall_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn gravity_x(&self) -> f32 { self.core.gravity().0 }

    #[wasm_bindgen(getter)]
    pub fn gravity_y(&self) -> f32 { self.core.gravity().1 }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Add a static wall (thickness 1.5, friction 1)
    pub fn add_wall(&mut self, id: i32, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.core.add_wall(id, x1, y1, x2, y2);
    }

    /// Add a dynamic circle and return its body handle (never 0)
    pub fn add_circle(&mut self, id: i32, x: f32, y: f32, radius: f32) -> u32 {
        self.core.add_circle(id, x, y, radius)
    }

    /// Advance one tick. Call once per animation frame.
    pub fn step(&mut self) {
        self.core.step();
    }

    /// `undefined` for a handle this simulation did not create
    pub fn get_location(&self, body: u32) -> Option<Location> {
        self.core.location(body).ok()
    }

    /// Write `[x, y, angular_velocity]` into `out`.
    /// Returns false for an unknown handle or a buffer shorter than 3.
    pub fn get_location_into(&self, body: u32, out: &mut [f32]) -> bool {
        self.core.location_into(body, out).unwrap_or(false)
    }

    pub fn get_velocity(&self, body: u32) -> Option<Velocity> {
        self.core.velocity(body).ok()
    }
}

/// Destroy a simulation if there is one; `undefined` is a no-op
#[wasm_bindgen]
pub fn destroy_simulation(sim: Option<Simulation>) {
    if let Some(sim) = sim {
        sim.destroy();
    }
}
