use log::debug;

use crate::domain::{BridgeResult, SimulationConfig};
use crate::systems::physics_world::PhysicsWorld;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(config: SimulationConfig) -> BridgeResult<SimulationCore> {
    config.validate()?;
    let physics = PhysicsWorld::new(&config)?;

    debug!(
        "simulation created: gravity=({}, {}) dt={}",
        config.gravity_x, config.gravity_y, config.time_step
    );

    Ok(SimulationCore {
        config,
        physics,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
