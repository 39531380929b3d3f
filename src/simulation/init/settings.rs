use log::info;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn gravity(sim: &SimulationCore) -> (f32, f32) {
    sim.physics.gravity()
}

pub(super) fn set_gravity(sim: &mut SimulationCore, x: f32, y: f32) {
    info!("gravity set to ({x}, {y})");
    sim.physics.set_gravity(x, y);
}
