use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore) {
    let step_start = if sim.perf_enabled { Some(PerfTimer::start()) } else { None };

    sim.physics.step();
    sim.frame += 1;

    if let Some(t0) = step_start {
        sim.perf_stats.step_ms = t0.elapsed_ms();
        sim.perf_stats.frame = sim.frame;
        sim.perf_stats.body_count = sim.physics.body_count() as u32;
        sim.perf_stats.wall_count = sim.physics.wall_count() as u32;
    }
}
