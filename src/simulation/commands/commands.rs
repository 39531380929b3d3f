use rapier2d::prelude::*;

use crate::systems::physics_world::BodyId;

use super::SimulationCore;

// Inputs go to the engine as given: degenerate segments and non-positive radii included.

pub(super) fn add_wall(sim: &mut SimulationCore, id: i32, x1: f32, y1: f32, x2: f32, y2: f32) {
    sim.physics
        .add_wall(&sim.config, id, point![x1, y1], point![x2, y2]);
}

pub(super) fn add_circle(sim: &mut SimulationCore, id: i32, x: f32, y: f32, radius: f32) -> BodyId {
    sim.physics.add_circle(&sim.config, id, x, y, radius)
}
