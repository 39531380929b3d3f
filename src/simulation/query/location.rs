use log::warn;
use wasm_bindgen::prelude::*;

use crate::domain::BridgeResult;
use crate::systems::physics_world::BodyId;

use super::SimulationCore;

/// Position and spin of one body at the time of the query.
/// Each query returns its own value; nothing is shared between calls.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) angular_velocity: f32,
}

#[wasm_bindgen]
impl Location {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.y }
    #[wasm_bindgen(getter)]
    pub fn angular_velocity(&self) -> f32 { self.angular_velocity }

    /// `[x, y, angular_velocity]`
    pub fn to_array(&self) -> Vec<f32> {
        vec![self.x, self.y, self.angular_velocity]
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

#[wasm_bindgen]
impl Velocity {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.y }
}

pub(super) fn location(sim: &SimulationCore, body: BodyId) -> BridgeResult<Location> {
    let rb = sim.physics.body(body).inspect_err(|e| warn!("location query: {e}"))?;
    let pos = rb.translation();
    Ok(Location {
        x: pos.x,
        y: pos.y,
        angular_velocity: rb.angvel(),
    })
}

/// Returns `Ok(false)` without writing when `out` has fewer than three slots.
pub(super) fn location_into(sim: &SimulationCore, body: BodyId, out: &mut [f32]) -> BridgeResult<bool> {
    let loc = location(sim, body)?;
    let Some(slots) = out.get_mut(..3) else {
        return Ok(false);
    };
    slots.copy_from_slice(&[loc.x, loc.y, loc.angular_velocity]);
    Ok(true)
}

pub(super) fn velocity(sim: &SimulationCore, body: BodyId) -> BridgeResult<Velocity> {
    let rb = sim.physics.body(body).inspect_err(|e| warn!("velocity query: {e}"))?;
    let v = rb.linvel();
    Ok(Velocity { x: v.x, y: v.y })
}
