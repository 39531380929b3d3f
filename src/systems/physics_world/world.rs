use log::{trace, warn};
use rapier2d::prelude::*;
use snafu::OptionExt;

use crate::domain::error::UnknownBodyErr;
use crate::domain::{BridgeResult, SimulationConfig};

use super::handles::{BodyId, BodyTable};
use super::shapes::{circle_body, circle_collider, wall_collider};

/// Everything rapier needs to advance one space, plus the bridge's handle table.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    bodies: BodyTable,
    wall_count: usize,
}

impl PhysicsWorld {
    pub fn new(config: &SimulationConfig) -> BridgeResult<Self> {
        let bodies = BodyTable::with_capacity(config.body_capacity)?;

        let integration_parameters = IntegrationParameters {
            dt: config.time_step,
            length_unit: config.length_unit,
            ..IntegrationParameters::default()
        };

        #[cfg(test)]
        live_worlds::LIVE.with(|n| n.set(n.get() + 1));

        Ok(Self {
            gravity: vector![config.gravity_x, config.gravity_y],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            bodies,
            wall_count: 0,
        })
    }

    pub fn gravity(&self) -> (Real, Real) {
        (self.gravity.x, self.gravity.y)
    }

    /// Takes effect on the next step. Sleeping bodies are woken so they see it.
    pub fn set_gravity(&mut self, x: Real, y: Real) {
        self.gravity = vector![x, y];
        for (_, body) in self.rigid_body_set.iter_mut() {
            if body.is_dynamic() {
                body.wake_up(true);
            }
        }
    }

    pub fn add_wall(&mut self, config: &SimulationConfig, id: i32, a: Point<Real>, b: Point<Real>) {
        self.collider_set.insert(wall_collider(config, id, a, b));
        self.wall_count += 1;
    }

    /// Returns 0, adding nothing, once the handle table has no ids left.
    pub fn add_circle(&mut self, config: &SimulationConfig, id: i32, x: Real, y: Real, radius: Real) -> BodyId {
        if self.bodies.next_id().is_none() {
            warn!("body table is full; circle (tag {id}) not added");
            return 0;
        }

        let handle = self.rigid_body_set.insert(circle_body(config, id, x, y, radius));
        self.collider_set.insert_with_parent(
            circle_collider(config, id, radius),
            handle,
            &mut self.rigid_body_set,
        );
        let body = self.bodies.insert(handle).unwrap_or_default();
        trace!("circle {body} (tag {id}) at ({x}, {y}) r={radius}");
        body
    }

    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn body(&self, id: BodyId) -> BridgeResult<&RigidBody> {
        self.bodies
            .get(id)
            .and_then(|handle| self.rigid_body_set.get(handle))
            .context(UnknownBodyErr { id })
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn wall_count(&self) -> usize {
        self.wall_count
    }
}


#[cfg(test)]
impl Drop for PhysicsWorld {
    fn drop(&mut self) {
        live_worlds::LIVE.with(|n| n.set(n.get().saturating_sub(1)));
    }
}
