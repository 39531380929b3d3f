use rapier2d::prelude::*;

use crate::domain::SimulationConfig;

/// Moment of inertia of a hollow disc centred on its body.
/// `inner_radius = 0` gives the solid disc: `I = m * r^2 / 2`.
#[inline]
pub fn moment_for_circle(mass: Real, inner_radius: Real, outer_radius: Real) -> Real {
    mass * (inner_radius * inner_radius + outer_radius * outer_radius) * 0.5
}

/// Host ids travel as user data on the collider; nothing reads them back for lookup.
#[inline]
pub fn user_tag(id: i32) -> u128 {
    id as u32 as u128
}

/// Static rounded segment between two points.
pub fn wall_collider(config: &SimulationConfig, id: i32, a: Point<Real>, b: Point<Real>) -> Collider {
    ColliderBuilder::new(SharedShape::capsule(a, b, config.wall_thickness))
        .friction(config.wall_friction)
        .friction_combine_rule(CoefficientCombineRule::Multiply)
        .restitution_combine_rule(CoefficientCombineRule::Multiply)
        .user_data(user_tag(id))
        .build()
}

/// Dynamic body carrying the disc's mass and moment; its collider adds none.
pub fn circle_body(config: &SimulationConfig, id: i32, x: Real, y: Real, radius: Real) -> RigidBody {
    let mass = config.circle_mass;
    let moment = moment_for_circle(mass, 0.0, radius);

    RigidBodyBuilder::dynamic()
        .translation(vector![x, y])
        .additional_mass_properties(MassProperties::new(point![0.0, 0.0], mass, moment))
        .can_sleep(config.allow_sleep)
        .user_data(user_tag(id))
        .build()
}

pub fn circle_collider(config: &SimulationConfig, id: i32, radius: Real) -> Collider {
    ColliderBuilder::ball(radius)
        .density(0.0)
        .restitution(config.circle_elasticity)
        .friction(config.circle_friction)
        .friction_combine_rule(CoefficientCombineRule::Multiply)
        .restitution_combine_rule(CoefficientCombineRule::Multiply)
        .user_data(user_tag(id))
        .build()
}
