//! PhysicsWorld - the wrapped rapier2d space
//!
//! Bodies, shapes, collision and solving all belong to rapier. This module only
//! builds the colliders the bridge offers (walls, circles) and keeps the table
//! that turns engine handles into plain ids for the host.

mod handles;
mod shapes;
mod world;

pub use handles::BodyId;
pub use shapes::moment_for_circle;
pub use world::PhysicsWorld;
#[cfg(test)]
pub(crate) use world::live_worlds;
