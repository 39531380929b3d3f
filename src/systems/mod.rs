pub mod physics_world;
