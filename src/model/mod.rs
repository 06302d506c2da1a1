// MODEL: world and occupant state
pub mod aabb;
pub mod camera;
pub mod occupant;
pub mod world;

pub use aabb::Aabb;
pub use camera::Camera;
pub use occupant::{Occupant, Regime};
pub use world::{Block, Face, Grid, WORLD_SIZE};
