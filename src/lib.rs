//! A bounded 64³ block world: procedural terrain, face visibility, and a
//! first-person occupant that walks, jumps and swims under fixed-step physics.

pub mod config;
pub mod logging;
pub mod utils;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

pub use config::{ConfigError, SimConfig};
pub use controller::{FrameLoop, InputEvent, PhysicsSystem};
pub use model::{Aabb, Block, Face, Grid, Occupant, WORLD_SIZE};
pub use view::{FaceBatch, FaceInstance};
