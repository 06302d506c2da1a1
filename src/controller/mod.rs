// CONTROLLER: input, movement physics and the per-tick update loop
pub mod camera_controller;
pub mod collision;
pub mod frame_loop;
pub mod input;
pub mod physics;

pub use camera_controller::CameraController;
pub use collision::overlaps_solid;
pub use frame_loop::FrameLoop;
pub use input::{InputEvent, InputProcessor, InputState, KeyBindings, OccupantInput};
pub use physics::{OccupantConfig, PhysicsSystem};
