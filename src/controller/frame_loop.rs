use tracing::{info, trace};

use crate::config::SimConfig;
use crate::model::world::{HeightMap, TerrainGenerator};
use crate::model::{Camera, Grid, Occupant};
use crate::utils::WorldCoord;
use crate::view::{collect_visible_faces, FaceBatch};
use super::camera_controller::CameraController;
use super::input::{InputEvent, InputProcessor, InputState};
use super::physics::PhysicsSystem;

/// Owns the world and everything that changes in it, and advances it one
/// fixed step at a time.
pub struct FrameLoop {
    pub grid: Grid,
    pub height_map: HeightMap,
    pub occupant: Occupant,
    pub camera: Camera,
    pub physics: PhysicsSystem,
    pub camera_controller: CameraController,
    pub input_processor: InputProcessor,
    pub input_state: InputState,
    render_distance: i32,
    ticks: u64,
}

impl FrameLoop {
    /// Generates the terrain and spawns the occupant.
    pub fn new(config: &SimConfig) -> Self {
        let generator = TerrainGenerator::with_config(config.terrain);
        let (grid, height_map) = generator.generate_world();

        let physics = PhysicsSystem::with_config(config.occupant);
        let occupant = physics.spawn();
        let camera_controller =
            CameraController::new(config.occupant.mouse_sensitivity, config.occupant.pitch_limit);

        let mut camera = Camera::new(800, 600);
        camera_controller.sync_camera_from_occupant(&mut camera, &occupant);

        info!(
            spawn = ?occupant.position,
            filled = grid.filled_count(),
            "world ready"
        );

        Self {
            grid,
            height_map,
            occupant,
            camera,
            physics,
            camera_controller,
            input_processor: InputProcessor::new(config.bindings.clone()),
            input_state: InputState::new(),
            render_distance: config.render_distance,
            ticks: 0,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input_state.process_event(event);
    }

    /// One simulation step: sample input, look, movement input, physics,
    /// then camera. Nothing else touches the occupant in between.
    pub fn tick(&mut self) {
        let input = self.input_processor.sample(&mut self.input_state);

        let (dx, dy) = input.look_delta;
        self.camera_controller.apply_look(&mut self.occupant, dx, dy);

        self.physics.apply_input(&mut self.occupant, &input);
        self.physics.update(&mut self.occupant, &self.grid, &input);

        self.camera_controller
            .sync_camera_from_occupant(&mut self.camera, &self.occupant);

        self.ticks += 1;
        trace!(tick = self.ticks, position = ?self.occupant.position, "tick");
    }

    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn render_distance(&self) -> i32 {
        self.render_distance
    }

    /// Faces the renderer should draw this frame, around the occupant.
    pub fn visible_faces(&self) -> FaceBatch {
        let center = WorldCoord::from_position(self.occupant.position);
        collect_visible_faces(&self.grid, center, self.render_distance)
    }
}
