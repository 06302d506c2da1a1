use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::{Aabb, Block, Grid, Occupant};
use crate::utils::WorldCoord;
use super::collision::overlaps_solid;
use super::input::OccupantInput;

/// Tunable movement constants.
///
/// Velocities are in cells per tick and accelerations in cells per tick²:
/// the simulation advances one fixed step per frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupantConfig {
    // Movement
    pub move_speed: f32,
    pub jump_force: f32,
    pub swim_speed: f32,
    pub water_movement_factor: f32,

    // Vertical forces
    pub gravity: f32,
    pub buoyancy: f32,
    pub surface_buoyancy_factor: f32,
    pub underwater_gravity_factor: f32,
    pub surface_gravity_factor: f32,
    pub water_max_vertical_speed: f32,
    /// Share of the water speed cap allowed while not swimming actively.
    pub passive_float_speed_factor: f32,
    pub transition_damping: f32,
    /// Share of the buoyancy added once when leaving water.
    pub exit_boost_factor: f32,

    // Look
    pub mouse_sensitivity: f32,
    pub pitch_limit: f32,

    // Body
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub head_height_factor: f32,
    pub feet_sensor_depth: f32,
    pub spawn: [f32; 3],
}

impl Default for OccupantConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.1,
            jump_force: 0.15,
            swim_speed: 0.01,
            water_movement_factor: 0.5,

            gravity: 0.005,
            buoyancy: 0.004,
            surface_buoyancy_factor: 1.5,
            underwater_gravity_factor: 0.3,
            surface_gravity_factor: 0.6,
            water_max_vertical_speed: 0.08,
            passive_float_speed_factor: 0.5,
            transition_damping: 0.7,
            exit_boost_factor: 0.5,

            mouse_sensitivity: 0.003,
            pitch_limit: 1.5,

            width: 0.6,
            height: 1.8,
            depth: 0.6,
            head_height_factor: 0.9,
            feet_sensor_depth: 0.1,
            spawn: [32.0, 48.0, 32.0],
        }
    }
}

impl OccupantConfig {
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

/// Handles occupant movement: desired velocity from input, gravity and
/// buoyancy, integration and collision against the grid.
#[derive(Clone, Debug, Default)]
pub struct PhysicsSystem {
    pub config: OccupantConfig,
}

impl PhysicsSystem {
    pub fn new() -> Self {
        Self::with_config(OccupantConfig::default())
    }

    pub fn with_config(config: OccupantConfig) -> Self {
        Self { config }
    }

    /// A fresh occupant at the configured spawn point.
    pub fn spawn(&self) -> Occupant {
        Occupant::new(
            Vec3::from(self.config.spawn),
            self.config.size(),
            self.config.head_height_factor,
        )
    }

    /// Input phase: rebuild horizontal velocity and apply jump/swim controls.
    ///
    /// Horizontal velocity is recomputed from scratch every tick so nothing
    /// accumulates when no key is held.
    pub fn apply_input(&self, occupant: &mut Occupant, input: &OccupantInput) {
        let c = &self.config;

        let mut wish = Vec3::ZERO;
        if input.forward {
            wish += occupant.forward();
        }
        if input.backward {
            wish -= occupant.forward();
        }
        if input.right {
            wish += occupant.right();
        }
        if input.left {
            wish -= occupant.right();
        }

        let speed = if occupant.in_water {
            c.move_speed * c.water_movement_factor
        } else {
            c.move_speed
        };
        occupant.velocity.x = wish.x * speed;
        occupant.velocity.z = wish.z * speed;

        if input.ascend {
            if occupant.in_water {
                occupant.velocity.y += c.swim_speed;
            } else if occupant.grounded {
                occupant.velocity.y = c.jump_force;
                occupant.jumping = true;
                occupant.grounded = false;
                debug!(y = occupant.position.y, "jump");
            }
        }

        if input.descend && occupant.in_water {
            occupant.velocity.y -= c.swim_speed;
        }
    }

    /// Reads the cells at the occupant's feet and head.
    /// Returns `(in_water, submerged)`.
    pub fn sample_water(&self, occupant: &Occupant, grid: &Grid) -> (bool, bool) {
        let feet = WorldCoord::from_position(occupant.position);
        let head_y = (occupant.position.y + occupant.head_height()).floor() as i32;

        let at_feet = grid.get_block(&feet);
        let at_head = grid.get(feet.0, head_y, feet.2);

        let in_water = at_feet == Block::Water || at_head == Block::Water;
        let submerged = at_head == Block::Water;
        (in_water, submerged)
    }

    /// Physics phase: gravity and buoyancy, integration, collision resolution.
    pub fn update(&self, occupant: &mut Occupant, grid: &Grid, input: &OccupantInput) {
        let old_position = occupant.position;
        let was_in_water = occupant.in_water;
        let was_submerged = occupant.submerged;
        let was_grounded = occupant.grounded;

        (occupant.in_water, occupant.submerged) = self.sample_water(occupant, grid);

        self.apply_vertical_forces(
            occupant,
            was_in_water,
            was_submerged,
            input.is_swimming_actively(),
        );

        occupant.position += occupant.velocity;

        self.resolve_collisions(occupant, grid, old_position);

        // world floor
        if occupant.position.y < 0.0 {
            occupant.position.y = 0.0;
            occupant.velocity.y = 0.0;
            occupant.grounded = true;
        }

        if occupant.grounded && !was_grounded {
            occupant.jumping = false;
            debug!(y = occupant.position.y, "landed");
        }
    }

    /// Runs both phases for one tick.
    ///
    /// Orientation is left untouched: `input.look_delta` belongs to
    /// `CameraController::apply_look`, which `FrameLoop::tick` runs before this.
    pub fn step(&self, occupant: &mut Occupant, grid: &Grid, input: &OccupantInput) {
        self.apply_input(occupant, input);
        self.update(occupant, grid, input);
    }

    fn apply_vertical_forces(
        &self,
        occupant: &mut Occupant,
        was_in_water: bool,
        was_submerged: bool,
        swimming_actively: bool,
    ) {
        let c = &self.config;
        let vy = &mut occupant.velocity.y;

        if occupant.in_water {
            let (gravity_factor, buoyancy) = if occupant.submerged {
                (c.underwater_gravity_factor, c.buoyancy)
            } else {
                (c.surface_gravity_factor, c.buoyancy * c.surface_buoyancy_factor)
            };

            if !occupant.grounded {
                *vy += buoyancy;
            }
            *vy -= c.gravity * gravity_factor;

            if was_in_water != occupant.in_water || was_submerged != occupant.submerged {
                *vy *= c.transition_damping;
                debug!(submerged = occupant.submerged, "water regime changed");
            }

            let max_speed = if swimming_actively {
                c.water_max_vertical_speed
            } else {
                c.water_max_vertical_speed * c.passive_float_speed_factor
            };
            *vy = (*vy).clamp(-max_speed, max_speed);
        } else {
            if !occupant.grounded {
                *vy -= c.gravity;
            }

            if was_in_water {
                *vy += c.buoyancy * c.exit_boost_factor;
                debug!("left water");
            }
        }
    }

    /// Thin box just below the feet, used to decide whether we stand on something.
    fn feet_sensor(&self, occupant: &Occupant) -> Aabb {
        let depth = self.config.feet_sensor_depth;
        let feet = occupant.position - Vec3::new(0.0, depth, 0.0);
        Aabb::from_feet(feet, Vec3::new(occupant.size.x, depth, occupant.size.z))
    }

    /// Undo the move one axis at a time (X, then Z, then Y) until the box is free.
    fn resolve_collisions(&self, occupant: &mut Occupant, grid: &Grid, old_position: Vec3) {
        if !overlaps_solid(grid, &occupant.bounding_box()) {
            occupant.grounded = overlaps_solid(grid, &self.feet_sensor(occupant));
            return;
        }

        occupant.position.x = old_position.x;
        if !overlaps_solid(grid, &occupant.bounding_box()) {
            trace!("collision resolved on x");
            return;
        }

        occupant.position.z = old_position.z;
        if !overlaps_solid(grid, &occupant.bounding_box()) {
            trace!("collision resolved on x, z");
            return;
        }

        occupant.position.y = old_position.y;
        if occupant.velocity.y < 0.0 {
            occupant.grounded = true;
        }
        occupant.velocity.y = 0.0;
        trace!("collision resolved on x, z, y");
    }
}
