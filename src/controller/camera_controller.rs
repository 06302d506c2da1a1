use crate::model::{Camera, Occupant};

/// Pointer look and camera placement for the occupant.
#[derive(Clone, Debug)]
pub struct CameraController {
    pub mouse_sensitivity: f32,
    /// Pitch is kept within ±this many radians so the view never flips.
    pub pitch_limit: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(0.003, 1.5)
    }
}

impl CameraController {
    pub fn new(mouse_sensitivity: f32, pitch_limit: f32) -> Self {
        Self {
            mouse_sensitivity,
            pitch_limit,
        }
    }

    /// Apply a pointer delta to the occupant's orientation.
    pub fn apply_look(&self, occupant: &mut Occupant, dx: f32, dy: f32) {
        occupant.yaw -= dx * self.mouse_sensitivity;
        occupant.pitch = (occupant.pitch - dy * self.mouse_sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Put the camera at the occupant's eye, looking where the occupant looks.
    pub fn sync_camera_from_occupant(&self, camera: &mut Camera, occupant: &Occupant) {
        camera.eye = occupant.eye_position();
        camera.yaw = occupant.yaw;
        camera.pitch = occupant.pitch;
        camera.up = glam::Vec3::Y;
    }
}
