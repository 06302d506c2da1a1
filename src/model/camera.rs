use glam::{Mat4, Vec3};

/// First-person camera. Derived from the occupant every tick; the render sink
/// reads the matrices from here.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            up: Vec3::Y,
            fov_y: 60f32.to_radians(),
            aspect: width as f32 / height.max(1) as f32,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    /// Yaw 0 looks down +Z; positive pitch looks up.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, sp, cy * cp).normalize()
    }

    pub fn target(&self) -> Vec3 {
        self.eye + self.forward()
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target(), self.up)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orientation_looks_down_z() {
        let cam = Camera::new(800, 600);
        assert!((cam.forward() - Vec3::Z).length() < 1e-6);
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn view_proj_centres_the_look_direction() {
        let mut cam = Camera::new(800, 600);
        cam.eye = Vec3::new(12.0, 20.0, 7.0);
        cam.yaw = -0.6;
        cam.pitch = 0.3;
        let vp = cam.view_proj();

        // the eye sits at the clip-space origin (x = y = w = 0)
        let eye = vp * cam.eye.extend(1.0);
        assert!(eye.x.abs() < 1e-3 && eye.y.abs() < 1e-3 && eye.w.abs() < 1e-3);

        // a point straight ahead lands mid-screen, inside the depth range
        let ahead = vp.project_point3(cam.eye + cam.forward() * 3.0);
        assert!(ahead.x.abs() < 1e-4 && ahead.y.abs() < 1e-4);
        assert!(ahead.z > 0.0 && ahead.z < 1.0);

        // and a point behind the eye has negative w
        assert!((vp * (cam.eye - cam.forward() * 3.0).extend(1.0)).w < 0.0);
    }

    #[test]
    fn view_maps_target_onto_negative_z_axis() {
        let mut cam = Camera::new(800, 600);
        cam.eye = Vec3::new(10.0, 5.0, 10.0);
        cam.yaw = 0.8;
        let p = cam.view().transform_point3(cam.eye + cam.forward() * 3.0);
        assert!(p.x.abs() < 1e-4 && p.y.abs() < 1e-4);
        assert!((p.z + 3.0).abs() < 1e-4);
    }
}
