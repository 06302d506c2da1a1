use glam::Vec3;

use super::aabb::Aabb;

/// Movement regime, derived from the occupant's status flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    Ground,
    Airborne,
    WaterSurface,
    Submerged,
}

/// The first-person body walking through the world.
///
/// Mutated only by the controller's input and physics phases.
#[derive(Clone, Debug, PartialEq)]
pub struct Occupant {
    /// Feet position: centre of the collision box in X/Z, its bottom in Y.
    pub position: Vec3,
    pub velocity: Vec3,
    /// Collision box extent (width, height, depth).
    pub size: Vec3,
    /// Fraction of the height at which the head (and eye) sits.
    pub head_height_factor: f32,

    pub yaw: f32,
    pub pitch: f32,

    pub grounded: bool,
    pub jumping: bool,
    pub in_water: bool,
    pub submerged: bool,
}

impl Occupant {
    pub fn new(position: Vec3, size: Vec3, head_height_factor: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            size,
            head_height_factor,
            yaw: 0.0,
            pitch: 0.0,
            grounded: false,
            jumping: false,
            in_water: false,
            submerged: false,
        }
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_feet(self.position, self.size)
    }

    pub fn head_height(&self) -> f32 {
        self.size.y * self.head_height_factor
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.head_height(), 0.0)
    }

    /// Horizontal unit vector the occupant faces.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Horizontal unit vector to the occupant's right (forward × up).
    pub fn right(&self) -> Vec3 {
        Vec3::new(-self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Unit view direction including pitch.
    pub fn look_direction(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, sp, cy * cp)
    }

    pub fn regime(&self) -> Regime {
        match (self.in_water, self.submerged, self.grounded) {
            (true, true, _) => Regime::Submerged,
            (true, false, _) => Regime::WaterSurface,
            (false, _, true) => Regime::Ground,
            (false, _, false) => Regime::Airborne,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupant() -> Occupant {
        Occupant::new(Vec3::new(32.0, 10.0, 32.0), Vec3::new(0.6, 1.8, 0.6), 0.9)
    }

    #[test]
    fn right_is_forward_cross_up() {
        let mut o = occupant();
        for yaw in [0.0_f32, 0.7, -2.1, 3.0] {
            o.yaw = yaw;
            let expected = o.forward().cross(Vec3::Y);
            assert!((o.right() - expected).length() < 1e-5);
        }
    }

    #[test]
    fn look_direction_is_unit_and_follows_pitch() {
        let mut o = occupant();
        o.yaw = 1.2;
        o.pitch = 0.4;
        let dir = o.look_direction();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!((dir.y - 0.4_f32.sin()).abs() < 1e-6);
    }

    #[test]
    fn eye_sits_at_ninety_percent_of_height() {
        let o = occupant();
        assert!((o.eye_position().y - 11.62).abs() < 1e-4);
    }

    #[test]
    fn regime_from_flags() {
        let mut o = occupant();
        assert_eq!(o.regime(), Regime::Airborne);
        o.grounded = true;
        assert_eq!(o.regime(), Regime::Ground);
        o.in_water = true;
        assert_eq!(o.regime(), Regime::WaterSurface);
        o.submerged = true;
        assert_eq!(o.regime(), Regime::Submerged);
    }
}
