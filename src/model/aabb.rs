use glam::Vec3;

/// Axis-aligned box between two corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The unit cube of cell (x, y, z).
    pub fn for_block(x: i32, y: i32, z: i32) -> Self {
        let min = Vec3::new(x as f32, y as f32, z as f32);
        Self { min, max: min + Vec3::ONE }
    }

    /// Box of `size` centred on `feet` in X/Z and standing on it in Y.
    pub fn from_feet(feet: Vec3, size: Vec3) -> Self {
        let half = Vec3::new(size.x * 0.5, 0.0, size.z * 0.5);
        Self {
            min: feet - half,
            max: feet + Vec3::new(half.x, size.y, half.z),
        }
    }

    /// Overlap test. Inclusive: boxes that merely touch count as overlapping.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
            && self.max.z >= other.min.z
            && self.min.z <= other.max.z
    }
}
