use glam::Vec3;

use crate::model::world::{Face, WORLD_SIZE};

/// Integer coordinates of a cell in world space.
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
pub struct WorldCoord(pub i32, pub i32, pub i32);

impl WorldCoord {
    /// Cell containing a continuous position.
    pub fn from_position(pos: Vec3) -> Self {
        WorldCoord(
            pos.x.floor() as i32,
            pos.y.floor() as i32,
            pos.z.floor() as i32,
        )
    }

    pub fn offset(&self, face: Face) -> WorldCoord {
        let (dx, dy, dz) = face.offset();
        WorldCoord(self.0 + dx, self.1 + dy, self.2 + dz)
    }

    pub fn is_in_bounds(&self) -> bool {
        (0..WORLD_SIZE).contains(&self.0)
            && (0..WORLD_SIZE).contains(&self.1)
            && (0..WORLD_SIZE).contains(&self.2)
    }

    /// Linear offset into the dense grid, x fastest. `None` outside the world.
    pub fn to_block_idx(&self) -> Option<usize> {
        if !self.is_in_bounds() {
            return None;
        }
        let size = WORLD_SIZE as usize;
        Some(self.0 as usize + self.1 as usize * size + self.2 as usize * size * size)
    }

}
