use bytemuck::{Pod, Zeroable};

use crate::model::world::is_face_visible;
use crate::model::{Block, Face, Grid, WORLD_SIZE};
use crate::utils::WorldCoord;
use super::palette::face_color;

/// One visible cube face, as handed to the render sink.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FaceInstance {
    pub cell: [i32; 3],
    /// `Face` ordinal.
    pub face: u32,
    pub color: [f32; 4],
}

impl FaceInstance {
    pub fn face(&self) -> Option<Face> {
        Face::from_u8(self.face as u8)
    }
}

/// Visible faces split into the two passes the sink draws: opaque blocks
/// first, then transparent ones with blending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceBatch {
    pub opaque: Vec<FaceInstance>,
    pub transparent: Vec<FaceInstance>,
}

impl FaceBatch {
    pub fn len(&self) -> usize {
        self.opaque.len() + self.transparent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn opaque_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.opaque)
    }

    pub fn transparent_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.transparent)
    }
}

/// Collects every visible face inside a cube of edge `render_distance`
/// around `center`, clamped to the world.
pub fn collect_visible_faces(grid: &Grid, center: WorldCoord, render_distance: i32) -> FaceBatch {
    let half = render_distance.max(0) / 2;
    let lo = |c: i32| c.saturating_sub(half).max(0);
    let hi = |c: i32| c.saturating_add(half).min(WORLD_SIZE - 1);

    let mut batch = FaceBatch::default();

    for x in lo(center.0)..=hi(center.0) {
        for y in lo(center.1)..=hi(center.1) {
            for z in lo(center.2)..=hi(center.2) {
                let block = grid.get(x, y, z);
                if block == Block::Empty {
                    continue;
                }

                let pass = if block.is_transparent() {
                    &mut batch.transparent
                } else {
                    &mut batch.opaque
                };

                for face in Face::ALL {
                    if is_face_visible(grid, x, y, z, face) {
                        pass.push(FaceInstance {
                            cell: [x, y, z],
                            face: face.to_u8() as u32,
                            color: face_color(block, face),
                        });
                    }
                }
            }
        }
    }

    batch
}
