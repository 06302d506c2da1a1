use crate::model::{Block, Face};

/// RGBA tint per block kind, indexed by `Block` ordinal.
const BLOCK_COLORS: [[u8; 4]; Block::COUNT] = [
    [0, 0, 0, 0],         // Empty
    [34, 139, 34, 255],   // Grass: forest green
    [210, 180, 140, 255], // Sand: tan
    [128, 128, 128, 255], // Stone: grey
    [223, 64, 64, 150],   // Water: semi-transparent
];

pub fn block_color(block: Block) -> [f32; 4] {
    BLOCK_COLORS[block.to_u8() as usize].map(|c| c as f32 / 255.0)
}

/// Brightness multiplier per face so cube edges read without lighting.
pub fn face_shade(face: Face) -> f32 {
    match face {
        Face::PosX => 0.9,
        Face::NegX => 0.8,
        Face::PosY => 1.0,
        Face::NegY => 0.7,
        Face::PosZ => 0.85,
        Face::NegZ => 0.75,
    }
}

/// Block tint shaded for `face`. Alpha is left untouched.
pub fn face_color(block: Block, face: Face) -> [f32; 4] {
    let [r, g, b, a] = block_color(block);
    let shade = face_shade(face);
    [r * shade, g * shade, b * shade, a]
}
