pub mod block;
pub mod grid;
pub mod terrain;
pub mod visibility;

pub use block::{Block, Face};
pub use grid::{Grid, WORLD_SIZE};
pub use terrain::{HeightMap, TerrainConfig, TerrainGenerator};
pub use visibility::{is_face_visible, visible_face_count};
