// VIEW: what the renderer is handed each frame
pub mod faces;
pub mod palette;

pub use faces::{collect_visible_faces, FaceBatch, FaceInstance};
pub use palette::{block_color, face_color, face_shade};
