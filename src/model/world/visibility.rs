use crate::utils::WorldCoord;
use super::block::{Block, Face};
use super::grid::Grid;

/// Whether `face` of the cell at (x, y, z) can ever be seen.
///
/// - an empty cell shows nothing
/// - a face on the world edge always shows
/// - otherwise the face shows when the neighbour across it is empty, or when
///   an opaque cell borders a transparent one. Two transparent cells side by
///   side hide their shared face.
pub fn is_face_visible(grid: &Grid, x: i32, y: i32, z: i32, face: Face) -> bool {
    let coord = WorldCoord(x, y, z);
    if !coord.is_in_bounds() {
        return false;
    }

    let block = grid.get_block(&coord);
    if block.is_empty() {
        return false;
    }

    let neighbor_coord = coord.offset(face);
    if !neighbor_coord.is_in_bounds() {
        return true;
    }

    let neighbor = grid.get_block(&neighbor_coord);
    neighbor == Block::Empty || (neighbor.is_transparent() && !block.is_transparent())
}

/// Number of visible faces of a single cell, 0..=6.
pub fn visible_face_count(grid: &Grid, x: i32, y: i32, z: i32) -> usize {
    Face::ALL
        .iter()
        .filter(|face| is_face_visible(grid, x, y, z, **face))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::world::WORLD_SIZE;

    #[test]
    fn enclosed_block_has_no_visible_faces() {
        let mut grid = Grid::new_empty();
        grid.set(10, 10, 10, Block::Grass);
        for face in Face::ALL {
            let (dx, dy, dz) = face.offset();
            grid.set(10 + dx, 10 + dy, 10 + dz, Block::Stone);
        }
        assert_eq!(visible_face_count(&grid, 10, 10, 10), 0);
    }

    #[test]
    fn empty_cell_shows_nothing_even_when_surrounded() {
        let mut grid = Grid::new_empty();
        for face in Face::ALL {
            let (dx, dy, dz) = face.offset();
            grid.set(10 + dx, 10 + dy, 10 + dz, Block::Stone);
        }
        assert_eq!(visible_face_count(&grid, 10, 10, 10), 0);
        assert_eq!(visible_face_count(&grid, 30, 30, 30), 0);
    }

    #[test]
    fn lone_block_shows_all_faces() {
        let mut grid = Grid::new_empty();
        grid.set(10, 10, 10, Block::Grass);
        assert_eq!(visible_face_count(&grid, 10, 10, 10), 6);
    }

    #[test]
    fn world_edge_faces_always_show() {
        let mut grid = Grid::new_empty();
        let last = WORLD_SIZE - 1;
        grid.set(0, 5, 5, Block::Stone);
        grid.set(1, 5, 5, Block::Stone);
        grid.set(last, last, last, Block::Sand);

        assert!(is_face_visible(&grid, 0, 5, 5, Face::NegX));
        assert!(!is_face_visible(&grid, 0, 5, 5, Face::PosX));
        assert!(is_face_visible(&grid, last, last, last, Face::PosX));
        assert!(is_face_visible(&grid, last, last, last, Face::PosY));
        assert!(is_face_visible(&grid, last, last, last, Face::PosZ));
    }

    #[test]
    fn edge_block_with_solid_inner_neighbours_still_shows_edge_face() {
        let mut grid = Grid::new_empty();
        grid.set(0, 0, 0, Block::Stone);
        for face in [Face::PosX, Face::PosY, Face::PosZ] {
            let (dx, dy, dz) = face.offset();
            grid.set(dx, dy, dz, Block::Stone);
        }
        assert_eq!(visible_face_count(&grid, 0, 0, 0), 3);
        assert!(is_face_visible(&grid, 0, 0, 0, Face::NegY));
    }

    #[test]
    fn opaque_next_to_water_shows_but_water_next_to_water_hides() {
        let mut grid = Grid::new_empty();
        grid.set(10, 10, 10, Block::Stone);
        grid.set(11, 10, 10, Block::Water);
        grid.set(12, 10, 10, Block::Water);

        assert!(is_face_visible(&grid, 10, 10, 10, Face::PosX));
        assert!(!is_face_visible(&grid, 11, 10, 10, Face::PosX));
        // water against stone is hidden from the water side
        assert!(!is_face_visible(&grid, 11, 10, 10, Face::NegX));
        // water against air shows
        assert!(is_face_visible(&grid, 12, 10, 10, Face::PosX));
    }

    #[test]
    fn out_of_bounds_cell_has_no_faces() {
        let grid = Grid::new_empty();
        assert!(!is_face_visible(&grid, -1, 0, 0, Face::PosX));
        assert!(!is_face_visible(&grid, WORLD_SIZE, 0, 0, Face::NegX));
    }
}
