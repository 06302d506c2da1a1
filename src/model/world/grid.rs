use crate::utils::WorldCoord;
use super::block::Block;

/// Edge length of the world on every axis.
pub const WORLD_SIZE: i32 = 64;
const N_BLOCKS: usize = (WORLD_SIZE as usize).pow(3);

/// Dense, fixed-size voxel store.
///
/// Every in-bounds cell holds exactly one [`Block`]. Reads outside the world
/// behave as [`Block::Empty`] and writes outside it are ignored, so callers
/// (collision, visibility, physics) may probe past the edges freely.
#[derive(Clone)]
pub struct Grid {
    blocks: Box<[Block]>,

    // tracks number of cells that are not Block::Empty
    n_filled_blocks: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Grid {
    /// creates a new world with every cell empty
    pub fn new_empty() -> Self {
        Self {
            blocks: vec![Block::Empty; N_BLOCKS].into_boxed_slice(),
            n_filled_blocks: 0,
        }
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> Block {
        self.get_block(&WorldCoord(x, y, z))
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, block: Block) {
        self.set_block(&WorldCoord(x, y, z), block, true);
    }

    /// Writes `block` only if the cell is currently empty. Returns whether it wrote.
    pub fn fill_if_empty(&mut self, x: i32, y: i32, z: i32, block: Block) -> bool {
        self.set_block(&WorldCoord(x, y, z), block, false)
    }

    pub fn get_block(&self, coord: &WorldCoord) -> Block {
        match coord.to_block_idx() {
            Some(idx) => self.blocks[idx],
            None => Block::Empty,
        }
    }

    pub fn set_block(&mut self, coord: &WorldCoord, new: Block, overwrite: bool) -> bool {
        let Some(idx) = coord.to_block_idx() else {
            return false;
        };

        let target = &mut self.blocks[idx];
        if !(target.is_empty() || overwrite) {
            return false;
        }

        // keep track of filled cells count
        if target.is_empty() && !new.is_empty() {
            self.n_filled_blocks += 1;
        } else if !target.is_empty() && new.is_empty() {
            self.n_filled_blocks -= 1;
        }

        *target = new;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.n_filled_blocks == 0
    }

    pub fn filled_count(&self) -> usize {
        self.n_filled_blocks
    }

    /// Number of cells holding `block`. Linear scan.
    pub fn count(&self, block: Block) -> usize {
        self.blocks.iter().filter(|b| **b == block).count()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.blocks == other.blocks
    }
}

impl Eq for Grid {}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("size", &WORLD_SIZE)
            .field("filled", &self.n_filled_blocks)
            .finish()
    }
}
