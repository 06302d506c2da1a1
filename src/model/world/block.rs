/// Kinds of cell the grid can hold.
///
/// The discriminants are a contract with the presentation layer's colour
/// table (see `view::palette`): new kinds must be appended, never inserted.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Block {
    #[default]
    Empty = 0,
    Grass = 1,
    Sand = 2,
    Stone = 3,
    // semi-transparent, passable, drives swimming physics
    Water = 4,
}

impl Block {
    pub const COUNT: usize = 5;

    pub const ALL: [Block; Block::COUNT] = [
        Block::Empty,
        Block::Grass,
        Block::Sand,
        Block::Stone,
        Block::Water,
    ];

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }

    /// Empty and water let light (and the eye) through; everything else is opaque.
    pub fn is_transparent(self) -> bool {
        matches!(self, Block::Empty | Block::Water)
    }

    /// Blocks the occupant's collision box. Water is deliberately passable.
    pub fn is_solid(self) -> bool {
        !self.is_transparent()
    }
}

/// The six axis-aligned faces of a unit cell.
///
/// Order is +X, -X, +Y, -Y, +Z, -Z.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        Face::ALL.get(v as usize).copied()
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Integer step to the neighbouring cell across this face.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_stable() {
        assert_eq!(Block::Empty.to_u8(), 0);
        assert_eq!(Block::Grass.to_u8(), 1);
        assert_eq!(Block::Sand.to_u8(), 2);
        assert_eq!(Block::Stone.to_u8(), 3);
        assert_eq!(Block::Water.to_u8(), 4);
        for (i, block) in Block::ALL.iter().enumerate() {
            assert_eq!(block.to_u8() as usize, i);
        }
    }

    #[test]
    fn transparency_and_solidity() {
        assert!(Block::Empty.is_transparent());
        assert!(Block::Water.is_transparent());
        assert!(!Block::Grass.is_transparent());
        assert!(!Block::Sand.is_transparent());
        assert!(!Block::Stone.is_transparent());

        assert!(!Block::Water.is_solid());
        assert!(Block::Stone.is_solid());
    }

    #[test]
    fn faces_pair_up() {
        for face in Face::ALL {
            let (x, y, z) = face.offset();
            let (ox, oy, oz) = face.opposite().offset();
            assert_eq!((x + ox, y + oy, z + oz), (0, 0, 0));
            assert_eq!(Face::from_u8(face.to_u8()), Some(face));
        }
        assert_eq!(Face::from_u8(6), None);
    }
}
