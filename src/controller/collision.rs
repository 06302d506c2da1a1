use crate::model::{Aabb, Grid, WORLD_SIZE};

/// Whether `aabb` overlaps any solid cell of the grid.
///
/// Walks every cell between the floor of the box's min corner and the ceil of
/// its max corner (clamped to the world) and tests each solid one. Water and
/// empty cells never collide.
pub fn overlaps_solid(grid: &Grid, aabb: &Aabb) -> bool {
    let clamp = |v: f32| (v as i64).clamp(0, WORLD_SIZE as i64 - 1) as i32;

    let (min_x, max_x) = (clamp(aabb.min.x.floor()), clamp(aabb.max.x.ceil()));
    let (min_y, max_y) = (clamp(aabb.min.y.floor()), clamp(aabb.max.y.ceil()));
    let (min_z, max_z) = (clamp(aabb.min.z.floor()), clamp(aabb.max.z.ceil()));

    for x in min_x..=max_x {
        for y in min_y..=max_y {
            for z in min_z..=max_z {
                if !grid.get(x, y, z).is_solid() {
                    continue;
                }
                if aabb.intersects(&Aabb::for_block(x, y, z)) {
                    return true;
                }
            }
        }
    }

    false
}
