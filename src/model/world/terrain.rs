// terrain.rs - one-shot terrain generation for the fixed-size world
//
// ============================================================================
// GENERATION PIPELINE
// ============================================================================
//
// STEP 1: Height field (2D value noise, three octaves)
//   → base scale weight 1, double scale weight 0.5, quadruple scale weight 0.25
//   → remapped to [0, 1], then scaled and offset to an absolute height
//
// STEP 2: Sand noise (2D value noise, independent scale)
//   → remapped to [0, 1]; decides sand vs grass on the surface layers
//
// STEP 3: Column fill
//   → above the floored height: Empty
//   → the height cell and `surface_depth` cells below: Sand or Grass
//   → deeper: Stone
//
// STEP 4: Water fill
//   → empty cells above the height up to `water_level` become Water
//   → never displaces terrain
//
// The noise is a pure function of integer lattice coordinates, so two runs
// with the same config produce identical worlds.
//

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::block::Block;
use super::grid::{Grid, WORLD_SIZE};

// ============================================================================
// NOISE FUNCTIONS
// ============================================================================

const HASH_MODULUS: i32 = 100_000;

/// (scale multiplier, weight) for each octave of the height field
const HEIGHT_OCTAVES: [(f32, f32); 3] = [(1.0, 1.0), (2.0, 0.5), (4.0, 0.25)];

/// Hashes an integer lattice point to a value in [0, 1).
fn lattice_hash(x: i32, z: i32) -> f32 {
    let n = x.wrapping_mul(73_856_093) ^ z.wrapping_mul(19_349_663);
    n.rem_euclid(HASH_MODULUS) as f32 / HASH_MODULUS as f32
}

/// Cubic smoothstep.
pub fn fade(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// 2D value noise in [-1, 1].
///
/// The coordinates are multiplied by `scale`, the four corners of the
/// surrounding lattice cell are hashed and then blended bilinearly with
/// faded weights.
pub fn value_noise2d(x: f32, z: f32, scale: f32) -> f32 {
    let x = x * scale;
    let z = z * scale;

    let x0 = x.floor() as i32;
    let z0 = z.floor() as i32;
    let x1 = x0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let u = fade(x - x0 as f32);
    let v = fade(z - z0 as f32);

    let n00 = lattice_hash(x0, z0);
    let n10 = lattice_hash(x1, z0);
    let n01 = lattice_hash(x0, z1);
    let n11 = lattice_hash(x1, z1);

    let nx0 = lerp(n00, n10, u);
    let nx1 = lerp(n01, n11, u);
    2.0 * lerp(nx0, nx1, v) - 1.0
}

// ============================================================================
// TERRAIN CONFIGURATION
// ============================================================================

/// Parameters for terrain generation.
///
/// Usage:
///   let gen = TerrainGenerator::new();
///
///   let mut config = TerrainConfig::default();
///   config.water_level = 10;     // drier world
///   let gen = TerrainGenerator::with_config(config);
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    // Height field
    pub noise_scale: f32,
    pub height_scale: f32,
    pub height_offset: f32,

    // Surface material
    pub sand_height_threshold: i32,
    pub beach_noise_threshold: f32,
    pub sand_noise_frequency: f32,
    pub sand_noise_scale_factor: f32,
    /// Surface material layers below the top cell.
    pub surface_depth: i32,

    // Water
    pub water_level: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            noise_scale: 0.1,
            height_scale: 20.0,
            height_offset: 10.0,

            sand_height_threshold: 12,
            beach_noise_threshold: 0.3,
            sand_noise_frequency: 2.5,
            sand_noise_scale_factor: 3.0,
            surface_depth: 3,

            water_level: 14,
        }
    }
}

// ============================================================================
// HEIGHT MAP
// ============================================================================

/// Per-column terrain height, indexed `x + z * WORLD_SIZE`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightMap {
    heights: Vec<f32>,
}

impl HeightMap {
    fn idx(x: i32, z: i32) -> Option<usize> {
        if (0..WORLD_SIZE).contains(&x) && (0..WORLD_SIZE).contains(&z) {
            Some((x + z * WORLD_SIZE) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: i32, z: i32) -> Option<f32> {
        Self::idx(x, z).map(|i| self.heights[i])
    }

    /// Floored height of the column, i.e. the y of its top terrain cell.
    pub fn surface_height(&self, x: i32, z: i32) -> Option<i32> {
        self.get(x, z).map(|h| h.floor() as i32)
    }

    pub fn min_max(&self) -> (f32, f32) {
        self.heights
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), h| (lo.min(*h), hi.max(*h)))
    }
}

// ============================================================================
// TERRAIN GENERATOR
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct TerrainGenerator {
    pub config: TerrainConfig,
}

impl TerrainGenerator {
    pub fn new() -> Self {
        Self {
            config: TerrainConfig::default(),
        }
    }

    pub fn with_config(config: TerrainConfig) -> Self {
        Self { config }
    }

    /// STEP 1: absolute terrain height of column (x, z).
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let noise: f32 = HEIGHT_OCTAVES
            .iter()
            .map(|(mult, weight)| weight * value_noise2d(x, z, self.config.noise_scale * mult))
            .sum();

        let normalized = (noise + 1.0) * 0.5;
        normalized * self.config.height_scale + self.config.height_offset
    }

    /// STEP 2: sand-patch noise of column (x, z), in [0, 1].
    pub fn sand_noise_at(&self, x: f32, z: f32) -> f32 {
        let freq = self.config.sand_noise_frequency;
        let noise = value_noise2d(
            x * freq,
            z * freq,
            self.config.noise_scale * self.config.sand_noise_scale_factor,
        );
        (noise + 1.0) * 0.5
    }

    pub fn height_map(&self) -> HeightMap {
        let mut heights = vec![0.0; (WORLD_SIZE * WORLD_SIZE) as usize];
        for z in 0..WORLD_SIZE {
            for x in 0..WORLD_SIZE {
                heights[(x + z * WORLD_SIZE) as usize] = self.height_at(x as f32, z as f32);
            }
        }
        HeightMap { heights }
    }

    /// Floored terrain height of column (x, z).
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        self.height_at(x as f32, z as f32).floor() as i32
    }

    fn surface_block(&self, y: i32, sand_noise: f32) -> Block {
        if y < self.config.sand_height_threshold || sand_noise > self.config.beach_noise_threshold {
            Block::Sand
        } else {
            Block::Grass
        }
    }

    /// STEP 3: fill one column from the bottom of the world to the top.
    fn fill_column(&self, grid: &mut Grid, x: i32, z: i32, surface: i32, sand_noise: f32) {
        for y in 0..WORLD_SIZE {
            let block = if y > surface {
                Block::Empty
            } else if y >= surface - self.config.surface_depth {
                self.surface_block(y, sand_noise)
            } else {
                Block::Stone
            };
            grid.set(x, y, z, block);
        }
    }

    /// STEP 4: flood one column with water from above its surface to the water level.
    fn flood_column(&self, grid: &mut Grid, x: i32, z: i32, surface: i32) -> usize {
        let mut filled = 0;
        for y in (surface + 1)..=self.config.water_level {
            if grid.fill_if_empty(x, y, z, Block::Water) {
                filled += 1;
            }
        }
        filled
    }

    /// Populates `grid` in place and returns the height map used.
    #[tracing::instrument(skip_all, fields(water_level = self.config.water_level))]
    pub fn generate(&self, grid: &mut Grid) -> HeightMap {
        let height_map = self.height_map();

        for z in 0..WORLD_SIZE {
            for x in 0..WORLD_SIZE {
                let surface = height_map.surface_height(x, z).unwrap_or(0);
                let sand_noise = self.sand_noise_at(x as f32, z as f32);
                self.fill_column(grid, x, z, surface, sand_noise);
            }
        }

        let mut water_cells = 0;
        for z in 0..WORLD_SIZE {
            for x in 0..WORLD_SIZE {
                let surface = height_map.surface_height(x, z).unwrap_or(0);
                water_cells += self.flood_column(grid, x, z, surface);
            }
        }

        let (min_h, max_h) = height_map.min_max();
        debug!(min_h, max_h, "height field");
        debug!(
            grass = grid.count(Block::Grass),
            sand = grid.count(Block::Sand),
            stone = grid.count(Block::Stone),
            "surface materials"
        );
        info!(
            filled = grid.filled_count(),
            water = water_cells,
            "terrain generated"
        );

        height_map
    }

    /// Convenience: a fresh grid populated with terrain.
    pub fn generate_world(&self) -> (Grid, HeightMap) {
        let mut grid = Grid::new_empty();
        let height_map = self.generate(&mut grid);
        (grid, height_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_stays_in_range() {
        for i in 0..200 {
            let x = i as f32 * 0.73 - 40.0;
            let z = i as f32 * 1.31 - 90.0;
            let n = value_noise2d(x, z, 0.1);
            assert!((-1.0..=1.0).contains(&n), "noise {n} out of range at ({x}, {z})");
        }
    }

    #[test]
    fn noise_matches_corner_hash_on_lattice_points() {
        // On a lattice point the fractional offsets vanish and only n00 remains.
        let n = value_noise2d(3.0, 7.0, 1.0);
        assert_eq!(n, 2.0 * lattice_hash(3, 7) - 1.0);
    }

    #[test]
    fn fade_is_a_smoothstep() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
        assert!(fade(0.1) < 0.1);
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = TerrainGenerator::new();
        let (a, heights_a) = generator.generate_world();
        let (b, heights_b) = generator.generate_world();
        assert_eq!(a, b);
        assert_eq!(heights_a, heights_b);
    }

    #[test]
    fn columns_are_layered() {
        let generator = TerrainGenerator::new();
        let (grid, heights) = generator.generate_world();
        let config = generator.config;

        for (x, z) in [(0, 0), (17, 40), (32, 32), (63, 5), (50, 63)] {
            let surface = heights.surface_height(x, z).unwrap();
            assert!(surface >= 0 && surface < WORLD_SIZE);

            for y in (surface - config.surface_depth).max(0)..=surface {
                let block = grid.get(x, y, z);
                assert!(matches!(block, Block::Sand | Block::Grass));
                if y < config.sand_height_threshold {
                    assert_eq!(block, Block::Sand);
                }
            }
            for y in 0..(surface - config.surface_depth) {
                assert_eq!(grid.get(x, y, z), Block::Stone);
            }
            for y in (surface + 1)..WORLD_SIZE {
                let expected = if y <= config.water_level { Block::Water } else { Block::Empty };
                assert_eq!(grid.get(x, y, z), expected);
            }
        }
    }

    #[test]
    fn low_columns_are_sand() {
        let generator = TerrainGenerator::new();
        let (grid, heights) = generator.generate_world();
        for z in 0..WORLD_SIZE {
            for x in 0..WORLD_SIZE {
                let surface = heights.surface_height(x, z).unwrap();
                if surface < generator.config.sand_height_threshold {
                    assert_eq!(grid.get(x, surface, z), Block::Sand);
                }
            }
        }
    }

    #[test]
    fn water_never_replaces_terrain() {
        let config = TerrainConfig {
            water_level: WORLD_SIZE - 1,
            ..TerrainConfig::default()
        };
        let generator = TerrainGenerator::with_config(config);
        let (grid, heights) = generator.generate_world();
        for z in 0..WORLD_SIZE {
            for x in 0..WORLD_SIZE {
                let surface = heights.surface_height(x, z).unwrap();
                assert!(grid.get(x, surface, z).is_solid());
                if surface + 1 < WORLD_SIZE {
                    assert_eq!(grid.get(x, surface + 1, z), Block::Water);
                }
            }
        }
    }

    #[test]
    fn height_field_stays_inside_world() {
        let (lo, hi) = TerrainGenerator::new().height_map().min_max();
        assert!(lo >= 0.0);
        assert!(hi < WORLD_SIZE as f32);
    }
}
