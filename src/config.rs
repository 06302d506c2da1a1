use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controller::input::KeyBindings;
use crate::controller::physics::OccupantConfig;
use crate::model::world::{TerrainConfig, WORLD_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything needed to build and drive a world.
///
/// Every section is optional in JSON; missing fields keep their defaults:
///
/// ```json
/// { "terrain": { "water_level": 10 }, "render_distance": 32 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub terrain: TerrainConfig,
    pub occupant: OccupantConfig,
    pub bindings: KeyBindings,
    /// Edge length, in cells, of the window of faces handed to the renderer.
    pub render_distance: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            terrain: TerrainConfig::default(),
            occupant: OccupantConfig::default(),
            bindings: KeyBindings::default(),
            render_distance: 48,
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.terrain;
        if !(0..WORLD_SIZE).contains(&t.water_level) {
            return Err(ConfigError::Invalid(format!(
                "terrain.water_level {} outside 0..{WORLD_SIZE}",
                t.water_level
            )));
        }
        if t.surface_depth < 0 {
            return Err(ConfigError::Invalid("terrain.surface_depth must not be negative".into()));
        }

        let o = &self.occupant;
        if o.spawn.iter().any(|c| !(0.0..WORLD_SIZE as f32).contains(c)) {
            return Err(ConfigError::Invalid(format!(
                "occupant.spawn {:?} outside the world",
                o.spawn
            )));
        }
        if o.width <= 0.0 || o.height <= 0.0 || o.depth <= 0.0 {
            return Err(ConfigError::Invalid("occupant collision box must be positive".into()));
        }
        let speeds = [
            ("move_speed", o.move_speed),
            ("jump_force", o.jump_force),
            ("swim_speed", o.swim_speed),
            ("gravity", o.gravity),
            ("buoyancy", o.buoyancy),
            ("water_max_vertical_speed", o.water_max_vertical_speed),
        ];
        if let Some((name, _)) = speeds.iter().find(|(_, v)| *v < 0.0 || !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("occupant.{name} must be a non-negative number")));
        }

        if self.render_distance <= 0 {
            return Err(ConfigError::Invalid("render_distance must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.render_distance, 48);
        assert_eq!(config.terrain.water_level, 14);
        assert_eq!(config.occupant.spawn, [32.0, 48.0, 32.0]);
    }

    #[test]
    fn partial_json_overrides_named_fields_only() {
        let config = SimConfig::from_json_str(
            r#"{ "terrain": { "water_level": 10 }, "occupant": { "move_speed": 0.2 } }"#,
        )
        .unwrap();
        assert_eq!(config.terrain.water_level, 10);
        assert_eq!(config.terrain.noise_scale, 0.1);
        assert_eq!(config.occupant.move_speed, 0.2);
        assert_eq!(config.occupant.gravity, 0.005);
        assert_eq!(config.bindings, KeyBindings::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SimConfig::from_json_str("{}").unwrap(), SimConfig::default());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(SimConfig::from_json_str("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_out_of_range_values() {
        for text in [
            r#"{ "terrain": { "water_level": 64 } }"#,
            r#"{ "occupant": { "spawn": [32.0, -1.0, 32.0] } }"#,
            r#"{ "occupant": { "height": 0.0 } }"#,
            r#"{ "occupant": { "gravity": -0.1 } }"#,
            r#"{ "render_distance": 0 }"#,
        ] {
            assert!(
                matches!(SimConfig::from_json_str(text), Err(ConfigError::Invalid(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimConfig::load(Path::new("/nonexistent/blockworld.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/blockworld.json"));
    }
}
