//! JSON configuration for equilibrium players.
//!
//! ```json
//! {
//!   "seed": 42,
//!   "params": { "b11": 0.1, "b21": 0.2, "b32": 0.5, "c11": 0.25, "c33": 0.25, "c34": 0.5 }
//! }
//! ```
//!
//! `game` is optional and defaults to three player Kuhn poker. Derived
//! parameters may be left out.
use std::path::Path;

use thiserror::Error;

use crate::equilibrium::{EquilibriumPlayer, ParameterVector, StrategyError};
use crate::game::GameShape;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub seed: u64,
    pub params: ParameterVector,
    #[serde(default)]
    pub game: GameShape,
}

impl PlayerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the player this config describes, with its seed offset by
    /// `seed_offset` so that several seats can share one config.
    pub fn build_player(&self, seed_offset: u64) -> Result<EquilibriumPlayer, ConfigError> {
        let seed = self.seed.wrapping_add(seed_offset);
        Ok(EquilibriumPlayer::new(&self.game, self.params, seed)?)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            params: ParameterVector::from_free(0.1, 0.2, 0.5, 0.25, 0.25, 0.5),
            game: GameShape::kuhn_three_player(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::equilibrium::{FamilyOneConstraint, ParamSlot};

    use super::*;

    const JSON: &str = r#"{
        "seed": 42,
        "params": {"b11": 0.1, "b21": 0.2, "b32": 0.5, "c11": 0.25, "c33": 0.25, "c34": 0.5}
    }"#;

    #[test]
    fn test_from_json() {
        let config = PlayerConfig::from_json(JSON).unwrap();
        assert_eq!(42, config.seed);
        assert_eq!(GameShape::kuhn_three_player(), config.game);
        assert_eq!(PlayerConfig::default().params, config.params);

        let player = config.build_player(2).unwrap();
        assert_eq!(44, player.seed());
        assert_eq!(0.5, player.params()[ParamSlot::C21]);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(JSON.as_bytes()).unwrap();
        let config = PlayerConfig::from_path(file.path()).unwrap();
        assert_eq!(42, config.seed);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlayerConfig::from_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::IOError(_)));
    }

    #[test]
    fn test_bad_json() {
        let err = PlayerConfig::from_json(r#"{"seed": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_bad_params() {
        let mut config = PlayerConfig::default();
        config.params[ParamSlot::B11] = 0.24;
        let err = config.build_player(0).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Strategy(StrategyError::FamilyConstraintViolated(
                FamilyOneConstraint::B11AboveB21
            ))
        ));
    }
}
