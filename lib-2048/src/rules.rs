use std::{fs, path::Path};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rules file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse rules: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("win_tile must be a power of two of at least 4, got {0}")]
    WinTile(u32),

    #[error("four_probability must be within [0, 1], got {0}")]
    FourProbability(f64),
}

/// Tunable parameters of a game.
///
/// Only built through [`Rules::new`], [`Rules::parse`] or [`Rules::load`], so every value a
/// `Board` sees has passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    win_tile: u32,
    four_probability: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            win_tile: 2048,
            four_probability: 0.5,
        }
    }
}

impl Rules {
    pub fn new(win_tile: u32, four_probability: f64) -> Result<Self, RulesError> {
        let rules = Self {
            win_tile,
            four_probability,
        };
        rules.validate()?;

        Ok(rules)
    }

    /// A game is won once a tile of exactly this value exists.
    pub const fn win_tile(&self) -> u32 {
        self.win_tile
    }

    /// Chance that a spawned tile is a 4 rather than a 2.
    pub const fn four_probability(&self) -> f64 {
        self.four_probability
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| RulesError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, RulesError> {
        let rules: Self = toml::from_str(content)?;
        rules.validate()?;

        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.win_tile < 4 || !self.win_tile.is_power_of_two() {
            return Err(RulesError::WinTile(self.win_tile));
        }

        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(RulesError::FourProbability(self.four_probability));
        }

        Ok(())
    }
}
