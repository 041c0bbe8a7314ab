//! Builder configuration loaded from RON.
//!
//! Every field has a default, so an empty `BuilderConfig()` document (or
//! no file at all) gives the stock behaviour.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::random::AssemblyConfig;
use crate::team::INITIAL_TEAM_NAME;

/// Tunables for the roster builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Name given to a team created from scratch.
    pub default_team_name: String,
    /// Delay between the last edit and the token write-back, in milliseconds.
    pub debounce_ms: u64,
    /// Random assembly tuning.
    pub assembly: AssemblyConfig,
    /// Cost range offered for random vehicles, `[min, max]` in cans.
    pub random_cost_range: (u32, u32),
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_team_name: INITIAL_TEAM_NAME.to_string(),
            debounce_ms: 10,
            assembly: AssemblyConfig::default(),
            random_cost_range: (0, 100),
        }
    }
}

impl BuilderConfig {
    /// Parse a configuration from RON text.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ConfigParse`] if the text is not valid RON for
    /// this structure.
    pub fn from_ron_str(contents: &str, origin: &str) -> Result<Self> {
        ron::from_str(contents).map_err(|source| RosterError::ConfigParse {
            origin: origin.to_string(),
            source,
        })
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: origin.clone(),
            source,
        })?;
        let config = Self::from_ron_str(&contents, &origin)?;
        tracing::info!("Loaded configuration from '{}'", origin);
        Ok(config)
    }

    /// Debounce delay as a [`Duration`].
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
