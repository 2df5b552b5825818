//! Shared configuration types for CLI commands

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Interactive game settings.
///
/// Can be read from a JSON file; missing fields take their defaults, so
/// `{"human": "O"}` is a complete config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Side the human plays; the computer takes the other one
    pub human: Player,

    /// Print how many nodes each computer search visited
    pub show_node_counts: bool,

    /// Also report the size of the unpruned tree for each computer move
    pub compare_unpruned: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            show_node_counts: true,
            compare_unpruned: false,
        }
    }
}

impl PlayConfig {
    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Serialization`] if it is not valid config JSON.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn computer(&self) -> Player {
        self.human.opponent()
    }
}

/// Verification sweep settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Number of random positions to check; `None` checks every reachable position
    pub sample: Option<usize>,

    /// Random seed for sampling
    pub seed: u64,

    /// Whether to show a progress bar
    pub progress: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            sample: None,
            seed: 42,
            progress: true,
        }
    }
}
