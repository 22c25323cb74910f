//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a crew member or applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrewId(pub Uuid);

impl CrewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CrewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CrewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Economic ruleset the host game is running under
///
/// Decides which resources, if any, constrain training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameMode {
    /// Career: funds and science are both spent
    #[default]
    FullEconomy,
    /// Science sandbox: only science is spent
    ScienceOnlyEconomy,
    /// Sandbox: training is free
    Unconstrained,
}

impl GameMode {
    /// Does this mode spend funds?
    pub fn charges_funds(&self) -> bool {
        matches!(self, GameMode::FullEconomy)
    }

    /// Does this mode spend science?
    pub fn charges_science(&self) -> bool {
        matches!(self, GameMode::FullEconomy | GameMode::ScienceOnlyEconomy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::FullEconomy => "FullEconomy",
            GameMode::ScienceOnlyEconomy => "ScienceOnlyEconomy",
            GameMode::Unconstrained => "Unconstrained",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fulleconomy" | "full" | "career" => Ok(GameMode::FullEconomy),
            "scienceonlyeconomy" | "science" | "science_sandbox" => {
                Ok(GameMode::ScienceOnlyEconomy)
            }
            "unconstrained" | "sandbox" => Ok(GameMode::Unconstrained),
            other => Err(format!("unknown game mode '{}'", other)),
        }
    }
}
