use thiserror::Error;

use crate::core::types::GameMode;
use crate::roster::Specialty;
use crate::skills::SkillLevel;

/// Broken data or integration: a bug, never a user action
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("No training cost defined for level {0}")]
    MissingCost(SkillLevel),

    #[error("Training cost for level {0} defined more than once")]
    DuplicateCost(SkillLevel),

    #[error("Invalid training cost for level {level}: {reason}")]
    InvalidCost { level: SkillLevel, reason: String },

    #[error("{name} has no {specialty} perk")]
    UnknownPerk { name: String, specialty: Specialty },

    #[error("Perk data unavailable: {0}")]
    PerkDataUnavailable(#[from] PerkSourceError),
}

/// Failures of the service that keeps perk records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerkSourceError {
    #[error("perk records are not installed")]
    NotInstalled,

    #[error("something is wrong with the perk records: {0}")]
    Unavailable(String),
}

/// The ledger cannot cover a training cost under the active mode
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "You cannot afford this training! ({mode}: needs {funds_needed} funds / {science_needed} science, \
     have {funds_available} / {science_available})"
)]
pub struct InsufficientResources {
    pub mode: GameMode,
    pub funds_needed: f64,
    pub science_needed: f64,
    pub funds_available: f64,
    pub science_available: f64,
}

/// Why a person cannot be trained right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    Applicant,
    AssignedInFlight,
}

impl std::fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ineligibility::Applicant => write!(f, "not hired yet"),
            Ineligibility::AssignedInFlight => write!(f, "assigned to the active mission"),
        }
    }
}

/// Every way a perk advancement can be refused
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvancementError {
    #[error("{name} cannot be trained right now ({reason})")]
    NotEligible { name: String, reason: Ineligibility },

    #[error("{specialty} is already at max level ({level})")]
    MaxLevelReached { specialty: Specialty, level: SkillLevel },

    #[error(transparent)]
    InsufficientResources(#[from] InsufficientResources),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl AdvancementError {
    /// Configuration errors point at a bug or broken integration and
    /// must be surfaced apart from ordinary rejections.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AdvancementError::Configuration(_))
    }
}

/// Errors from loading settings, cost tables and roster files
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

#[derive(Error, Debug)]
pub enum CrewError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Advancement(#[from] AdvancementError),

    #[error("Crew member not found: {0}")]
    CrewNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrewError>;
