pub mod config;
pub mod error;
pub mod types;

pub use config::{RosterConfig, TrainingSettings};
pub use error::{
    AdvancementError, ConfigurationError, CrewError, InsufficientResources, PerkSourceError, Result,
};
pub use types::{CrewId, GameMode};
