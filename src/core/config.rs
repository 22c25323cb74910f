//! Training settings and roster files
//!
//! Both are plain TOML. Settings pick the game mode, the starting ledger
//! and optionally override the cost table; roster files describe the crew
//! a host would hand over.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{ConfigurationError, SettingsError};
use crate::core::types::GameMode;
use crate::roster::{Person, Roster};
use crate::skills::{CostTable, TrainingCost};
use crate::training::ResourceLedger;

/// Settings for the training desk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingSettings {
    /// Economic rules to train under
    #[serde(default)]
    pub mode: GameMode,

    /// Starting balance
    #[serde(default)]
    pub ledger: ResourceLedger,

    /// Cost table override. The default table applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<Vec<TrainingCost>>,
}

impl TrainingSettings {
    /// Load settings from a TOML file and validate them
    pub fn load_from_toml(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: TrainingSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string(self).map_err(|e| SettingsError::Invalid(e.to_string()))
    }

    /// Apply host overrides on top of the file, then validate again
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        funds: Option<f64>,
        science: Option<f64>,
    ) -> Result<Self, SettingsError> {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(funds) = funds {
            self.ledger.funds = funds;
        }
        if let Some(science) = science {
            self.ledger.science = science;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn cost_table(&self) -> Result<CostTable, ConfigurationError> {
        match &self.costs {
            Some(costs) => CostTable::new(costs.clone()),
            None => Ok(CostTable::with_defaults()),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let ResourceLedger { funds, science } = self.ledger;
        if !funds.is_finite() || funds < 0.0 || !science.is_finite() || science < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "ledger must be non-negative (funds {}, science {})",
                funds, science
            )));
        }
        self.cost_table()?;
        Ok(())
    }
}

/// Roster description, as a host would hand it over
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub in_flight: bool,
    /// Hired pool
    #[serde(default)]
    pub crew: Vec<Person>,
    #[serde(default)]
    pub applicants: Vec<Person>,
    /// Names of the active mission's crew
    #[serde(default)]
    pub active_crew: Vec<String>,
}

impl RosterConfig {
    pub fn load_from_toml(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the roster snapshot, resolving active crew names to hired people
    pub fn build_roster(&self) -> Result<Roster, SettingsError> {
        let mut roster = Roster::new(self.in_flight);
        for person in &self.crew {
            roster.hire(person.clone());
        }
        for person in &self.applicants {
            roster.add_applicant(person.clone());
        }

        let mut active = Vec::with_capacity(self.active_crew.len());
        for name in &self.active_crew {
            let person = self
                .crew
                .iter()
                .find(|person| &person.name == name)
                .ok_or_else(|| {
                    SettingsError::Invalid(format!("active crew member '{}' is not hired", name))
                })?;
            active.push(person.id);
        }
        roster.set_active_crew(active);
        Ok(roster)
    }
}
