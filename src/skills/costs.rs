//! Training costs - what it takes to reach each skill level
//!
//! The table holds one entry per level above the minimum. A missing entry
//! is a data error, never something to paper over with a fallback.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{ConfigurationError, SettingsError};
use crate::skills::SkillLevel;

/// Price of training a perk up to `target_level`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingCost {
    /// Level the training reaches
    #[serde(rename = "level")]
    pub target_level: SkillLevel,
    #[serde(default)]
    pub funds: f64,
    #[serde(default)]
    pub science: f64,
}

impl TrainingCost {
    pub fn new(target_level: SkillLevel, funds: f64, science: f64) -> Self {
        Self {
            target_level,
            funds,
            science,
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidCost {
            level: self.target_level,
            reason: reason.to_string(),
        };
        if self.target_level == SkillLevel::MIN {
            return Err(invalid("the minimum level cannot be a training target"));
        }
        if !self.funds.is_finite() || self.funds < 0.0 {
            return Err(invalid("funds must be a non-negative number"));
        }
        if !self.science.is_finite() || self.science < 0.0 {
            return Err(invalid("science must be a non-negative number"));
        }
        Ok(())
    }
}

/// Ordered table of training costs, indexed by target level
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    costs: Vec<TrainingCost>,
}

impl CostTable {
    /// Build a validated table. Entries are kept in ladder order.
    pub fn new(mut costs: Vec<TrainingCost>) -> Result<Self, ConfigurationError> {
        costs.sort_by_key(|cost| cost.target_level);
        let table = Self { costs };
        table.validate()?;
        Ok(table)
    }

    /// Build a table without validating it, to stand in for broken data
    #[cfg(test)]
    pub(crate) fn unchecked(mut costs: Vec<TrainingCost>) -> Self {
        costs.sort_by_key(|cost| cost.target_level);
        Self { costs }
    }

    /// Escalating default costs
    pub fn with_defaults() -> Self {
        Self {
            costs: vec![
                TrainingCost::new(SkillLevel::Basic, 10_000.0, 8.0),
                TrainingCost::new(SkillLevel::Intermediate, 25_000.0, 20.0),
                TrainingCost::new(SkillLevel::Advanced, 60_000.0, 45.0),
                TrainingCost::new(SkillLevel::Expert, 120_000.0, 90.0),
            ],
        }
    }

    /// Exact-match lookup by target level
    pub fn cost_for(&self, level: SkillLevel) -> Result<&TrainingCost, ConfigurationError> {
        self.costs
            .iter()
            .find(|cost| cost.target_level == level)
            .ok_or(ConfigurationError::MissingCost(level))
    }

    pub fn all(&self) -> &[TrainingCost] {
        &self.costs
    }

    /// Every reachable level must have exactly one well-formed entry
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for cost in &self.costs {
            cost.validate()?;
        }

        for pair in self.costs.windows(2) {
            if pair[0].target_level == pair[1].target_level {
                return Err(ConfigurationError::DuplicateCost(pair[0].target_level));
            }
        }

        for level in SkillLevel::ALL {
            let next = level.next();
            if next != level {
                self.cost_for(next)?;
            }
        }

        Ok(())
    }

    /// Load a cost table from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse `[[costs]]` entries from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_data: TomlCosts = toml::from_str(content)?;
        Ok(Self::new(toml_data.costs)?)
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[derive(Deserialize)]
struct TomlCosts {
    costs: Vec<TrainingCost>,
}
