//! Training desk - advances a person's perk one level for a price
//!
//! Checks run in a fixed order and the first failure wins:
//! eligibility, perk lookup, level cap, cost lookup, payment.
//! Nothing changes until payment has gone through.

use crate::core::error::{AdvancementError, ConfigurationError, Ineligibility};
use crate::core::types::GameMode;
use crate::roster::{Membership, Perk, PerkSource, Person, RosterPerks, Specialty};
use crate::skills::{next_level, CostTable, SkillLevel, TrainingCost};
use crate::training::Treasury;

/// What the desk would do for a given person and perk
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainingOffer {
    /// The person cannot be trained right now
    CannotTrain(Ineligibility),
    /// Already at the top of the ladder
    MaxLevel { current: SkillLevel },
    /// Training is possible at this price
    Upgrade {
        current: SkillLevel,
        next: SkillLevel,
        cost: TrainingCost,
    },
}

impl TrainingOffer {
    /// Text for the upgrade action
    pub fn label(&self, person: &Person) -> String {
        match self {
            TrainingOffer::CannotTrain(_) => {
                format!("{} cannot be trained right now.", person.name)
            }
            TrainingOffer::MaxLevel { .. } => "Max level".to_string(),
            TrainingOffer::Upgrade { next, cost, .. } => format!(
                "Upgrade to {} (Funds: {}, Science: {})",
                next, cost.funds, cost.science
            ),
        }
    }
}

pub struct TrainingDesk<'a> {
    costs: &'a CostTable,
    membership: &'a Membership,
    perks: &'a dyn PerkSource,
    mode: GameMode,
}

impl<'a> TrainingDesk<'a> {
    pub fn new(costs: &'a CostTable, membership: &'a Membership, mode: GameMode) -> Self {
        Self {
            costs,
            membership,
            perks: &RosterPerks,
            mode,
        }
    }

    /// Read perk levels from `perks` instead of the roster entries.
    /// Upgrades are still written to the person.
    pub fn with_perk_source(mut self, perks: &'a dyn PerkSource) -> Self {
        self.perks = perks;
        self
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Applicants are not hired yet; assigned crew are busy while a
    /// mission is flying.
    pub fn eligibility(&self, person: &Person) -> Result<(), Ineligibility> {
        if self.membership.is_applicant(&person.id) {
            return Err(Ineligibility::Applicant);
        }
        if person.is_assigned() && self.membership.in_flight {
            return Err(Ineligibility::AssignedInFlight);
        }
        Ok(())
    }

    /// Preview the action without touching anything
    pub fn offer(
        &self,
        person: &Person,
        specialty: Specialty,
    ) -> Result<TrainingOffer, ConfigurationError> {
        if let Err(reason) = self.eligibility(person) {
            return Ok(TrainingOffer::CannotTrain(reason));
        }
        let current = self.find_perk(person, specialty)?.skill_level;
        let next = next_level(current);
        if next == current {
            return Ok(TrainingOffer::MaxLevel { current });
        }
        let cost = *self.costs.cost_for(next)?;
        Ok(TrainingOffer::Upgrade {
            current,
            next,
            cost,
        })
    }

    /// Train `person`'s `specialty` perk one level, paying from `treasury`
    pub fn advance<T: Treasury + ?Sized>(
        &self,
        person: &mut Person,
        specialty: Specialty,
        treasury: &mut T,
    ) -> Result<Perk, AdvancementError> {
        tracing::debug!(
            "Training requested: {} {} ({})",
            person.name,
            specialty,
            self.mode
        );

        self.eligibility(person)
            .map_err(|reason| AdvancementError::NotEligible {
                name: person.name.clone(),
                reason,
            })?;

        let perk = self.find_perk(person, specialty).map_err(|err| {
            tracing::error!("{}", err);
            err
        })?;

        let next = next_level(perk.skill_level);
        if next == perk.skill_level {
            return Err(AdvancementError::MaxLevelReached {
                specialty,
                level: perk.skill_level,
            });
        }

        let cost = self.costs.cost_for(next).map_err(|err| {
            tracing::error!("Training cost lookup failed: {}", err);
            err
        })?;

        if let Err(shortfall) = treasury.check_and_spend(self.mode, cost) {
            tracing::warn!("Training rejected for {}: {}", person.name, shortfall);
            return Err(shortfall.into());
        }

        let upgraded = Perk::new(specialty, next);
        person.set_perk(upgraded);
        tracing::info!(
            "{} trained {} from {} to {} (funds {}, science {})",
            person.name,
            specialty,
            perk.skill_level,
            next,
            cost.funds,
            cost.science
        );
        Ok(upgraded)
    }

    fn find_perk(
        &self,
        person: &Person,
        specialty: Specialty,
    ) -> Result<Perk, ConfigurationError> {
        self.perks
            .perks(person)?
            .into_iter()
            .find(|perk| perk.specialty == specialty)
            .ok_or_else(|| ConfigurationError::UnknownPerk {
                name: person.name.clone(),
                specialty,
            })
    }
}
