//! Crew members, their roster status and their perks

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::CrewId;
use crate::skills::SkillLevel;

/// Status tag as reported by the host roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RosterStatus {
    /// Hired and idle at the space center
    #[default]
    Available,
    /// Assigned to a vessel
    Assigned,
    Dead,
    Missing,
}

/// Skill specialty a perk trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    Mechanic,
    Electrician,
    Engineer,
    Pilot,
    Scientist,
}

impl Specialty {
    pub const ALL: [Specialty; 5] = [
        Specialty::Mechanic,
        Specialty::Electrician,
        Specialty::Engineer,
        Specialty::Pilot,
        Specialty::Scientist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Specialty::Mechanic => "Mechanic",
            Specialty::Electrician => "Electrician",
            Specialty::Engineer => "Engineer",
            Specialty::Pilot => "Pilot",
            Specialty::Scientist => "Scientist",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl std::str::FromStr for Specialty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .into_iter()
            .find(|specialty| specialty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown specialty '{}'", s))
    }
}

/// One specialty held by a person, at some level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perk {
    pub specialty: Specialty,
    #[serde(rename = "level", default)]
    pub skill_level: SkillLevel,
}

impl Perk {
    pub fn new(specialty: Specialty, skill_level: SkillLevel) -> Self {
        Self {
            specialty,
            skill_level,
        }
    }
}

/// A crew member or applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: CrewId,
    pub name: String,
    #[serde(default)]
    pub status: RosterStatus,
    /// Display order only; at most one perk per specialty
    #[serde(default)]
    pub perks: Vec<Perk>,
}

impl Person {
    pub fn new(name: impl Into<String>, status: RosterStatus) -> Self {
        Self {
            id: CrewId::new(),
            name: name.into(),
            status,
            perks: Vec::new(),
        }
    }

    pub fn with_perk(mut self, specialty: Specialty, level: SkillLevel) -> Self {
        self.set_perk(Perk::new(specialty, level));
        self
    }

    pub fn perk(&self, specialty: Specialty) -> Option<&Perk> {
        self.perks.iter().find(|perk| perk.specialty == specialty)
    }

    /// Replace the perk with the same specialty, keeping its slot, or
    /// append it if the person does not have that specialty yet.
    pub fn set_perk(&mut self, perk: Perk) {
        match self
            .perks
            .iter_mut()
            .find(|existing| existing.specialty == perk.specialty)
        {
            Some(existing) => *existing = perk,
            None => self.perks.push(perk),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.status == RosterStatus::Assigned
    }
}
