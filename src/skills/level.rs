//! Skill level ladder
//!
//! Levels form a closed, totally ordered set. Training moves a perk one
//! rung up; the top rung is sticky.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank within a perk
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum SkillLevel {
    /// Never trained
    #[default]
    None,
    Basic,
    Intermediate,
    Advanced,
    /// Highest level, cannot be trained further
    Expert,
}

impl SkillLevel {
    /// All levels in ascending order
    pub const ALL: [SkillLevel; 5] = [
        SkillLevel::None,
        SkillLevel::Basic,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub const MIN: SkillLevel = SkillLevel::None;
    pub const MAX: SkillLevel = SkillLevel::Expert;

    /// The next rung up, or `self` at the top.
    ///
    /// This is the only place that knows where the ladder ends; callers
    /// detect saturation with `level.next() == level`.
    pub fn next(self) -> SkillLevel {
        match self {
            SkillLevel::None => SkillLevel::Basic,
            SkillLevel::Basic => SkillLevel::Intermediate,
            SkillLevel::Intermediate => SkillLevel::Advanced,
            SkillLevel::Advanced => SkillLevel::Expert,
            SkillLevel::Expert => SkillLevel::Expert,
        }
    }

    pub fn is_max(self) -> bool {
        self.next() == self
    }

    /// Levels a training can target (everything above the minimum)
    pub fn reachable() -> impl Iterator<Item = SkillLevel> {
        SkillLevel::ALL.into_iter().filter(|level| *level != SkillLevel::MIN)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SkillLevel::None => "None",
            SkillLevel::Basic => "Basic",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Free-function form of [`SkillLevel::next`]
pub fn next_level(current: SkillLevel) -> SkillLevel {
    current.next()
}
