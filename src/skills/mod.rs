//! Skill levels and what it costs to climb them
//!
//! A perk sits on a five-rung ladder. Each training moves it one rung up
//! and is priced by the rung it reaches.

pub mod costs;
pub mod level;

pub use costs::{CostTable, TrainingCost};
pub use level::{next_level, SkillLevel};
