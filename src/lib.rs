//! Crew Roster - crew filtering and perk training for the space program

pub mod core;
pub mod roster;
pub mod skills;
pub mod training;
