//! Where a person's perk levels are read from
//!
//! By default the roster itself holds them. A host that keeps perk records
//! in a separate service implements [`PerkSource`] and hands it to the
//! training desk; its failures surface as configuration errors.

use crate::core::error::PerkSourceError;
use crate::roster::{Perk, Person};

/// Supplies the current perks of a person
pub trait PerkSource {
    fn perks(&self, person: &Person) -> Result<Vec<Perk>, PerkSourceError>;
}

/// Reads perks straight off the roster entry
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterPerks;

impl PerkSource for RosterPerks {
    fn perks(&self, person: &Person) -> Result<Vec<Perk>, PerkSourceError> {
        Ok(person.perks.clone())
    }
}
