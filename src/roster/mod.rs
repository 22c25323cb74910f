//! Crew roster - people, their perks, and which of them the list shows

pub mod filter;
pub mod perks;
pub mod person;
pub mod selection;
pub mod snapshot;

pub use filter::{build_filter, FilterConfig};
pub use perks::{PerkSource, RosterPerks};
pub use person::{Perk, Person, RosterStatus, Specialty};
pub use selection::RosterSelection;
pub use snapshot::{Membership, Roster};
