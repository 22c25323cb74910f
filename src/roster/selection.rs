//! Which person and perk the player has picked
//!
//! The person index resets whenever the filter toggles change, and both
//! indices fall back to the first entry when their list shrinks under them.

use crate::roster::{FilterConfig, Perk, Person};

#[derive(Debug, Clone)]
pub struct RosterSelection {
    active: FilterConfig,
    previous: FilterConfig,
    crew_index: usize,
    perk_index: usize,
}

impl RosterSelection {
    pub fn new(in_flight: bool) -> Self {
        let filter = FilterConfig::for_context(in_flight);
        Self {
            active: filter,
            previous: filter,
            crew_index: 0,
            perk_index: 0,
        }
    }

    pub fn filter(&self) -> FilterConfig {
        self.active
    }

    /// Apply this frame's toggles. Returns true when they differ from the
    /// previous frame, in which case the person selection starts over.
    pub fn update_filter(&mut self, config: FilterConfig, in_flight: bool) -> bool {
        self.previous = self.active;
        self.active = config.normalized(in_flight);
        let changed = self.filter_changed();
        if changed {
            self.crew_index = 0;
        }
        changed
    }

    pub fn filter_changed(&self) -> bool {
        self.active != self.previous
    }

    pub fn select_crew(&mut self, index: usize) {
        self.crew_index = index;
    }

    pub fn select_perk(&mut self, index: usize) {
        self.perk_index = index;
    }

    pub fn crew_index(&self) -> usize {
        self.crew_index
    }

    pub fn perk_index(&self) -> usize {
        self.perk_index
    }

    /// Resolve the selected person against the current visible list
    pub fn selected_person<'a>(&mut self, visible: &[&'a Person]) -> Option<&'a Person> {
        if self.crew_index >= visible.len() {
            self.crew_index = 0;
        }
        visible.get(self.crew_index).copied()
    }

    /// Resolve the selected perk on `person`
    pub fn selected_perk(&mut self, person: &Person) -> Option<Perk> {
        if self.perk_index >= person.perks.len() {
            self.perk_index = 0;
        }
        person.perks.get(self.perk_index).copied()
    }
}
