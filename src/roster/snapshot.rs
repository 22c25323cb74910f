//! Roster snapshot handed over by the host
//!
//! The host owns the real roster; this is the copy the core reasons over.

use ahash::AHashSet;

use crate::core::types::CrewId;
use crate::roster::{FilterConfig, Person};

/// Pool membership at one point in time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Membership {
    /// Whether an active mission is in progress
    pub in_flight: bool,
    /// Crew of the active mission (ignored outside flight)
    pub active_crew: AHashSet<CrewId>,
    /// Hired pool
    pub hired: AHashSet<CrewId>,
    /// Applicant pool
    pub applicants: AHashSet<CrewId>,
}

impl Membership {
    pub fn is_active_crew(&self, id: &CrewId) -> bool {
        self.in_flight && self.active_crew.contains(id)
    }

    pub fn is_hired(&self, id: &CrewId) -> bool {
        self.hired.contains(id)
    }

    pub fn is_applicant(&self, id: &CrewId) -> bool {
        self.applicants.contains(id)
    }
}

/// Hired crew plus applicants, in host order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    in_flight: bool,
    crew: Vec<Person>,
    applicants: Vec<Person>,
    active_crew: Vec<CrewId>,
}

impl Roster {
    pub fn new(in_flight: bool) -> Self {
        Self {
            in_flight,
            ..Self::default()
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }

    /// Add a person to the hired pool
    pub fn hire(&mut self, person: Person) -> CrewId {
        let id = person.id;
        self.crew.push(person);
        id
    }

    /// Add a person to the applicant pool
    pub fn add_applicant(&mut self, person: Person) -> CrewId {
        let id = person.id;
        self.applicants.push(person);
        id
    }

    /// Replace the active mission's crew
    pub fn set_active_crew(&mut self, ids: impl IntoIterator<Item = CrewId>) {
        self.active_crew = ids.into_iter().collect();
    }

    pub fn crew(&self) -> &[Person] {
        &self.crew
    }

    pub fn applicants(&self) -> &[Person] {
        &self.applicants
    }

    pub fn len(&self) -> usize {
        self.crew.len() + self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applicants first, then hired crew
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.applicants.iter().chain(self.crew.iter())
    }

    pub fn get(&self, id: CrewId) -> Option<&Person> {
        self.iter().find(|person| person.id == id)
    }

    pub fn get_mut(&mut self, id: CrewId) -> Option<&mut Person> {
        self.applicants
            .iter_mut()
            .chain(self.crew.iter_mut())
            .find(|person| person.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.iter().find(|person| person.name == name)
    }

    /// Snapshot of who belongs where
    pub fn membership(&self) -> Membership {
        Membership {
            in_flight: self.in_flight,
            active_crew: self.active_crew.iter().copied().collect(),
            hired: self.crew.iter().map(|person| person.id).collect(),
            applicants: self.applicants.iter().map(|person| person.id).collect(),
        }
    }

    /// People visible under `config`, in roster order
    pub fn visible(&self, config: FilterConfig) -> Vec<&Person> {
        let membership = self.membership();
        self.iter()
            .filter(|person| config.matches(person, &membership))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::RosterStatus;

    #[test]
    fn test_iter_lists_applicants_first() {
        let mut roster = Roster::new(false);
        roster.hire(Person::new("Jebediah", RosterStatus::Available));
        roster.add_applicant(Person::new("Newbie", RosterStatus::Available));
        roster.hire(Person::new("Bill", RosterStatus::Available));

        let names: Vec<_> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Newbie", "Jebediah", "Bill"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_membership_snapshot() {
        let mut roster = Roster::new(true);
        let jeb = roster.hire(Person::new("Jebediah", RosterStatus::Assigned));
        let newbie = roster.add_applicant(Person::new("Newbie", RosterStatus::Available));
        roster.set_active_crew([jeb]);

        let membership = roster.membership();
        assert!(membership.is_hired(&jeb));
        assert!(membership.is_active_crew(&jeb));
        assert!(membership.is_applicant(&newbie));
        assert!(!membership.is_hired(&newbie));
    }

    #[test]
    fn test_active_crew_ignored_outside_flight() {
        let mut roster = Roster::new(false);
        let jeb = roster.hire(Person::new("Jebediah", RosterStatus::Assigned));
        roster.set_active_crew([jeb]);
        assert!(!roster.membership().is_active_crew(&jeb));
    }

    #[test]
    fn test_visible_is_stable() {
        let mut roster = Roster::new(false);
        for name in ["A", "B", "C", "D"] {
            roster.hire(Person::new(name, RosterStatus::Available));
        }
        let config = FilterConfig::for_context(false);
        let first: Vec<_> = roster.visible(config).iter().map(|p| p.id).collect();
        let second: Vec<_> = roster.visible(config).iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_get_mut_finds_applicants() {
        let mut roster = Roster::new(false);
        let id = roster.add_applicant(Person::new("Newbie", RosterStatus::Available));
        roster.get_mut(id).unwrap().name = "Renamed".into();
        assert_eq!(roster.get(id).unwrap().name, "Renamed");
        assert!(roster.find_by_name("Renamed").is_some());
    }
}
