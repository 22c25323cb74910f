//! Roster filtering
//!
//! A person is visible when any enabled toggle's condition holds. The
//! predicate reads only the config and the membership snapshot it was
//! built from, so equal inputs always give the same answer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::roster::{Membership, Person, RosterStatus};

/// Which groups of people the roster list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Crew of the active mission (flight only)
    pub show_active_crew: bool,
    /// Anyone assigned to a vessel
    pub show_assigned: bool,
    /// Hired crew idling at the space center
    pub show_available: bool,
    /// Applicants not yet hired
    pub show_applicants: bool,
}

impl FilterConfig {
    /// Nothing enabled: the list is empty
    pub const NONE: FilterConfig = FilterConfig {
        show_active_crew: false,
        show_assigned: false,
        show_available: false,
        show_applicants: false,
    };

    /// Starting toggles for the current scene. In flight the list opens on
    /// the active crew; elsewhere on everyone hired.
    pub fn for_context(in_flight: bool) -> Self {
        Self {
            show_active_crew: in_flight,
            show_assigned: !in_flight,
            show_available: !in_flight,
            show_applicants: false,
        }
    }

    /// The crew toggle has no meaning outside flight; clear it there.
    pub fn normalized(self, in_flight: bool) -> Self {
        Self {
            show_active_crew: self.show_active_crew && in_flight,
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterConfig::NONE
    }

    /// Evaluate the filter against one person
    pub fn matches(&self, person: &Person, membership: &Membership) -> bool {
        (self.show_active_crew && membership.is_active_crew(&person.id))
            || (self.show_assigned && person.status == RosterStatus::Assigned)
            || (self.show_available
                && membership.is_hired(&person.id)
                && person.status == RosterStatus::Available)
            || (self.show_applicants && membership.is_applicant(&person.id))
    }
}

impl fmt::Display for FilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Crew: {}, Assigned: {}, Hired: {}, Applicants: {})",
            self.show_active_crew, self.show_assigned, self.show_available, self.show_applicants
        )
    }
}

/// Build a visibility predicate from the toggles and a membership snapshot
pub fn build_filter(
    config: FilterConfig,
    membership: &Membership,
) -> impl Fn(&Person) -> bool + '_ {
    move |person| config.matches(person, membership)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    fn sample_roster(in_flight: bool) -> Roster {
        let mut roster = Roster::new(in_flight);
        let jeb = roster.hire(Person::new("Jebediah", RosterStatus::Assigned));
        roster.hire(Person::new("Bill", RosterStatus::Assigned));
        roster.hire(Person::new("Bob", RosterStatus::Available));
        roster.hire(Person::new("Gus", RosterStatus::Dead));
        roster.add_applicant(Person::new("Newbie", RosterStatus::Available));
        roster.set_active_crew([jeb]);
        roster
    }

    fn visible_names(roster: &Roster, config: FilterConfig) -> Vec<String> {
        roster
            .visible(config)
            .into_iter()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn test_no_flags_shows_nobody() {
        let roster = sample_roster(true);
        assert!(visible_names(&roster, FilterConfig::NONE).is_empty());
    }

    #[test]
    fn test_active_crew_only_in_flight() {
        let crew_only = FilterConfig {
            show_active_crew: true,
            ..FilterConfig::NONE
        };
        assert_eq!(visible_names(&sample_roster(true), crew_only), vec!["Jebediah"]);
        assert!(visible_names(&sample_roster(false), crew_only).is_empty());
    }

    #[test]
    fn test_assigned_matches_status() {
        let assigned = FilterConfig {
            show_assigned: true,
            ..FilterConfig::NONE
        };
        assert_eq!(
            visible_names(&sample_roster(false), assigned),
            vec!["Jebediah", "Bill"]
        );
    }

    #[test]
    fn test_available_requires_hired_pool() {
        let available = FilterConfig {
            show_available: true,
            ..FilterConfig::NONE
        };
        // The applicant has status Available but is not in the hired pool
        assert_eq!(visible_names(&sample_roster(false), available), vec!["Bob"]);
    }

    #[test]
    fn test_applicants() {
        let applicants = FilterConfig {
            show_applicants: true,
            ..FilterConfig::NONE
        };
        assert_eq!(visible_names(&sample_roster(false), applicants), vec!["Newbie"]);
    }

    #[test]
    fn test_context_defaults() {
        let flight = FilterConfig::for_context(true);
        assert!(flight.show_active_crew);
        assert!(!flight.show_assigned && !flight.show_available && !flight.show_applicants);

        let center = FilterConfig::for_context(false);
        assert!(!center.show_active_crew);
        assert!(center.show_assigned && center.show_available);
        assert!(!center.show_applicants);
    }

    #[test]
    fn test_normalized_clears_crew_outside_flight() {
        let all = FilterConfig {
            show_active_crew: true,
            show_assigned: true,
            show_available: true,
            show_applicants: true,
        };
        assert!(!all.normalized(false).show_active_crew);
        assert_eq!(all.normalized(true), all);
    }

    #[test]
    fn test_equal_configs_equal_predicates() {
        let roster = sample_roster(true);
        let membership = roster.membership();
        let a = build_filter(FilterConfig::for_context(true), &membership);
        let b = build_filter(FilterConfig::for_context(true), &membership);
        for person in roster.iter() {
            assert_eq!(a(person), b(person));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FilterConfig::for_context(false).to_string(),
            "(Crew: false, Assigned: true, Hired: true, Applicants: false)"
        );
    }
}
