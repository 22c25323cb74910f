//! Concurrent spending against one shared ledger
//!
//! The host is single-threaded today, but the ledger must still refuse to
//! let two trainings pass the balance check on the same money.

use crew_roster::core::GameMode;
use crew_roster::roster::{Person, Roster, RosterStatus, Specialty};
use crew_roster::skills::{CostTable, SkillLevel, TrainingCost};
use crew_roster::training::{ResourceLedger, SharedLedger, TrainingDesk, Treasury};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_racing_spends_never_overdraw() {
    let cost = TrainingCost::new(SkillLevel::Basic, 100.0, 10.0);
    let ledger = SharedLedger::new(ResourceLedger::new(550.0, 1_000.0));
    let barrier = Arc::new(Barrier::new(16));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let mut handle = ledger.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                handle.check_and_spend(GameMode::FullEconomy, &cost).is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 5);
    assert_eq!(ledger.balance(), ResourceLedger::new(50.0, 950.0));
}

#[test]
fn test_desks_share_one_treasury() {
    let costs = CostTable::with_defaults();
    let ledger = SharedLedger::new(ResourceLedger::new(15_000.0, 100.0));

    let results: Vec<_> = (0..4)
        .map(|i| {
            let costs = costs.clone();
            let mut handle = ledger.clone();
            thread::spawn(move || {
                let mut roster = Roster::new(false);
                let id = roster.hire(
                    Person::new(format!("Trainee {}", i), RosterStatus::Available)
                        .with_perk(Specialty::Mechanic, SkillLevel::None),
                );
                let membership = roster.membership();
                let desk = TrainingDesk::new(&costs, &membership, GameMode::FullEconomy);
                let person = roster.get_mut(id).unwrap();
                desk.advance(person, Specialty::Mechanic, &mut handle).is_ok()
            })
        })
        .map(|h| h.join().unwrap())
        .collect();

    // Basic costs 10 000 funds: only one trainee can be paid for
    assert_eq!(results.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(ledger.balance(), ResourceLedger::new(5_000.0, 92.0));
}
