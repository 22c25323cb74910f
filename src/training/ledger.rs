//! Resource ledger - the funds and science training is paid from
//!
//! Spending is all-or-nothing: every charged resource is checked before
//! anything is deducted.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::error::InsufficientResources;
use crate::core::types::GameMode;
use crate::skills::TrainingCost;

/// Spendable resources
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceLedger {
    #[serde(default)]
    pub funds: f64,
    #[serde(default)]
    pub science: f64,
}

impl ResourceLedger {
    pub fn new(funds: f64, science: f64) -> Self {
        Self { funds, science }
    }

    /// Check if the ledger covers `cost` under `mode`
    pub fn can_afford(&self, mode: GameMode, cost: &TrainingCost) -> bool {
        let funds_ok = !mode.charges_funds() || self.funds >= cost.funds;
        let science_ok = !mode.charges_science() || self.science >= cost.science;
        funds_ok && science_ok
    }

    /// Deduct `cost` if the ledger covers it, otherwise leave it untouched
    pub fn check_and_spend(
        &mut self,
        mode: GameMode,
        cost: &TrainingCost,
    ) -> Result<(), InsufficientResources> {
        if !self.can_afford(mode, cost) {
            return Err(self.shortfall(mode, cost));
        }
        if mode.charges_funds() {
            self.funds -= cost.funds;
        }
        if mode.charges_science() {
            self.science -= cost.science;
        }
        Ok(())
    }

    fn shortfall(&self, mode: GameMode, cost: &TrainingCost) -> InsufficientResources {
        InsufficientResources {
            mode,
            funds_needed: if mode.charges_funds() { cost.funds } else { 0.0 },
            science_needed: if mode.charges_science() { cost.science } else { 0.0 },
            funds_available: self.funds,
            science_available: self.science,
        }
    }
}

/// Free-function form of [`ResourceLedger::check_and_spend`]
pub fn check_and_spend(
    mode: GameMode,
    cost: &TrainingCost,
    ledger: &mut ResourceLedger,
) -> Result<(), InsufficientResources> {
    ledger.check_and_spend(mode, cost)
}

/// Anything training can be paid from
///
/// Implementations must make the check and the deduction one step: no
/// other caller may observe or spend in between.
pub trait Treasury {
    fn check_and_spend(
        &mut self,
        mode: GameMode,
        cost: &TrainingCost,
    ) -> Result<(), InsufficientResources>;

    /// Current balance
    fn balance(&self) -> ResourceLedger;
}

impl Treasury for ResourceLedger {
    fn check_and_spend(
        &mut self,
        mode: GameMode,
        cost: &TrainingCost,
    ) -> Result<(), InsufficientResources> {
        ResourceLedger::check_and_spend(self, mode, cost)
    }

    fn balance(&self) -> ResourceLedger {
        *self
    }
}

/// Ledger handle that can be cloned across threads
///
/// The lock is held across the check and the spend, so two concurrent
/// trainings can never both pass the check on the same balance.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<ResourceLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: ResourceLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // The ledger is only written after a passed check, in one step, so a
    // poisoned lock still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, ResourceLedger> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Treasury for SharedLedger {
    fn check_and_spend(
        &mut self,
        mode: GameMode,
        cost: &TrainingCost,
    ) -> Result<(), InsufficientResources> {
        self.lock().check_and_spend(mode, cost)
    }

    fn balance(&self) -> ResourceLedger {
        *self.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillLevel;

    fn cost(funds: f64, science: f64) -> TrainingCost {
        TrainingCost::new(SkillLevel::Basic, funds, science)
    }

    #[test]
    fn test_full_economy_partial_shortfall_spends_nothing() {
        let mut ledger = ResourceLedger::new(100.0, 40.0);
        let result = check_and_spend(GameMode::FullEconomy, &cost(100.0, 50.0), &mut ledger);
        assert!(result.is_err());
        assert_eq!(ledger, ResourceLedger::new(100.0, 40.0));
    }

    #[test]
    fn test_full_economy_funds_shortfall_spends_nothing() {
        let mut ledger = ResourceLedger::new(99.0, 500.0);
        let err = check_and_spend(GameMode::FullEconomy, &cost(100.0, 50.0), &mut ledger)
            .unwrap_err();
        assert_eq!(err.funds_needed, 100.0);
        assert_eq!(err.funds_available, 99.0);
        assert_eq!(ledger, ResourceLedger::new(99.0, 500.0));
    }

    #[test]
    fn test_full_economy_spends_both() {
        let mut ledger = ResourceLedger::new(150.0, 60.0);
        check_and_spend(GameMode::FullEconomy, &cost(100.0, 50.0), &mut ledger).unwrap();
        assert_eq!(ledger, ResourceLedger::new(50.0, 10.0));
    }

    #[test]
    fn test_exact_balance_is_enough() {
        let mut ledger = ResourceLedger::new(100.0, 50.0);
        check_and_spend(GameMode::FullEconomy, &cost(100.0, 50.0), &mut ledger).unwrap();
        assert_eq!(ledger, ResourceLedger::new(0.0, 0.0));
    }

    #[test]
    fn test_science_only_ignores_funds() {
        let mut ledger = ResourceLedger::new(0.0, 60.0);
        check_and_spend(GameMode::ScienceOnlyEconomy, &cost(100.0, 50.0), &mut ledger).unwrap();
        assert_eq!(ledger, ResourceLedger::new(0.0, 10.0));
    }

    #[test]
    fn test_science_only_shortfall() {
        let mut ledger = ResourceLedger::new(1_000.0, 49.0);
        let err = check_and_spend(GameMode::ScienceOnlyEconomy, &cost(100.0, 50.0), &mut ledger)
            .unwrap_err();
        assert_eq!(err.funds_needed, 0.0);
        assert_eq!(ledger, ResourceLedger::new(1_000.0, 49.0));
    }

    #[test]
    fn test_unconstrained_always_succeeds() {
        let mut ledger = ResourceLedger::new(0.0, 0.0);
        check_and_spend(GameMode::Unconstrained, &cost(1e9, 1e9), &mut ledger).unwrap();
        assert_eq!(ledger, ResourceLedger::default());
    }

    #[test]
    fn test_shared_ledger_handles_see_same_balance() {
        let shared = SharedLedger::new(ResourceLedger::new(300.0, 30.0));
        let mut handle = shared.clone();
        handle
            .check_and_spend(GameMode::FullEconomy, &cost(100.0, 10.0))
            .unwrap();
        assert_eq!(shared.balance(), ResourceLedger::new(200.0, 20.0));
    }
}
