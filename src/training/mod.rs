//! Training - paying for perk advancement

pub mod desk;
pub mod ledger;

pub use desk::{TrainingDesk, TrainingOffer};
pub use ledger::{check_and_spend, ResourceLedger, SharedLedger, Treasury};
