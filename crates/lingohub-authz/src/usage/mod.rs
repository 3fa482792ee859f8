//! Usage counting for strict quota enforcement.

pub mod ledger;

pub use ledger::UsageLedger;
