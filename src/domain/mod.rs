//! Invoice value type, the bounded ledger and its statistics.

pub mod invoice;
pub mod ledger;
pub mod stats;
