//! Application layer driving the ledger from a stream of parsed rows.
//!
//! `StatsEngine` owns the ledger, tolerates bad rows and produces the final
//! `StatsReport`.

pub mod engine;
