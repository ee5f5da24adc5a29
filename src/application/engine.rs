use crate::domain::invoice::Invoice;
use crate::domain::ledger::{InvoiceLedger, LedgerConfig};
use crate::error::{Result, StatsError};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

/// Summary of a statistics run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    /// Invoices accepted into the ledger.
    pub invoices: usize,
    /// Rows that were unreadable or refused by the ledger.
    pub rejected: usize,
    pub mean: Option<Decimal>,
    pub median: Option<Decimal>,
}

/// Feeds parsed invoices into an [`InvoiceLedger`] and reports on the result.
///
/// Rejections are counted and logged, never fatal, so a single bad row does
/// not stop the run.
pub struct StatsEngine {
    ledger: InvoiceLedger,
    rejected: usize,
}

impl StatsEngine {
    /// Creates a new `StatsEngine` over an empty ledger with the given limits.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            ledger: InvoiceLedger::with_config(config),
            rejected: 0,
        }
    }

    pub fn ledger(&self) -> &InvoiceLedger {
        &self.ledger
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Submits one row's outcome: a parsed invoice or the error that prevented
    /// parsing it.
    ///
    /// Returns whether the invoice was stored.
    pub fn submit(&mut self, row: std::result::Result<Invoice, StatsError>) -> bool {
        let outcome = row.and_then(|invoice| self.ledger.add(invoice).map_err(StatsError::from));
        match outcome {
            Ok(()) => true,
            Err(e) => {
                self.rejected += 1;
                warn!(error = %e, "rejected invoice");
                false
            }
        }
    }

    /// Adds a batch with the ledger's stop-at-first-failure semantics.
    ///
    /// The failing invoice counts as rejected; the rest of the batch is not
    /// looked at.
    pub fn submit_batch(&mut self, invoices: Vec<Invoice>) -> Result<()> {
        self.ledger.add_all(invoices).inspect_err(|e| {
            self.rejected += 1;
            warn!(error = %e, "batch stopped");
        })
    }

    /// Consumes the engine and computes the final statistics.
    pub fn into_report(self) -> Result<StatsReport> {
        let (mean, median) = if self.ledger.is_empty() {
            (None, None)
        } else {
            (Some(self.ledger.mean()?), Some(self.ledger.median()?))
        };

        info!(
            invoices = self.ledger.len(),
            rejected = self.rejected,
            "statistics computed"
        );

        Ok(StatsReport {
            invoices: self.ledger.len(),
            rejected: self.rejected,
            mean,
            median,
        })
    }
}
