use super::invoice::{Invoice, MAX_INVOICE_AMOUNT};
use super::stats;
use crate::error::{InvoiceError, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Maximum number of invoices a ledger stores by default.
pub const MAX_INVOICES: usize = 20_000_000;

/// Limits enforced by an [`InvoiceLedger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Number of invoices after which `add` is refused.
    pub max_invoices: usize,
    /// Exclusive upper bound on a single invoice amount.
    pub max_invoice_amount: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_invoices: MAX_INVOICES,
            max_invoice_amount: MAX_INVOICE_AMOUNT,
        }
    }
}

/// Bounded, insertion-ordered store of validated invoices.
///
/// Every stored invoice has passed [`Invoice::check_valid_within`] with the
/// configured amount limit, and the ledger never holds more than
/// `max_invoices` entries.
#[derive(Debug, Clone, Default)]
pub struct InvoiceLedger {
    invoices: Vec<Invoice>,
    config: LedgerConfig,
}

impl InvoiceLedger {
    /// Creates an empty ledger with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger with custom limits.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            invoices: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Stored invoices in insertion order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Validates and appends a single invoice.
    ///
    /// Capacity is checked first, so a full ledger refuses any payload with
    /// `CapacityExceeded`. A rejected invoice is never stored.
    pub fn add(&mut self, invoice: Invoice) -> Result<()> {
        if self.invoices.len() >= self.config.max_invoices {
            return Err(InvoiceError::CapacityExceeded {
                max_invoices: self.config.max_invoices,
            });
        }

        invoice.check_valid_within(self.config.max_invoice_amount)?;

        debug!(
            dollars = invoice.dollars,
            cents = invoice.cents,
            "invoice accepted"
        );
        self.invoices.push(invoice);
        Ok(())
    }

    /// Adds invoices in order, stopping at the first failure.
    ///
    /// Invoices accepted before the failure stay in the ledger.
    pub fn add_all<I>(&mut self, invoices: I) -> Result<()>
    where
        I: IntoIterator<Item = Invoice>,
    {
        for invoice in invoices {
            self.add(invoice)?;
        }
        Ok(())
    }

    /// Removes every stored invoice. Limits are kept.
    pub fn clear(&mut self) {
        self.invoices.clear();
    }

    /// Median amount to the cent, half a cent rounding down.
    pub fn median(&self) -> Result<Decimal> {
        stats::median(&self.invoices)
    }

    /// Mean amount to the cent, half a cent rounding down.
    pub fn mean(&self) -> Result<Decimal> {
        stats::mean(&self.invoices)
    }
}
